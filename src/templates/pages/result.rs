// templates/pages/result.rs

use crate::domain::pricing::PredictionResult;
use maud::{html, Markup};

/// The fragment swapped into `#prediction` after a successful submit.
pub fn prediction_result(result: &PredictionResult) -> Markup {
    html! {
        div class="result success fade-in" {
            p class="price" {
                "💰 Estimated Nightly Price: "
                strong { (result.display_price()) }
            }
            p class="caption" { (result.disclaimer()) }
        }
    }
}

pub fn prediction_error(message: &str) -> Markup {
    html! {
        div class="result failure fade-in" role="alert" {
            p { (message) }
        }
    }
}
