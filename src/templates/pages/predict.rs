// templates/pages/predict.rs

use crate::domain::variant::{Field, FormVariant};
use crate::forms::FormValues;
use crate::templates::{button, card, desktop_layout, field_widget};
use maud::{html, Markup};

/// The whole page: variant switcher, the listing form, and the result slot.
/// `submitted` refills the form after a non-htmx post; `outcome` is the
/// result or error fragment to show below it.
pub fn predict_page(
    variant: FormVariant,
    submitted: Option<&FormValues>,
    outcome: Option<Markup>,
) -> Markup {
    let (amenities, details): (Vec<_>, Vec<_>) = variant
        .fields()
        .iter()
        .partition(|spec| matches!(spec.field, Field::Amenity(_)));

    desktop_layout(
        "Predict",
        html! {
            main class="container" {
                h1 { "🏠 Airbnb Price Predictor" }
                p class="lead" { "Fill in listing details and click " strong { "Predict" } "." }

                nav class="variants" {
                    @for v in FormVariant::ALL {
                        @if v == variant {
                            span class="active" { (v.title()) }
                        } @else {
                            a href=(format!("/?variant={}", v.slug())) { (v.title()) }
                        }
                    }
                }

                form
                    method="post"
                    action="/predict"
                    hx-post="/predict"
                    hx-target="#prediction"
                    hx-swap="innerHTML"
                    hx-disabled-elt="button"
                    class="listing-form"
                {
                    input type="hidden" name="variant" value=(variant.slug());

                    (card(variant.title(), html! {
                        div class="grid" {
                            @for spec in &details {
                                (field_widget(spec, submitted))
                            }
                        }
                    }))

                    @if !amenities.is_empty() {
                        (card("🧩 Amenities", html! {
                            div class="amenities" {
                                @for spec in &amenities {
                                    (field_widget(spec, submitted))
                                }
                            }
                        }))
                    }

                    (button("🔮 Predict Price"))
                }

                div id="prediction" aria-live="polite" {
                    @if let Some(fragment) = outcome {
                        (fragment)
                    }
                }
            }
        },
    )
}
