use maud::{html, Markup};

use crate::domain::variant::{Domain, FieldSpec};
use crate::forms::FormValues;

pub mod error;

pub use error::error_page;

pub fn button(label: &str) -> Markup {
    html! {
        button type="submit" class="btn" {
            span class="btn-text" { (label) }
            span class="spinner" aria-hidden="true" {}
        }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// One labelled input for `spec`. A previously submitted value wins over
/// the field's default so a re-rendered form keeps what the user typed.
pub fn field_widget(spec: &FieldSpec, submitted: Option<&FormValues>) -> Markup {
    let name = spec.field.name();
    let prior = submitted.and_then(|form| form.get(name)).map(String::as_str);

    match spec.domain {
        Domain::Text { default } => html! {
            label class="field" {
                span { (spec.label) }
                input type="text" name=(name) value=(prior.unwrap_or(default)) maxlength="100" required;
            }
        },
        Domain::Choice { options, default } => {
            let selected = prior.unwrap_or(default);
            html! {
                label class="field" {
                    span { (spec.label) }
                    select name=(name) {
                        @for opt in options {
                            option value=(opt) selected[*opt == selected] { (opt) }
                        }
                    }
                }
            }
        }
        Domain::Integer { min, max, default } => html! {
            label class="field" {
                span { (spec.label) }
                input
                    type="number"
                    name=(name)
                    min=(min)
                    max=(max)
                    step="1"
                    value=(prior.map(str::to_string).unwrap_or_else(|| default.to_string()))
                    required;
            }
        },
        Domain::Decimal {
            min,
            max,
            step,
            default,
        } => html! {
            label class="field" {
                span { (spec.label) }
                input
                    type="number"
                    name=(name)
                    min=(min)
                    max=(max)
                    step=(step)
                    value=(prior.map(str::to_string).unwrap_or_else(|| format!("{default:.1}")))
                    required;
            }
        },
        Domain::Flag => {
            // Before any submission every box starts unchecked.
            let checked = prior.is_some_and(|v| !matches!(v, "" | "0" | "false" | "off"));
            html! {
                label class="checkbox" {
                    input type="checkbox" name=(name) checked[checked];
                    " " (spec.label)
                }
            }
        }
    }
}
