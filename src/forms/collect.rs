// src/forms/collect.rs

use std::collections::HashMap;
use thiserror::Error;

use crate::domain::listing::{ListingInput, PropertyType, RoomType, Superhost};
use crate::domain::variant::{Domain, Field, FieldSpec, FormVariant};

/// Longest free-text value accepted.
pub const MAX_TEXT_LEN: usize = 100;

/// Submitted form fields, name -> raw value. A repeated name keeps the last.
pub type FormValues = HashMap<String, String>;

#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("{label} is required")]
    Missing { label: &'static str },

    #[error("{label} must be at most {max} characters")]
    TooLong { label: &'static str, max: usize },

    #[error("{label} must be a number, got '{value}'")]
    NotANumber { label: &'static str, value: String },

    #[error("{label} must be between {min} and {max}, got {value}")]
    OutOfRange {
        label: &'static str,
        min: String,
        max: String,
        value: String,
    },

    #[error("{label} must be a multiple of {step}, got {value}")]
    OffStep {
        label: &'static str,
        step: f64,
        value: f64,
    },

    #[error("'{value}' is not a valid choice for {label}")]
    InvalidChoice { label: &'static str, value: String },
}

/// Decodes an `application/x-www-form-urlencoded` body.
pub fn parse_form(body: &[u8]) -> FormValues {
    url::form_urlencoded::parse(body).into_owned().collect()
}

enum Collected {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Flag(bool),
}

/// Validates every field `variant` shows and builds the listing from them.
/// Fields the variant does not show are left unset.
pub fn collect_listing(variant: FormVariant, form: &FormValues) -> Result<ListingInput, FieldError> {
    let mut input = ListingInput::default();
    for spec in variant.fields() {
        let value = collect_field(spec, form.get(spec.field.name()).map(String::as_str))?;
        apply(&mut input, spec, value)?;
    }
    Ok(input)
}

fn collect_field(spec: &FieldSpec, raw: Option<&str>) -> Result<Collected, FieldError> {
    let label = spec.label;
    let raw = raw.map(str::trim);

    match spec.domain {
        Domain::Flag => Ok(Collected::Flag(matches!(
            raw,
            Some(v) if !matches!(v, "" | "0" | "false" | "off")
        ))),
        Domain::Text { .. } => {
            let v = raw
                .filter(|v| !v.is_empty())
                .ok_or(FieldError::Missing { label })?;
            if v.chars().count() > MAX_TEXT_LEN {
                return Err(FieldError::TooLong {
                    label,
                    max: MAX_TEXT_LEN,
                });
            }
            Ok(Collected::Text(v.to_string()))
        }
        Domain::Choice { options, .. } => {
            let v = raw
                .filter(|v| !v.is_empty())
                .ok_or(FieldError::Missing { label })?;
            if !options.iter().any(|o| *o == v) {
                return Err(FieldError::InvalidChoice {
                    label,
                    value: v.to_string(),
                });
            }
            Ok(Collected::Text(v.to_string()))
        }
        Domain::Integer { min, max, .. } => {
            let v = raw
                .filter(|v| !v.is_empty())
                .ok_or(FieldError::Missing { label })?;
            let n: i64 = v.parse().map_err(|_| FieldError::NotANumber {
                label,
                value: v.to_string(),
            })?;
            if n < min || n > max {
                return Err(FieldError::OutOfRange {
                    label,
                    min: min.to_string(),
                    max: max.to_string(),
                    value: n.to_string(),
                });
            }
            Ok(Collected::Integer(n))
        }
        Domain::Decimal { min, max, step, .. } => {
            let v = raw
                .filter(|v| !v.is_empty())
                .ok_or(FieldError::Missing { label })?;
            let x: f64 = v
                .parse()
                .ok()
                .filter(|x: &f64| x.is_finite())
                .ok_or_else(|| FieldError::NotANumber {
                    label,
                    value: v.to_string(),
                })?;
            if x < min || x > max {
                return Err(FieldError::OutOfRange {
                    label,
                    min: min.to_string(),
                    max: max.to_string(),
                    value: x.to_string(),
                });
            }
            let steps = (x - min) / step;
            if (steps - steps.round()).abs() > 1e-9 {
                return Err(FieldError::OffStep {
                    label,
                    step,
                    value: x,
                });
            }
            Ok(Collected::Decimal(x))
        }
    }
}

fn apply(input: &mut ListingInput, spec: &FieldSpec, value: Collected) -> Result<(), FieldError> {
    let invalid = |value: &str| FieldError::InvalidChoice {
        label: spec.label,
        value: value.to_string(),
    };

    match (spec.field, value) {
        (Field::City, Collected::Text(v)) => input.city = Some(v),
        (Field::Neighbourhood, Collected::Text(v)) => input.neighbourhood = Some(v),
        (Field::RoomType, Collected::Text(v)) => {
            input.room_type = Some(RoomType::from_label(&v).ok_or_else(|| invalid(&v))?)
        }
        (Field::PropertyType, Collected::Text(v)) => {
            input.property_type = Some(PropertyType::from_label(&v).ok_or_else(|| invalid(&v))?)
        }
        (Field::HostIsSuperhost, Collected::Text(v)) => {
            input.host_is_superhost = Some(Superhost::from_label(&v).ok_or_else(|| invalid(&v))?)
        }
        (Field::Accommodates, Collected::Integer(n)) => input.accommodates = Some(n),
        (Field::Bedrooms, Collected::Integer(n)) => input.bedrooms = Some(n),
        (Field::MinimumNights, Collected::Integer(n)) => input.minimum_nights = Some(n),
        (Field::NumberOfReviews, Collected::Integer(n)) => input.number_of_reviews = Some(n),
        (Field::ReviewScoresRating, Collected::Integer(n)) => input.review_scores_rating = Some(n),
        (Field::Availability365, Collected::Integer(n)) => input.availability_365 = Some(n),
        (Field::Bathrooms, Collected::Decimal(x)) => input.bathrooms = Some(x),
        (Field::Amenity(a), Collected::Flag(on)) => {
            input.amenities.insert(a, on);
        }
        // Field table and domain disagree; treat as an unusable value.
        (_, Collected::Text(v)) => return Err(invalid(&v)),
        (_, Collected::Integer(n)) => return Err(invalid(&n.to_string())),
        (_, Collected::Decimal(x)) => return Err(invalid(&x.to_string())),
        (_, Collected::Flag(on)) => return Err(invalid(&on.to_string())),
    }
    Ok(())
}
