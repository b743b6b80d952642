// src/forms/mod.rs

pub mod collect;

pub use collect::{collect_listing, parse_form, FieldError, FormValues};
