// src/tests/router_tests/predict_tests.rs

use crate::errors::ServerError;
use crate::forms::FieldError;
use crate::responses::error_to_response;
use crate::router::{handle, MAX_FORM_BYTES};
use crate::tests::utils::{post_form, standard_form, test_state};
use astra::Body;
use http::{Method, Request};
use std::io::Read;

fn body_of(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

fn with(field: &'static str, value: &'static str) -> Vec<(&'static str, &'static str)> {
    let mut form = standard_form();
    for pair in form.iter_mut() {
        if pair.0 == field {
            pair.1 = value;
        }
    }
    form
}

#[test]
fn htmx_predict_returns_a_partial_with_the_price() {
    let state = test_state();

    let resp = handle(post_form(&standard_form(), true), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_of(resp);
    // 10*2 + 20*1 + 15*1.0 + 30 (entire home) + 5 (wifi) + 40
    assert!(body.contains("Estimated Nightly Price"));
    assert!(body.contains("$130.00"));
    assert!(body.contains("statistical estimate"));

    // Only the fragment, so htmx can swap it into #prediction
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}

#[test]
fn plain_post_returns_the_whole_page_with_input_kept() {
    let state = test_state();

    let resp = handle(post_form(&standard_form(), false), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_of(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("$130.00"));
    assert!(body.contains(r#"value="Venice""#));
}

#[test]
fn changing_inputs_changes_the_price() {
    let state = test_state();

    let mut form = with("host_is_superhost", "Yes");
    form.retain(|(name, _)| *name != "amen_wifi");

    let body = body_of(handle(post_form(&form, true), &state).unwrap());
    // 130 - 5 (no wifi) + 25 (superhost)
    assert!(body.contains("$150.00"));
}

#[test]
fn out_of_range_field_is_rejected_with_400() {
    let state = test_state();

    let err = handle(post_form(&with("bedrooms", "11"), true), &state).unwrap_err();
    assert!(matches!(
        err,
        ServerError::Field(FieldError::OutOfRange { .. })
    ));
    assert_eq!(err.status(), 400);

    // The htmx caller gets a fragment explaining what went wrong
    let body = body_of(error_to_response(err, true));
    assert!(body.contains("between 0 and 10"));
    assert!(!body.contains("<html"));
}

#[test]
fn plain_post_with_bad_input_keeps_the_form() {
    let state = test_state();

    let resp = handle(post_form(&with("accommodates", "lots"), false), &state).unwrap();
    assert_eq!(resp.status(), 400);

    let body = body_of(resp);
    assert!(body.contains("must be a number"));
    assert!(body.contains(r#"value="lots""#));
    assert!(body.contains("Predict Price"));
}

#[test]
fn missing_field_is_reported() {
    let state = test_state();

    let mut form = standard_form();
    form.retain(|(name, _)| *name != "city");

    let err = handle(post_form(&form, true), &state).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid input: City is required"
    );
}

#[test]
fn bathrooms_must_sit_on_the_half_step() {
    let state = test_state();

    let err = handle(post_form(&with("bathrooms", "1.3"), true), &state).unwrap_err();
    assert!(matches!(err, ServerError::Field(FieldError::OffStep { .. })));

    let ok = handle(post_form(&with("bathrooms", "1.5"), true), &state).unwrap();
    // 130 + 15*0.5
    assert!(body_of(ok).contains("$137.50"));
}

#[test]
fn unknown_variant_in_form_is_a_bad_request() {
    let state = test_state();

    let err = handle(post_form(&with("variant", "kiosk"), true), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn non_form_body_is_rejected() {
    let state = test_state();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"city": "Los Angeles"}"#))
        .unwrap();
    let err = handle(req, &state).unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn oversized_body_is_rejected() {
    let state = test_state();

    let padding = "x".repeat(MAX_FORM_BYTES as usize + 1);
    let req = Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(format!("neighbourhood={padding}")))
        .unwrap();
    let err = handle(req, &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(msg) if msg.contains("too large")));
}

#[test]
fn shipped_artifacts_price_every_variant() {
    use crate::domain::variant::FormVariant;
    use crate::tests::utils::shipped_state;

    let stay_rules: Vec<(&str, &str)> = vec![
        ("variant", "stay-rules"),
        ("city", "Los Angeles"),
        ("room_type", "Private room"),
        ("accommodates", "2"),
        ("bedrooms", "1"),
        ("bathrooms", "1.0"),
        ("minimum_nights", "3"),
        ("host_is_superhost", "Yes"),
    ];
    let mut city_picker = standard_form();
    city_picker.retain(|(name, _)| *name != "neighbourhood");
    city_picker[0] = ("variant", "city-picker");
    city_picker[1] = ("city", "San Francisco");

    for (variant, form) in [
        (FormVariant::Standard, standard_form()),
        (FormVariant::CityPicker, city_picker),
        (FormVariant::StayRules, stay_rules),
    ] {
        let state = shipped_state(variant);
        let resp = handle(post_form(&form, true), &state)
            .unwrap_or_else(|e| panic!("{} failed: {e}", variant.slug()));
        assert_eq!(resp.status(), 200);

        let body = body_of(resp);
        assert!(body.contains("Estimated Nightly Price"));
        assert!(body.contains('$'));
    }
}
