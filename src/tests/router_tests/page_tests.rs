// src/tests/router_tests/page_tests.rs

use crate::domain::variant::FormVariant;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, test_state, test_state_with};
use astra::Body;
use http::{Method, Request};
use std::io::Read;

fn body_of(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

#[test]
fn form_page_loads_successfully() {
    let state = test_state();

    let resp = handle(get("/"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_of(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Predict Price"));
    assert!(body.contains(r#"name="neighbourhood""#));
    assert!(body.contains(r#"name="amen_washer""#));
    assert!(body.contains(r#"hx-post="/predict""#));
}

#[test]
fn variant_query_switches_the_field_set() {
    let state = test_state();

    let resp = handle(get("/?variant=city-picker"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_of(resp);
    assert!(body.contains(r#"<select name="city">"#));
    assert!(body.contains("San Francisco"));
    assert!(!body.contains(r#"name="neighbourhood""#));
    assert!(body.contains(r#"value="city-picker""#));
}

#[test]
fn configured_variant_is_the_default() {
    let state = test_state_with(FormVariant::StayRules);

    let body = body_of(handle(get("/"), &state).unwrap());
    assert!(body.contains(r#"name="minimum_nights""#));
    assert!(!body.contains(r#"name="property_type""#));
}

#[test]
fn unknown_variant_is_a_bad_request() {
    let state = test_state();

    let err = handle(get("/?variant=kiosk"), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(err.status(), 400);
}

#[test]
fn stylesheet_is_served_as_css() {
    let state = test_state();

    let resp = handle(get("/static/main.css"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/css; charset=utf-8"
    );
}

#[test]
fn unknown_path_is_not_found() {
    let state = test_state();

    let err = handle(get("/admin"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn wrong_method_on_known_path_is_rejected() {
    let state = test_state();

    let req = Request::builder()
        .method(Method::DELETE)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let err = handle(req, &state).unwrap_err();
    assert!(matches!(err, ServerError::MethodNotAllowed));

    let err = handle(get("/predict"), &state).unwrap_err();
    assert_eq!(err.status(), 405);
}

#[test]
fn layout_loads_htmx_from_the_app_itself() {
    let state = test_state();

    let body = body_of(handle(get("/"), &state).unwrap());
    assert!(body.contains(r#"src="/static/htmx.js""#));
    assert!(!body.contains("unpkg.com"));
}

#[test]
fn htmx_script_is_served_from_the_static_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("htmx.js"), "var htmx = {};").unwrap();
    let mut state = test_state();
    state.static_dir = dir.path().to_path_buf();

    let resp = handle(get("/static/htmx.js"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/javascript; charset=utf-8"
    );
    assert_eq!(body_of(resp), "var htmx = {};");
}

#[test]
fn missing_htmx_script_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = test_state();
    state.static_dir = dir.path().to_path_buf();

    let err = handle(get("/static/htmx.js"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
