// src/tests/router_tests/health_tests.rs

use crate::router::handle;
use crate::tests::utils::{get, test_state};
use std::io::Read;

#[test]
fn health_reports_the_loaded_artifacts() {
    let state = test_state();

    let resp = handle(get("/health"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["status"], "ok");
    assert_eq!(json["variant"], "standard");
    assert_eq!(json["model_sha256"], "in-memory");
    let columns = json["expected_columns"].as_array().unwrap();
    assert_eq!(columns.len(), 7);
    assert!(columns.iter().any(|c| c == "log_price"));
}
