use crate::domain::variant::FormVariant;
use crate::model::{ArtifactPaths, ArtifactStore, Artifacts, ColumnPipeline, Regressor};
use crate::router::AppState;
use astra::Body;
use http::{Method, Request};
use std::path::{Path, PathBuf};

/// Small in-memory artifacts with hand-checkable prices.
///
/// price = 10*accommodates + 20*bedrooms + 15*bathrooms
///       + 30 (entire home) | 10 (private room) | 0 (shared room)
///       + 25*superhost + 5*wifi + 40
pub fn fixture_artifacts() -> Artifacts {
    let pre: ColumnPipeline = serde_json::from_str(
        r#"{
            "feature_names_in": [
                "accommodates", "bedrooms", "bathrooms", "room_type",
                "host_is_superhost", "amen_wifi", "log_price"
            ],
            "transformers": [
                {"kind": "passthrough", "columns": ["accommodates", "bedrooms", "bathrooms"]},
                {"kind": "one_hot", "columns": ["room_type"],
                 "categories": [["Entire home/apt", "Private room", "Shared room"]]},
                {"kind": "passthrough", "columns": ["host_is_superhost", "amen_wifi"]}
            ]
        }"#,
    )
    .expect("fixture preprocessor should parse");

    let model: Regressor = serde_json::from_str(
        r#"{"kind": "linear",
            "coef": [10.0, 20.0, 15.0, 30.0, 10.0, 0.0, 25.0, 5.0],
            "intercept": 40.0}"#,
    )
    .expect("fixture model should parse");

    Artifacts::from_parts(Box::new(model), Box::new(pre))
}

pub fn test_state() -> AppState {
    test_state_with(FormVariant::Standard)
}

pub fn test_state_with(variant: FormVariant) -> AppState {
    AppState {
        store: ArtifactStore::preloaded(fixture_artifacts()),
        variant,
        static_dir: PathBuf::from("static"),
    }
}

/// State backed by the artifacts shipped in `artifacts/`, loaded lazily.
pub fn shipped_state(variant: FormVariant) -> AppState {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("artifacts");
    AppState {
        store: ArtifactStore::new(ArtifactPaths {
            model: root.join("model.json"),
            preprocessor: root.join("preprocessor.json"),
        }),
        variant,
        static_dir: PathBuf::from("static"),
    }
}

/// A complete, valid submission of the standard form.
pub fn standard_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("variant", "standard"),
        ("city", "Los Angeles"),
        ("neighbourhood", "Venice"),
        ("room_type", "Entire home/apt"),
        ("property_type", "Apartment"),
        ("accommodates", "2"),
        ("bedrooms", "1"),
        ("bathrooms", "1.0"),
        ("number_of_reviews", "10"),
        ("review_scores_rating", "90"),
        ("host_is_superhost", "No"),
        ("availability_365", "120"),
        ("amen_wifi", "on"),
    ]
}

pub fn encode_form(pairs: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

pub fn post_form(pairs: &[(&str, &str)], htmx: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .header("Content-Type", "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder
        .body(Body::from(encode_form(pairs)))
        .expect("request should build")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}
