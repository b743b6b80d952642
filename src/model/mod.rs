// src/model/mod.rs
//
// The two trained artifacts and what the app is allowed to ask of them.

pub mod error;
pub mod invoker;
pub mod loader;
pub mod pipeline;
pub mod regressor;

pub use error::{ArtifactError, PredictError};
pub use invoker::predict_listing;
pub use loader::{ArtifactPaths, ArtifactStore, Artifacts};
pub use pipeline::ColumnPipeline;
pub use regressor::Regressor;

use crate::domain::feature_row::{FeatureRow, ModelSchema};

/// Encodes a raw listing row into the numeric vector the model was trained on.
pub trait Preprocessor: Send + Sync {
    /// The columns `transform` expects, in order. `None` when the artifact
    /// does not declare them.
    fn expected_columns(&self) -> Option<&[String]>;

    fn transform(&self, row: &FeatureRow) -> Result<Vec<f64>, PredictError>;

    /// Validated schema, read fresh on every call.
    fn schema(&self) -> Result<ModelSchema, PredictError> {
        let columns = self
            .expected_columns()
            .ok_or(PredictError::SchemaUnavailable)?;
        ModelSchema::new(columns.to_vec())
    }
}

/// Maps encoded rows to predicted values, one per row.
pub trait Model: Send + Sync {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictError>;
}
