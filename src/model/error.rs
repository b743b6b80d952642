use std::path::PathBuf;
use thiserror::Error;

/// Failures of a single prediction request.
#[derive(Debug, Error)]
pub enum PredictError {
    /// The preprocessor does not declare its input columns.
    #[error("preprocessor does not declare its expected input columns")]
    SchemaUnavailable,

    /// The declared column list cannot be used to order a row.
    #[error("invalid preprocessor schema: {0}")]
    InvalidSchema(String),

    /// A row value the preprocessor cannot encode.
    #[error("cannot encode column '{column}': {message}")]
    TransformFailure { column: String, message: String },

    /// The model rejected its input or produced nothing usable.
    #[error("model prediction failed: {0}")]
    PredictFailure(String),
}

impl PredictError {
    pub(crate) fn transform(column: &str, message: impl Into<String>) -> Self {
        PredictError::TransformFailure {
            column: column.to_string(),
            message: message.into(),
        }
    }
}

/// Failures loading the model or preprocessor from disk.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact {path} is inconsistent: {message}")]
    Invalid { path: PathBuf, message: String },
}
