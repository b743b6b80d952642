// errors.rs
use thiserror::Error;

use crate::forms::FieldError;
use crate::model::{ArtifactError, PredictError};

/// Errors surfaced by a request handler, from routing or the layers below.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Invalid input: {0}")]
    Field(#[from] FieldError),

    #[error("Prediction failed: {0}")]
    Prediction(#[from] PredictError),

    #[error("Model unavailable: {0}")]
    Artifacts(#[from] ArtifactError),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::MethodNotAllowed => 405,
            ServerError::BadRequest(_) | ServerError::Field(_) => 400,
            ServerError::Prediction(PredictError::TransformFailure { .. }) => 422,
            ServerError::Prediction(_) => 500,
            ServerError::Artifacts(_) => 503,
            ServerError::InternalError => 500,
        }
    }
}
