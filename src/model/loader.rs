// src/model/loader.rs

use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::info;

use crate::model::{ArtifactError, ColumnPipeline, Model, Preprocessor, Regressor};

#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub preprocessor: PathBuf,
}

/// Where the artifacts came from and when they were read.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactInfo {
    pub model_sha256: String,
    pub preprocessor_sha256: String,
    pub loaded_at: String,
}

/// The loaded model and preprocessor. Never mutated after construction.
pub struct Artifacts {
    pub model: Box<dyn Model>,
    pub preprocessor: Box<dyn Preprocessor>,
    pub info: ArtifactInfo,
}

impl Artifacts {
    /// Reads, parses and validates both artifact files.
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let (preprocessor, preprocessor_sha256) =
            read_json::<ColumnPipeline>(&paths.preprocessor)?;
        preprocessor
            .validate()
            .map_err(|message| invalid(&paths.preprocessor, message))?;

        let (model, model_sha256) = read_json::<Regressor>(&paths.model)?;
        model
            .validate()
            .map_err(|message| invalid(&paths.model, message))?;

        if preprocessor.output_width() != model.n_features() {
            return Err(invalid(
                &paths.model,
                format!(
                    "model expects {} features but the preprocessor produces {}",
                    model.n_features(),
                    preprocessor.output_width()
                ),
            ));
        }

        let info = ArtifactInfo {
            model_sha256,
            preprocessor_sha256,
            loaded_at: now_rfc3339(),
        };

        info!(
            model = %paths.model.display(),
            model_sha256 = %info.model_sha256,
            preprocessor = %paths.preprocessor.display(),
            preprocessor_sha256 = %info.preprocessor_sha256,
            "artifacts loaded"
        );

        Ok(Self {
            model: Box::new(model),
            preprocessor: Box::new(preprocessor),
            info,
        })
    }

    /// Wraps already-built artifacts, e.g. fixtures.
    #[cfg(test)]
    pub fn from_parts(model: Box<dyn Model>, preprocessor: Box<dyn Preprocessor>) -> Self {
        Self {
            model,
            preprocessor,
            info: ArtifactInfo {
                model_sha256: "in-memory".into(),
                preprocessor_sha256: "in-memory".into(),
                loaded_at: now_rfc3339(),
            },
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<(T, String), ArtifactError> {
    let bytes = fs::read(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((value, fingerprint(&bytes)))
}

fn invalid(path: &Path, message: String) -> ArtifactError {
    ArtifactError::Invalid {
        path: path.to_path_buf(),
        message,
    }
}

/// SHA-256 of the file, URL-safe base64 without padding.
pub fn fingerprint(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest)
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Process-wide holder for the artifacts: loaded at most once, then shared.
pub struct ArtifactStore {
    paths: Option<ArtifactPaths>,
    loaded: OnceLock<Arc<Artifacts>>,
    load_guard: Mutex<()>,
}

impl ArtifactStore {
    pub fn new(paths: ArtifactPaths) -> Self {
        Self {
            paths: Some(paths),
            loaded: OnceLock::new(),
            load_guard: Mutex::new(()),
        }
    }

    /// A store that already holds its artifacts and never touches disk.
    #[cfg(test)]
    pub fn preloaded(artifacts: Artifacts) -> Self {
        let loaded = OnceLock::new();
        let _ = loaded.set(Arc::new(artifacts));
        Self {
            paths: None,
            loaded,
            load_guard: Mutex::new(()),
        }
    }

    /// Returns the shared artifacts, loading them on first use. Concurrent
    /// first callers wait on one load instead of racing.
    pub fn get(&self) -> Result<Arc<Artifacts>, ArtifactError> {
        if let Some(artifacts) = self.loaded.get() {
            return Ok(Arc::clone(artifacts));
        }

        let _guard = self
            .load_guard
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(artifacts) = self.loaded.get() {
            return Ok(Arc::clone(artifacts));
        }

        let Some(paths) = &self.paths else {
            return Err(ArtifactError::Invalid {
                path: PathBuf::new(),
                message: "store has neither artifacts nor paths".into(),
            });
        };

        let artifacts = Arc::new(Artifacts::load(paths)?);
        let _ = self.loaded.set(Arc::clone(&artifacts));
        Ok(artifacts)
    }
}
