// src/config.rs

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::variant::FormVariant;
use crate::model::ArtifactPaths;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var}: '{value}' is not a socket address")]
    BadAddr { var: &'static str, value: String },

    #[error("{var}: '{value}' is not a form variant (expected one of: {expected})")]
    BadVariant {
        var: &'static str,
        value: String,
        expected: String,
    },

    #[error("{var}: '{value}' is not a positive worker count")]
    BadWorkers { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub model_path: PathBuf,
    pub preprocessor_path: PathBuf,
    pub variant: FormVariant,
    pub max_workers: usize,
    /// Fallback log filter when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Directory holding `htmx.js`.
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            model_path: PathBuf::from("artifacts/model.json"),
            preprocessor_path: PathBuf::from("artifacts/preprocessor.json"),
            variant: FormVariant::Standard,
            max_workers: 8,
            log_filter: "info".to_string(),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(value) = lookup("PRICER_ADDR") {
            cfg.addr = value.parse().map_err(|_| ConfigError::BadAddr {
                var: "PRICER_ADDR",
                value,
            })?;
        }
        if let Some(value) = lookup("PRICER_MODEL_PATH") {
            cfg.model_path = PathBuf::from(value);
        }
        if let Some(value) = lookup("PRICER_PREPROCESSOR_PATH") {
            cfg.preprocessor_path = PathBuf::from(value);
        }
        if let Some(value) = lookup("PRICER_FORM_VARIANT") {
            cfg.variant =
                FormVariant::from_slug(value.trim()).ok_or_else(|| ConfigError::BadVariant {
                    var: "PRICER_FORM_VARIANT",
                    expected: FormVariant::ALL.map(|v| v.slug()).join(", "),
                    value,
                })?;
        }
        if let Some(value) = lookup("PRICER_MAX_WORKERS") {
            cfg.max_workers = value
                .trim()
                .parse()
                .ok()
                .filter(|n: &usize| *n > 0)
                .ok_or(ConfigError::BadWorkers {
                    var: "PRICER_MAX_WORKERS",
                    value,
                })?;
        }
        if let Some(value) = lookup("PRICER_LOG") {
            cfg.log_filter = value;
        }
        if let Some(value) = lookup("PRICER_STATIC_DIR") {
            cfg.static_dir = PathBuf::from(value);
        }

        Ok(cfg)
    }

    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            model: self.model_path.clone(),
            preprocessor: self.preprocessor_path.clone(),
        }
    }
}
