use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the boundary between the calling layer and the core
///
/// The ranking, eligibility and forecasting functions themselves never fail;
/// these cover loading settings and turning raw input into typed records.
#[derive(Debug, Error)]
pub enum BloodMatchError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unknown blood type: {0:?}")]
    InvalidBloodType(String),
}

pub type Result<T> = std::result::Result<T, BloodMatchError>;
