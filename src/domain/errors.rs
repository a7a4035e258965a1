use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the model artifact at startup.
///
/// All of these are fatal: the service never accepts traffic without a model.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Model file not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read model file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt model artifact {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("Unsupported model format '{extension}' for {}", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Model runtime initialisation failed: {reason}")]
    Runtime { reason: String },
}

/// Errors raised while serving a single prediction.
///
/// Every variant except [`PredictionError::Inference`] is a problem with the
/// caller's input.
#[derive(Debug, Error, PartialEq)]
pub enum PredictionError {
    #[error("Malformed JSON body: {reason}")]
    MalformedBody { reason: String },

    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Missing field '{field}'")]
    MissingField { field: &'static str },

    #[error("Field '{field}' could not be converted to a number: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Field '{field}' must be a finite number")]
    NonFinite { field: &'static str },

    #[error("Request body exceeds the {limit} byte limit")]
    BodyTooLarge { limit: usize },

    #[error("Prediction failed: {reason}")]
    Inference { reason: String },
}

impl PredictionError {
    /// True when the caller sent something unusable, false when the model failed.
    pub fn is_validation(&self) -> bool {
        !matches!(self, PredictionError::Inference { .. })
    }
}
