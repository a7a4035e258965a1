use crate::domain::errors::PredictionError;
use crate::domain::ml::FEATURE_NAMES;
use crate::domain::pricing::FeatureVector;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// Interface for price regression models
pub trait PricePredictor: Send + Sync {
    /// Predict the raw (unrounded) price for one feature vector
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;

    /// Short identifier of the regression algorithm
    fn algorithm(&self) -> &str;

    /// Artifact the model was loaded from
    fn source(&self) -> &Path;
}

/// Serializable description of the loaded model.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub name: String,
    pub version: String,
    pub algorithm: String,
    pub features: Vec<String>,
    pub path: String,
    pub loaded_at: DateTime<Utc>,
}

impl ModelInfo {
    pub fn describe(predictor: &dyn PricePredictor) -> Self {
        Self {
            name: predictor.name().to_string(),
            version: predictor.version().to_string(),
            algorithm: predictor.algorithm().to_string(),
            features: FEATURE_NAMES.iter().map(|f| f.to_string()).collect(),
            path: predictor.source().display().to_string(),
            loaded_at: Utc::now(),
        }
    }
}
