use super::predictor::PricePredictor;
use crate::domain::errors::{ModelLoadError, PredictionError};
use crate::domain::pricing::FeatureVector;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::error::Failed;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;
use smartcore::linear::ridge_regression::RidgeRegression;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

type Matrix = DenseMatrix<f64>;

/// Regression algorithms understood by the JSON artifact loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    LinearRegression,
    RidgeRegression,
    RandomForest,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::LinearRegression => "linear_regression",
            Algorithm::RidgeRegression => "ridge_regression",
            Algorithm::RandomForest => "random_forest",
        }
    }
}

/// On-disk envelope written by the training pipeline.
///
/// `model` holds the serde_json form of the smartcore estimator named by
/// `algorithm`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub algorithm: Algorithm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub model: serde_json::Value,
}

impl ModelArtifact {
    pub fn wrap<M: Serialize>(
        algorithm: Algorithm,
        version: Option<String>,
        model: &M,
    ) -> serde_json::Result<Self> {
        Ok(Self {
            algorithm,
            version,
            model: serde_json::to_value(model)?,
        })
    }
}

enum RegressionModel {
    Linear(LinearRegression<f64, f64, Matrix, Vec<f64>>),
    Ridge(RidgeRegression<f64, f64, Matrix, Vec<f64>>),
    Forest(RandomForestRegressor<f64, f64, Matrix, Vec<f64>>),
}

impl RegressionModel {
    fn predict(&self, x: &Matrix) -> Result<Vec<f64>, Failed> {
        match self {
            RegressionModel::Linear(model) => model.predict(x),
            RegressionModel::Ridge(model) => model.predict(x),
            RegressionModel::Forest(model) => model.predict(x),
        }
    }
}

pub struct SmartCorePredictor {
    model: RegressionModel,
    algorithm: Algorithm,
    version: String,
    model_path: PathBuf,
}

impl SmartCorePredictor {
    /// Reads and deserializes a JSON artifact.
    pub fn load(model_path: impl Into<PathBuf>) -> Result<Self, ModelLoadError> {
        let model_path = model_path.into();
        if !model_path.exists() {
            return Err(ModelLoadError::NotFound { path: model_path });
        }

        let buffer = std::fs::read(&model_path).map_err(|source| ModelLoadError::Unreadable {
            path: model_path.clone(),
            source,
        })?;

        let artifact: ModelArtifact =
            serde_json::from_slice(&buffer).map_err(|e| ModelLoadError::Corrupt {
                path: model_path.clone(),
                reason: e.to_string(),
            })?;

        let predictor = Self::from_artifact(artifact, model_path)?;
        info!(
            "Successfully loaded {} model from {:?}",
            predictor.algorithm.as_str(),
            predictor.model_path
        );
        Ok(predictor)
    }

    pub fn from_artifact(
        artifact: ModelArtifact,
        model_path: PathBuf,
    ) -> Result<Self, ModelLoadError> {
        let corrupt = |e: serde_json::Error| ModelLoadError::Corrupt {
            path: model_path.clone(),
            reason: format!("invalid {} payload: {}", artifact.algorithm.as_str(), e),
        };

        let model = match artifact.algorithm {
            Algorithm::LinearRegression => {
                RegressionModel::Linear(serde_json::from_value(artifact.model).map_err(corrupt)?)
            }
            Algorithm::RidgeRegression => {
                RegressionModel::Ridge(serde_json::from_value(artifact.model).map_err(corrupt)?)
            }
            Algorithm::RandomForest => {
                RegressionModel::Forest(serde_json::from_value(artifact.model).map_err(corrupt)?)
            }
        };

        Ok(Self {
            model,
            algorithm: artifact.algorithm,
            version: artifact.version.unwrap_or_else(|| "unversioned".to_string()),
            model_path,
        })
    }

    fn features_to_vec(&self, fv: &FeatureVector) -> Vec<f64> {
        crate::domain::ml::feature_registry::features_to_f64_vector(fv)
    }
}

impl PricePredictor for SmartCorePredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let input_vec = self.features_to_vec(features);
        let input_matrix =
            DenseMatrix::from_2d_vec(&vec![input_vec]).map_err(|e| PredictionError::Inference {
                reason: format!("Matrix creation failed: {}", e),
            })?;

        let predictions =
            self.model
                .predict(&input_matrix)
                .map_err(|e| PredictionError::Inference {
                    reason: e.to_string(),
                })?;

        let prediction = predictions
            .first()
            .copied()
            .ok_or_else(|| PredictionError::Inference {
                reason: "No prediction returned".to_string(),
            })?;
        debug!(prediction, "smartcore inference complete");
        Ok(prediction)
    }

    fn name(&self) -> &str {
        "SmartCore Regressor"
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn algorithm(&self) -> &str {
        self.algorithm.as_str()
    }

    fn source(&self) -> &Path {
        &self.model_path
    }
}
