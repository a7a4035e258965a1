use super::predictor::PricePredictor;
use crate::domain::errors::{ModelLoadError, PredictionError};
use crate::domain::pricing::FeatureVector;
use ort::session::Session;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

/// Regressor exported to ONNX (e.g. via skl2onnx) and run through ONNX Runtime.
///
/// Expects a single `[1, 2]` float input and reads the first element of the
/// first output.
pub struct OnnxPredictor {
    // Session::run needs &mut; the graph itself is never modified
    session: Mutex<Session>,
    model_path: PathBuf,
}

impl OnnxPredictor {
    pub fn load(model_path: impl Into<PathBuf>) -> Result<Self, ModelLoadError> {
        let model_path = model_path.into();
        if !model_path.exists() {
            return Err(ModelLoadError::NotFound { path: model_path });
        }

        let builder = Session::builder().map_err(|e| ModelLoadError::Runtime {
            reason: format!("Failed to create ONNX session builder: {}", e),
        })?;
        let session =
            builder
                .commit_from_file(&model_path)
                .map_err(|e| ModelLoadError::Corrupt {
                    path: model_path.clone(),
                    reason: e.to_string(),
                })?;

        info!("Successfully loaded ONNX model from {:?}", model_path);
        Ok(Self {
            session: Mutex::new(session),
            model_path,
        })
    }

    fn features_to_inputs(&self, fv: &FeatureVector) -> Vec<f32> {
        crate::domain::ml::feature_registry::features_to_vector(fv)
    }
}

fn inference_error(reason: impl ToString) -> PredictionError {
    PredictionError::Inference {
        reason: reason.to_string(),
    }
}

impl PricePredictor for OnnxPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let input = self.features_to_inputs(features);
        let shape = vec![1, input.len()];

        let input_value = ort::value::Value::from_array((shape.as_slice(), input))
            .map_err(|e| inference_error(format!("Input value creation failed: {}", e)))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| inference_error(format!("Session lock failed: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_value])
            .map_err(inference_error)?;
        let output_value = outputs
            .iter()
            .next()
            .map(|(_, v)| v)
            .ok_or_else(|| inference_error("No output found"))?;
        let data = output_value
            .try_extract_tensor::<f32>()
            .map_err(inference_error)?;
        let price = data
            .1
            .iter()
            .next()
            .ok_or_else(|| inference_error("Empty output"))?;

        Ok(*price as f64)
    }

    fn name(&self) -> &str {
        "ONNX Runtime Regressor"
    }

    fn version(&self) -> &str {
        "onnx"
    }

    fn algorithm(&self) -> &str {
        "onnx"
    }

    fn source(&self) -> &Path {
        &self.model_path
    }
}
