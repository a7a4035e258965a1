use super::predictor::PricePredictor;
use super::smartcore_predictor::SmartCorePredictor;
use crate::domain::errors::ModelLoadError;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

/// Loads the model artifact at `path`, choosing the backend by file extension.
///
/// `.json` artifacts go through smartcore; `.onnx` through ONNX Runtime when
/// the `onnx` feature is enabled.
pub fn load_predictor(path: &Path) -> Result<Arc<dyn PricePredictor>, ModelLoadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    info!("Loading model artifact from {:?}", path);

    let result: Result<Arc<dyn PricePredictor>, ModelLoadError> = match extension.as_str() {
        "json" => SmartCorePredictor::load(path).map(|p| Arc::new(p) as Arc<dyn PricePredictor>),
        #[cfg(feature = "onnx")]
        "onnx" => super::onnx_predictor::OnnxPredictor::load(path)
            .map(|p| Arc::new(p) as Arc<dyn PricePredictor>),
        _ => Err(ModelLoadError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        }),
    };

    if let Err(e) = &result {
        error!("Failed to load model: {}", e);
    }
    result
}
