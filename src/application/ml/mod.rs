pub mod loader;
#[cfg(feature = "onnx")]
pub mod onnx_predictor;
pub mod predictor;
pub mod smartcore_predictor;

pub use loader::load_predictor;
pub use predictor::{ModelInfo, PricePredictor};
pub use smartcore_predictor::{Algorithm, ModelArtifact, SmartCorePredictor};
