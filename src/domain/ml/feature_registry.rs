use crate::domain::pricing::FeatureVector;

/// Ordered list of feature names.
/// This order MUST match the column order the model was trained with.
/// Any change here is a breaking change for model artifacts.
pub const FEATURE_NAMES: &[&str] = &["tahun", "km"];

/// Converts features into the f64 row consumed by smartcore models.
pub fn features_to_f64_vector(fv: &FeatureVector) -> Vec<f64> {
    vec![fv.year, fv.odometer]
}

/// Converts features into the f32 row consumed by ONNX graphs.
///
/// f32 holds integers exactly only up to 2^24, so very large odometer
/// readings lose precision here (123456789 becomes 123456792).
pub fn features_to_vector(fv: &FeatureVector) -> Vec<f32> {
    vec![fv.year as f32, fv.odometer as f32]
}
