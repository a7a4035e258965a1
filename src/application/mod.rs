// Model backends and artifact loading
pub mod ml;

// Request validation and inference
pub mod pricing;
