// Domain-specific error types
pub mod errors;

// Model feature layout
pub mod ml;

// Price estimation domain
pub mod pricing;
