// Metrics and latency tracking
pub mod observability;
