//! Observability for the prediction service
//!
//! Metrics live in a private prometheus registry and are exposed by the HTTP
//! layer on `/metrics` when enabled. Logging goes through `tracing`.

pub mod latency_tracker;
pub mod metrics;

pub use latency_tracker::LatencyGuard;
pub use metrics::Metrics;
