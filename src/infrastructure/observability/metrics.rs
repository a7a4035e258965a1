//! Prometheus metrics definitions for the price service
//!
//! All metrics use the `carprice_` prefix.

use prometheus::{
    CounterVec, Gauge, Histogram, HistogramOpts, Opts, Registry, TextEncoder,
    core::{AtomicF64, GenericGauge},
};
use std::sync::Arc;

/// Outcome label values for `carprice_predictions_total`
pub const OUTCOME_SUCCESS: &str = "success";
pub const OUTCOME_INVALID: &str = "invalid";
pub const OUTCOME_FAILED: &str = "failed";

/// Prometheus metrics for the prediction service
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Predictions served, by outcome
    pub predictions_total: CounterVec,
    /// Time spent in model inference
    pub prediction_latency_seconds: Histogram,
    /// Unix timestamp at which the model was loaded
    pub model_loaded_timestamp: GenericGauge<AtomicF64>,
}

impl Metrics {
    /// Create a new Metrics instance with all gauges and counters registered
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let predictions_total = CounterVec::new(
            Opts::new("carprice_predictions_total", "Total predictions by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(predictions_total.clone()))?;

        let prediction_latency_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "carprice_prediction_latency_seconds",
                "Model inference latency in seconds",
            )
            .buckets(vec![
                0.0001, 0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.5, 1.0,
            ]),
        )?;
        registry.register(Box::new(prediction_latency_seconds.clone()))?;

        let model_loaded_timestamp = Gauge::with_opts(Opts::new(
            "carprice_model_loaded_timestamp",
            "Unix timestamp of the model load",
        ))?;
        registry.register(Box::new(model_loaded_timestamp.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            predictions_total,
            prediction_latency_seconds,
            model_loaded_timestamp,
        })
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }

    /// Increment the prediction counter for `outcome`
    pub fn inc_predictions(&self, outcome: &str) {
        self.predictions_total.with_label_values(&[outcome]).inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.inc_predictions(OUTCOME_SUCCESS);
        metrics.inc_predictions(OUTCOME_INVALID);
        metrics.inc_predictions(OUTCOME_INVALID);
        metrics.model_loaded_timestamp.set(1_700_000_000.0);

        let output = metrics.render();
        assert!(output.contains("carprice_predictions_total{outcome=\"success\"} 1"));
        assert!(output.contains("carprice_predictions_total{outcome=\"invalid\"} 2"));
        assert!(output.contains("carprice_model_loaded_timestamp 1700000000"));
    }
}
