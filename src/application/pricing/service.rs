use crate::application::ml::{ModelInfo, PricePredictor};
use crate::domain::errors::PredictionError;
use crate::domain::pricing::{FeatureVector, PriceQuote, parse_request};
use crate::infrastructure::observability::LatencyGuard;
use crate::infrastructure::observability::metrics::{
    Metrics, OUTCOME_FAILED, OUTCOME_INVALID, OUTCOME_SUCCESS,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Validation and inference for price requests.
///
/// Cloning is cheap: the predictor and model description are shared
/// read-only across every clone.
#[derive(Clone)]
pub struct PricingService {
    predictor: Arc<dyn PricePredictor>,
    info: Arc<ModelInfo>,
    metrics: Option<Metrics>,
}

impl PricingService {
    pub fn new(predictor: Arc<dyn PricePredictor>) -> Self {
        let info = Arc::new(ModelInfo::describe(predictor.as_ref()));
        Self {
            predictor,
            info,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        metrics
            .model_loaded_timestamp
            .set(self.info.loaded_at.timestamp() as f64);
        self.metrics = Some(metrics);
        self
    }

    pub fn model_info(&self) -> &ModelInfo {
        &self.info
    }

    pub fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref()
    }

    /// Parses a raw JSON body and prices it.
    pub fn predict(&self, body: &[u8]) -> Result<PriceQuote, PredictionError> {
        let result = parse_request(body).and_then(|features| self.run_inference(features));
        self.record(&result);
        result
    }

    /// Counts a request refused before its body reached the parser.
    pub fn reject(&self, error: PredictionError) -> Result<PriceQuote, PredictionError> {
        let result = Err(error);
        self.record(&result);
        result
    }

    /// Prices an already validated feature vector.
    pub fn quote(&self, features: FeatureVector) -> Result<PriceQuote, PredictionError> {
        let result = self.run_inference(features);
        self.record(&result);
        result
    }

    fn run_inference(&self, features: FeatureVector) -> Result<PriceQuote, PredictionError> {
        let timer = LatencyGuard::new(
            self.metrics
                .as_ref()
                .map(|m| &m.prediction_latency_seconds),
        );
        let raw = self.predictor.predict(&features)?;
        debug!(
            year = features.year,
            odometer = features.odometer,
            raw,
            elapsed_us = timer.elapsed().as_micros() as u64,
            "inference complete"
        );
        PriceQuote::from_prediction(features, raw)
    }

    fn record(&self, result: &Result<PriceQuote, PredictionError>) {
        let outcome = match result {
            Ok(_) => OUTCOME_SUCCESS,
            Err(e) if e.is_validation() => {
                debug!("Rejected prediction request: {}", e);
                OUTCOME_INVALID
            }
            Err(e) => {
                warn!("Inference failed: {}", e);
                OUTCOME_FAILED
            }
        };
        if let Some(metrics) = &self.metrics {
            metrics.inc_predictions(outcome);
        }
    }
}
