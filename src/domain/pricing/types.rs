use crate::domain::errors::PredictionError;
use serde::Serialize;

/// The ordered model input: vehicle year then odometer reading.
///
/// Both components are finite; constructors reject anything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    pub year: f64,
    pub odometer: f64,
}

impl FeatureVector {
    pub fn new(year: f64, odometer: f64) -> Result<Self, PredictionError> {
        if !year.is_finite() {
            return Err(PredictionError::NonFinite { field: "tahun" });
        }
        if !odometer.is_finite() {
            return Err(PredictionError::NonFinite { field: "km" });
        }
        Ok(Self { year, odometer })
    }
}

/// A successful prediction, ready to be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceQuote {
    pub features: FeatureVector,
    /// Model output rounded to 2 decimal places.
    pub estimate: f64,
}

impl PriceQuote {
    /// Builds a quote from the raw model output.
    ///
    /// Non-finite outputs are reported as inference failures.
    pub fn from_prediction(features: FeatureVector, raw: f64) -> Result<Self, PredictionError> {
        if !raw.is_finite() {
            return Err(PredictionError::Inference {
                reason: format!("model produced a non-finite estimate ({})", raw),
            });
        }
        Ok(Self {
            features,
            estimate: round_to_cents(raw),
        })
    }

    /// Human-readable summary, e.g. `Mobil tahun 2020 dengan KM 15000`.
    pub fn message(&self) -> String {
        format!(
            "Mobil tahun {} dengan KM {}",
            truncated(self.features.year),
            truncated(self.features.odometer)
        )
    }
}

/// Rounds to 2 decimal places, sending exact ties to the even digit.
pub fn round_to_cents(value: f64) -> f64 {
    let rounded = (value * 100.0).round_ties_even() / 100.0;
    // Scaling can overflow for values near f64::MAX
    if rounded.is_finite() { rounded } else { value }
}

/// Integer part of `value` rendered without exponent or sign on zero.
fn truncated(value: f64) -> String {
    format!("{:.0}", value.trunc() + 0.0)
}
