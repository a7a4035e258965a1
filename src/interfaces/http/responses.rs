use crate::application::ml::ModelInfo;
use crate::config::StatusCodePolicy;
use crate::domain::errors::PredictionError;
use crate::domain::pricing::PriceQuote;
use actix_web::http::StatusCode;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Sukses,
    Error,
}

/// Body of every `/api/predict` response.
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub status: Status,
    pub pesan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimasi_harga: Option<f64>,
}

impl PredictionResponse {
    pub fn success(quote: &PriceQuote) -> Self {
        Self {
            status: Status::Sukses,
            pesan: quote.message(),
            estimasi_harga: Some(quote.estimate),
        }
    }

    pub fn error(error: &PredictionError) -> Self {
        Self {
            status: Status::Error,
            pesan: error.to_string(),
            estimasi_harga: None,
        }
    }

    pub fn from_result(result: &Result<PriceQuote, PredictionError>) -> Self {
        match result {
            Ok(quote) => Self::success(quote),
            Err(e) => Self::error(e),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModelInfoResponse<'a> {
    pub status: Status,
    pub model: &'a ModelInfo,
}

/// HTTP status for a prediction outcome under `policy`.
pub fn response_status(
    policy: StatusCodePolicy,
    result: &Result<PriceQuote, PredictionError>,
) -> StatusCode {
    match (policy, result) {
        (_, Ok(_)) | (StatusCodePolicy::Legacy, Err(_)) => StatusCode::OK,
        (StatusCodePolicy::Strict, Err(PredictionError::BodyTooLarge { .. })) => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        (StatusCodePolicy::Strict, Err(e)) if e.is_validation() => StatusCode::BAD_REQUEST,
        (StatusCodePolicy::Strict, Err(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::FeatureVector;

    fn quote() -> PriceQuote {
        PriceQuote::from_prediction(FeatureVector::new(2020.0, 15000.0).unwrap(), 187.456)
            .unwrap()
    }

    #[test]
    fn test_success_body_shape() {
        let body = serde_json::to_value(PredictionResponse::success(&quote())).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "status": "sukses",
                "pesan": "Mobil tahun 2020 dengan KM 15000",
                "estimasi_harga": 187.46
            })
        );
    }

    #[test]
    fn test_error_body_omits_estimate() {
        let err = PredictionError::MissingField { field: "km" };
        let body = serde_json::to_value(PredictionResponse::error(&err)).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["pesan"], "Missing field 'km'");
        assert!(body.get("estimasi_harga").is_none());
    }

    #[test]
    fn test_strict_status_codes() {
        let invalid: Result<PriceQuote, _> = Err(PredictionError::NotAnObject);
        let failed: Result<PriceQuote, _> = Err(PredictionError::Inference {
            reason: "x".to_string(),
        });
        assert_eq!(
            response_status(StatusCodePolicy::Strict, &Ok(quote())),
            StatusCode::OK
        );
        assert_eq!(
            response_status(StatusCodePolicy::Strict, &invalid),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            response_status(StatusCodePolicy::Strict, &failed),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_oversized_body_status() {
        let too_large: Result<PriceQuote, _> = Err(PredictionError::BodyTooLarge { limit: 10 });
        assert_eq!(
            response_status(StatusCodePolicy::Strict, &too_large),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            response_status(StatusCodePolicy::Legacy, &too_large),
            StatusCode::OK
        );
    }

    #[test]
    fn test_legacy_always_ok() {
        let failed: Result<PriceQuote, _> = Err(PredictionError::Inference {
            reason: "x".to_string(),
        });
        assert_eq!(
            response_status(StatusCodePolicy::Legacy, &failed),
            StatusCode::OK
        );
    }
}
