//! Request body coercion.
//!
//! The body is parsed as loose JSON rather than a typed struct so that
//! numeric strings and booleans are accepted the same way a numeric cast
//! would accept them, and so every failure surfaces as a [`PredictionError`].

use super::types::FeatureVector;
use crate::domain::errors::PredictionError;
use serde_json::{Map, Value};

pub const YEAR_FIELD: &str = "tahun";
pub const ODOMETER_FIELD: &str = "km";

/// Parses a raw request body into a validated feature vector.
pub fn parse_request(body: &[u8]) -> Result<FeatureVector, PredictionError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| PredictionError::MalformedBody {
            reason: e.to_string(),
        })?;
    let object = value.as_object().ok_or(PredictionError::NotAnObject)?;

    let year = required_number(object, YEAR_FIELD)?;
    let odometer = required_number(object, ODOMETER_FIELD)?;

    FeatureVector::new(year, odometer)
}

fn required_number(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, PredictionError> {
    let value = object
        .get(field)
        .ok_or(PredictionError::MissingField { field })?;
    coerce_number(field, value)
}

/// Coerces a JSON value to a finite f64.
///
/// Numbers pass through, strings are trimmed and parsed, booleans map to
/// 1.0/0.0. Everything else is rejected.
pub fn coerce_number(field: &'static str, value: &Value) -> Result<f64, PredictionError> {
    let invalid = || PredictionError::InvalidNumber {
        field,
        value: value.to_string(),
    };

    let number = match value {
        Value::Number(n) => n.as_f64().ok_or_else(invalid)?,
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| invalid())?,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => return Err(invalid()),
    };

    if !number.is_finite() {
        return Err(PredictionError::NonFinite { field });
    }
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_numeric_body() {
        let fv = parse_request(br#"{"tahun": 2020, "km": 15000}"#).unwrap();
        assert_eq!(fv.year, 2020.0);
        assert_eq!(fv.odometer, 15000.0);
    }

    #[test]
    fn test_parse_numeric_strings() {
        let fv = parse_request(br#"{"tahun": "2018", "km": " 42000.5 "}"#).unwrap();
        assert_eq!(fv.year, 2018.0);
        assert_eq!(fv.odometer, 42000.5);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let fv = parse_request(br#"{"tahun": 2015, "km": 1, "merk": "Toyota"}"#).unwrap();
        assert_eq!(fv.year, 2015.0);
    }

    #[test]
    fn test_missing_field_checks_year_first() {
        assert_eq!(
            parse_request(b"{}"),
            Err(PredictionError::MissingField { field: "tahun" })
        );
        assert_eq!(
            parse_request(br#"{"tahun": 2020}"#),
            Err(PredictionError::MissingField { field: "km" })
        );
    }

    #[test]
    fn test_non_numeric_string_rejected() {
        let err = parse_request(br#"{"tahun": "abc", "km": 15000}"#).unwrap_err();
        assert_eq!(
            err,
            PredictionError::InvalidNumber {
                field: "tahun",
                value: "\"abc\"".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_and_empty_bodies() {
        assert!(matches!(
            parse_request(b""),
            Err(PredictionError::MalformedBody { .. })
        ));
        assert!(matches!(
            parse_request(b"{\"tahun\": "),
            Err(PredictionError::MalformedBody { .. })
        ));
        assert_eq!(parse_request(b"[2020, 15000]"), Err(PredictionError::NotAnObject));
    }

    #[test]
    fn test_coerce_number_variants() {
        assert_eq!(coerce_number("km", &json!(true)), Ok(1.0));
        assert_eq!(coerce_number("km", &json!(false)), Ok(0.0));
        assert_eq!(coerce_number("km", &json!(-3.5)), Ok(-3.5));
        assert!(coerce_number("km", &json!(null)).is_err());
        assert!(coerce_number("km", &json!([1])).is_err());
        assert!(coerce_number("km", &json!({"v": 1})).is_err());
    }

    #[test]
    fn test_non_finite_strings_rejected() {
        assert_eq!(
            coerce_number("tahun", &json!("nan")),
            Err(PredictionError::NonFinite { field: "tahun" })
        );
        assert_eq!(
            coerce_number("km", &json!("inf")),
            Err(PredictionError::NonFinite { field: "km" })
        );
    }
}
