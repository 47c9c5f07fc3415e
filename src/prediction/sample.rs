//! Environmental sample input type and boundary validation.
//!
//! A sample is one set of oceanographic measurements at a station. All
//! validation happens here, at the model boundary, before any arithmetic:
//! the transport layer hands over raw JSON and gets field-level errors
//! back. A `NaN` must never reach the factor computations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PredictionError;

/// Required wire fields, in feature order.
pub const SAMPLE_FIELDS: [&str; 7] = [
    "temperature",
    "salinity",
    "ph",
    "oxygen",
    "depth",
    "turbidity",
    "nutrientLevel",
];

/// One set of environmental measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalSample {
    /// Water temperature (°C)
    pub temperature: f64,

    /// Salinity (PSU)
    pub salinity: f64,

    /// pH (H2O scale)
    pub ph: f64,

    /// Dissolved oxygen (mg/L)
    pub oxygen: f64,

    /// Water depth (m)
    pub depth: f64,

    /// Turbidity (NTU)
    pub turbidity: f64,

    /// Nutrient concentration index (μg/L)
    pub nutrient_level: f64,
}

impl EnvironmentalSample {
    /// Parse a flat JSON object into a sample.
    ///
    /// Collects every missing, non-numeric, or non-finite field into a
    /// single `InvalidFields` error rather than stopping at the first.
    pub fn from_value(body: &Value) -> Result<Self, PredictionError> {
        let mut bad: Vec<String> = Vec::new();

        let mut field = |name: &str| -> f64 {
            match body.get(name).and_then(Value::as_f64) {
                Some(v) if v.is_finite() => v,
                _ => {
                    bad.push(name.to_string());
                    f64::NAN
                }
            }
        };

        let sample = Self {
            temperature: field("temperature"),
            salinity: field("salinity"),
            ph: field("ph"),
            oxygen: field("oxygen"),
            depth: field("depth"),
            turbidity: field("turbidity"),
            nutrient_level: field("nutrientLevel"),
        };

        if !bad.is_empty() {
            return Err(PredictionError::InvalidFields { fields: bad });
        }
        Ok(sample)
    }

    /// Strict-mode physical plausibility check.
    ///
    /// Bounds are instrument-range generous rather than habitat-typical:
    /// a reading outside them is a sensor or transcription fault, not an
    /// extreme environment.
    pub fn check_ranges(&self) -> Result<(), PredictionError> {
        let checks: [(&'static str, f64, f64, f64); 7] = [
            ("temperature", self.temperature, -2.0, 40.0),
            ("salinity", self.salinity, 0.0, 45.0),
            ("ph", self.ph, 6.0, 9.5),
            ("oxygen", self.oxygen, 0.0, 15.0),
            ("depth", self.depth, 0.0, 11000.0),
            ("turbidity", self.turbidity, 0.0, 50.0),
            ("nutrientLevel", self.nutrient_level, 0.0, 500.0),
        ];

        for (field, value, min, max) in checks {
            if !(min..=max).contains(&value) {
                return Err(PredictionError::OutOfRange {
                    field,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_body() -> Value {
        json!({
            "temperature": 26.0,
            "salinity": 34.5,
            "ph": 8.1,
            "oxygen": 6.5,
            "depth": 25.0,
            "turbidity": 3.0,
            "nutrientLevel": 40.0
        })
    }

    #[test]
    fn parses_complete_body() {
        let sample = EnvironmentalSample::from_value(&full_body()).unwrap();
        assert_eq!(sample.temperature, 26.0);
        assert_eq!(sample.nutrient_level, 40.0);
    }

    #[test]
    fn integer_json_values_are_accepted() {
        let mut body = full_body();
        body["depth"] = json!(25);
        let sample = EnvironmentalSample::from_value(&body).unwrap();
        assert_eq!(sample.depth, 25.0);
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let body = json!({ "temperature": 26.0, "ph": 8.1 });
        let err = EnvironmentalSample::from_value(&body).unwrap_err();
        match err {
            PredictionError::InvalidFields { fields } => {
                assert_eq!(
                    fields,
                    vec!["salinity", "oxygen", "depth", "turbidity", "nutrientLevel"]
                );
            }
            other => panic!("expected InvalidFields, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_field_is_rejected() {
        let mut body = full_body();
        body["salinity"] = json!("34.5");
        let err = EnvironmentalSample::from_value(&body).unwrap_err();
        assert_eq!(
            err,
            PredictionError::InvalidFields {
                fields: vec!["salinity".to_string()]
            }
        );
    }

    #[test]
    fn ranges_pass_for_typical_reef_sample() {
        let sample = EnvironmentalSample::from_value(&full_body()).unwrap();
        assert!(sample.check_ranges().is_ok());
    }

    #[test]
    fn ranges_reject_impossible_ph() {
        let mut body = full_body();
        body["ph"] = json!(13.2);
        let sample = EnvironmentalSample::from_value(&body).unwrap();
        let err = sample.check_ranges().unwrap_err();
        match err {
            PredictionError::OutOfRange { field, .. } => assert_eq!(field, "ph"),
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }
}
