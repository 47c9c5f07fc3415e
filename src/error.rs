//! Error taxonomy for the prediction pipeline.
//!
//! All variants are request-scoped: nothing here is transient or fatal to
//! the process, and nothing is retried.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    /// One or more required sample fields are missing or non-numeric.
    /// Carries every offending field, not just the first.
    #[error("missing or non-numeric field(s): {}", fields.join(", "))]
    InvalidFields { fields: Vec<String> },

    /// Strict-mode rejection: the value is numeric but physically
    /// implausible for the instrument range.
    #[error("field '{field}' out of physical range: {value} (expected {min}..{max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Trend analysis over zero scenarios has no defined summary.
    #[error("scenario list is empty")]
    EmptyBatch,
}
