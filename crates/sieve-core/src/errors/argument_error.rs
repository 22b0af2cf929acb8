//! Caller mistakes in the arguments of an analysis call.

use super::error_code::{self, SieveErrorCode};

/// The method tag or threshold passed by the caller is unusable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidArgumentError {
    #[error("Unknown outlier method '{tag}' (expected one of: iqr, z-score, percentile)")]
    UnknownMethod { tag: String },

    #[error("Threshold for {method} must be finite, got {value}")]
    NonFiniteThreshold { method: &'static str, value: f64 },

    #[error("Threshold for {method} must be {expected}, got {value}")]
    ThresholdOutOfRange {
        method: &'static str,
        value: f64,
        expected: &'static str,
    },
}

impl SieveErrorCode for InvalidArgumentError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_ARGUMENT
    }
}
