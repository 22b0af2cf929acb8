//! Degenerate input series.

use super::error_code::{self, SieveErrorCode};

/// The series is one on which the requested statistic is undefined.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("Series is empty")]
    Empty,

    #[error("All {len} entries of the series are missing")]
    AllMissing { len: usize },

    #[error("Series needs at least {required} non-missing values, got {actual}")]
    TooShort { required: usize, actual: usize },

    #[error("Series has zero variance")]
    ZeroVariance,

    #[error("Series has {labels} labels but {values} values")]
    LabelCountMismatch { labels: usize, values: usize },
}

impl SieveErrorCode for InvalidInputError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
