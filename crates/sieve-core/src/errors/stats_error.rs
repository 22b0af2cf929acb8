//! Errors returned by the analysis operations.

use super::error_code::SieveErrorCode;
use super::{InvalidArgumentError, InvalidInputError};

/// Aggregates argument and input errors via `From` conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgumentError),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl StatsError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl SieveErrorCode for StatsError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(e) => e.error_code(),
            Self::InvalidInput(e) => e.error_code(),
        }
    }
}
