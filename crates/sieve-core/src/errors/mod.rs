//! Error handling for sieve.
//! One error enum per concern, `thiserror` only.

pub mod argument_error;
pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod stats_error;

pub use argument_error::InvalidArgumentError;
pub use config_error::ConfigError;
pub use error_code::SieveErrorCode;
pub use input_error::InvalidInputError;
pub use stats_error::StatsError;
