//! Core types, errors, config and tracing for sieve.
//!
//! Shared by the analysis crate: the labelled [`Series`] container, the
//! [`OutlierMethod`] tag, the error enums and the layered configuration.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{OutlierConfig, SieveConfig};
pub use errors::{ConfigError, InvalidArgumentError, InvalidInputError, SieveErrorCode, StatsError};
pub use types::{OutlierMethod, Series};
