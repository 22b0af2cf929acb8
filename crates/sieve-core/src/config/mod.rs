//! Configuration system for sieve.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod outlier_config;
pub mod sieve_config;

pub use outlier_config::OutlierConfig;
pub use sieve_config::SieveConfig;
