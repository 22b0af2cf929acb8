//! Top-level sieve configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::OutlierConfig;
use crate::errors::ConfigError;
use crate::types::OutlierMethod;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "sieve.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SIEVE_*`)
/// 2. Project config (`sieve.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SieveConfig {
    pub outliers: OutlierConfig,
}

impl SieveConfig {
    /// Load configuration with layered resolution, then validate it.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            ::tracing::debug!(path = %project_config_path.display(), "loaded project config");
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (no env layer, no validation).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate every configured threshold against its method's range.
    pub fn validate(config: &SieveConfig) -> Result<(), ConfigError> {
        for (field, method, value) in config.outliers.thresholds() {
            if let Some(value) = value {
                method
                    .validate_threshold(value)
                    .map_err(|e| ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: e.to_string(),
                    })?;
            }
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut SieveConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SieveConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut SieveConfig, other: &SieveConfig) {
        if other.outliers.method.is_some() {
            base.outliers.method = other.outliers.method;
        }
        if other.outliers.iqr_multiplier.is_some() {
            base.outliers.iqr_multiplier = other.outliers.iqr_multiplier;
        }
        if other.outliers.z_threshold.is_some() {
            base.outliers.z_threshold = other.outliers.z_threshold;
        }
        if other.outliers.percentile.is_some() {
            base.outliers.percentile = other.outliers.percentile;
        }
    }

    /// Pattern: `SIEVE_OUTLIERS_METHOD`, `SIEVE_OUTLIERS_Z_THRESHOLD`, etc.
    /// Values that fail to parse are ignored.
    fn apply_env_overrides(config: &mut SieveConfig) {
        if let Ok(val) = std::env::var("SIEVE_OUTLIERS_METHOD") {
            if let Ok(v) = val.parse::<OutlierMethod>() {
                config.outliers.method = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SIEVE_OUTLIERS_IQR_MULTIPLIER") {
            if let Ok(v) = val.parse::<f64>() {
                config.outliers.iqr_multiplier = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SIEVE_OUTLIERS_Z_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.outliers.z_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SIEVE_OUTLIERS_PERCENTILE") {
            if let Ok(v) = val.parse::<f64>() {
                config.outliers.percentile = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
