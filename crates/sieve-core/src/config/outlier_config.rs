//! Outlier detection defaults.

use serde::{Deserialize, Serialize};

use crate::types::OutlierMethod;

/// Default method and thresholds for outlier detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutlierConfig {
    /// Method used when the caller does not pick one. Default: iqr.
    pub method: Option<OutlierMethod>,
    /// Tukey fence multiplier. Default: 1.5.
    pub iqr_multiplier: Option<f64>,
    /// Symmetric z-score cutoff. Default: 3.0.
    pub z_threshold: Option<f64>,
    /// Upper-tail quantile fraction in [0, 1]. Default: 0.99.
    pub percentile: Option<f64>,
}

impl OutlierConfig {
    pub fn effective_method(&self) -> OutlierMethod {
        self.method.unwrap_or_default()
    }

    pub fn effective_iqr_multiplier(&self) -> f64 {
        self.iqr_multiplier
            .unwrap_or_else(|| OutlierMethod::Iqr.default_threshold())
    }

    pub fn effective_z_threshold(&self) -> f64 {
        self.z_threshold
            .unwrap_or_else(|| OutlierMethod::ZScore.default_threshold())
    }

    pub fn effective_percentile(&self) -> f64 {
        self.percentile
            .unwrap_or_else(|| OutlierMethod::Percentile.default_threshold())
    }

    /// The threshold a detection with `method` falls back to.
    pub fn threshold_for(&self, method: OutlierMethod) -> f64 {
        match method {
            OutlierMethod::Iqr => self.effective_iqr_multiplier(),
            OutlierMethod::ZScore => self.effective_z_threshold(),
            OutlierMethod::Percentile => self.effective_percentile(),
        }
    }

    /// Configured threshold fields paired with the method that interprets them.
    pub(crate) fn thresholds(&self) -> [(&'static str, OutlierMethod, Option<f64>); 3] {
        [
            ("outliers.iqr_multiplier", OutlierMethod::Iqr, self.iqr_multiplier),
            ("outliers.z_threshold", OutlierMethod::ZScore, self.z_threshold),
            ("outliers.percentile", OutlierMethod::Percentile, self.percentile),
        ]
    }
}
