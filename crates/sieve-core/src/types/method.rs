//! Outlier method tag and per-method threshold semantics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::InvalidArgumentError;

/// Statistical method used for outlier detection.
///
/// The threshold override means something different for each method:
/// an IQR multiplier, a z-score cutoff, or a quantile fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutlierMethod {
    /// Tukey fences: `Q1 - k*IQR` and `Q3 + k*IQR`.
    #[default]
    #[serde(rename = "iqr")]
    Iqr,
    /// Symmetric cutoff `±k` on the standardized values.
    #[serde(rename = "z-score")]
    ZScore,
    /// One-sided: values above the `p`-th quantile.
    #[serde(rename = "percentile")]
    Percentile,
}

impl OutlierMethod {
    pub const ALL: [OutlierMethod; 3] = [Self::Iqr, Self::ZScore, Self::Percentile];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Iqr => "iqr",
            Self::ZScore => "z-score",
            Self::Percentile => "percentile",
        }
    }

    /// Threshold used when the caller supplies none.
    pub fn default_threshold(&self) -> f64 {
        match self {
            Self::Iqr => 1.5,
            Self::ZScore => 3.0,
            Self::Percentile => 0.99,
        }
    }

    /// Check a threshold against the range that makes sense for this method.
    ///
    /// The percentile threshold is a fraction, so `99` is rejected where
    /// `0.99` was meant.
    pub fn validate_threshold(&self, value: f64) -> Result<f64, InvalidArgumentError> {
        if !value.is_finite() {
            return Err(InvalidArgumentError::NonFiniteThreshold {
                method: self.name(),
                value,
            });
        }
        let (ok, expected) = match self {
            Self::Iqr => (value >= 0.0, "a non-negative IQR multiplier"),
            Self::ZScore => (value >= 0.0, "a non-negative z-score cutoff"),
            Self::Percentile => (
                (0.0..=1.0).contains(&value),
                "a quantile fraction in [0, 1] (e.g. 0.99, not 99)",
            ),
        };
        if ok {
            Ok(value)
        } else {
            Err(InvalidArgumentError::ThresholdOutOfRange {
                method: self.name(),
                value,
                expected,
            })
        }
    }
}

impl fmt::Display for OutlierMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutlierMethod {
    type Err = InvalidArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| InvalidArgumentError::UnknownMethod { tag: s.to_string() })
    }
}
