//! Method dispatch and the public detection entry points.

use std::borrow::Cow;

use sieve_core::{OutlierConfig, OutlierMethod, Series, StatsError};
use tracing::debug;

use super::{iqr, percentile, zscore, Fences};
use crate::stats::{standardize, SortedValues};

/// Outlier detector carrying the default method and thresholds.
///
/// A `None` threshold falls back to the config, which in turn falls back to
/// [`OutlierMethod::default_threshold`].
#[derive(Debug, Clone, Default)]
pub struct OutlierDetector {
    config: OutlierConfig,
}

impl OutlierDetector {
    /// Detector with compiled defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: OutlierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OutlierConfig {
        &self.config
    }

    /// Entries of `series` classified as outliers, labels and order kept.
    pub fn detect<L: Clone>(
        &self,
        series: &Series<L>,
        method: OutlierMethod,
        threshold: Option<f64>,
    ) -> Result<Series<L>, StatsError> {
        let mask = self.mask(series, method, threshold)?;
        Ok(series.select(&mask))
    }

    /// [`detect`](Self::detect) with the configured method and threshold.
    pub fn detect_default<L: Clone>(&self, series: &Series<L>) -> Result<Series<L>, StatsError> {
        self.detect(series, self.config.effective_method(), None)
    }

    /// One flag per entry of `series`; `true` marks an outlier.
    pub fn mask<L: Clone>(
        &self,
        series: &Series<L>,
        method: OutlierMethod,
        threshold: Option<f64>,
    ) -> Result<Vec<bool>, StatsError> {
        let (fences, statistic) = self.evaluate(series, method, threshold)?;
        let mask: Vec<bool> = statistic.iter().map(|&x| fences.flags(x)).collect();

        debug!(
            method = %method,
            len = series.len(),
            fences = %fences,
            outliers = mask.iter().filter(|&&flag| flag).count(),
            "outlier detection complete"
        );

        Ok(mask)
    }

    /// The fences `method` applies. For z-score they are in standard
    /// deviations, for the other methods in the units of the values.
    pub fn fences<L: Clone>(
        &self,
        series: &Series<L>,
        method: OutlierMethod,
        threshold: Option<f64>,
    ) -> Result<Fences, StatsError> {
        self.evaluate(series, method, threshold)
            .map(|(fences, _)| fences)
    }

    /// Resolve the threshold, then compute the fences and the per-entry
    /// statistic they are tested against.
    fn evaluate<'a, L: Clone>(
        &self,
        series: &'a Series<L>,
        method: OutlierMethod,
        threshold: Option<f64>,
    ) -> Result<(Fences, Cow<'a, [f64]>), StatsError> {
        let k = method.validate_threshold(
            threshold.unwrap_or_else(|| self.config.threshold_for(method)),
        )?;

        match method {
            OutlierMethod::Iqr => {
                let sorted = SortedValues::from_series(series)?;
                Ok((iqr::fences(&sorted, k), Cow::Borrowed(series.values())))
            }
            OutlierMethod::ZScore => {
                let scores = standardize(series)?;
                Ok((zscore::fences(k), Cow::Owned(scores.values().to_vec())))
            }
            OutlierMethod::Percentile => {
                let sorted = SortedValues::from_series(series)?;
                Ok((percentile::fences(&sorted, k), Cow::Borrowed(series.values())))
            }
        }
    }
}

/// Outliers of `series` under `method`, with the method's default threshold
/// unless `threshold` is given.
///
/// The threshold is an IQR multiplier, a z-score cutoff, or a quantile
/// fraction in `[0, 1]` depending on `method`.
pub fn get_outliers<L: Clone>(
    series: &Series<L>,
    method: OutlierMethod,
    threshold: Option<f64>,
) -> Result<Series<L>, StatsError> {
    OutlierDetector::new().detect(series, method, threshold)
}

/// [`get_outliers`] with the method given as a text tag:
/// `"iqr"`, `"z-score"` or `"percentile"`.
pub fn get_outliers_by_tag<L: Clone>(
    series: &Series<L>,
    tag: &str,
    threshold: Option<f64>,
) -> Result<Series<L>, StatsError> {
    let method: OutlierMethod = tag.parse()?;
    get_outliers(series, method, threshold)
}

/// Boolean mask aligned with `series`; `true` marks an outlier.
pub fn outlier_mask<L: Clone>(
    series: &Series<L>,
    method: OutlierMethod,
    threshold: Option<f64>,
) -> Result<Vec<bool>, StatsError> {
    OutlierDetector::new().mask(series, method, threshold)
}
