//! Quantiles by linear interpolation between closest ranks.
//!
//! The single estimator used across the crate (Hyndman-Fan type 7):
//! `rank = p * (n - 1)`, then interpolate between the two neighbouring
//! order statistics.

use sieve_core::{InvalidInputError, Series};

use super::ensure_present;

/// The present values of a series, sorted ascending. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedValues(Vec<f64>);

impl SortedValues {
    pub fn from_series<L>(series: &Series<L>) -> Result<Self, InvalidInputError> {
        ensure_present(series)?;
        let mut sorted: Vec<f64> = series.present_values().collect();
        sorted.sort_by(f64::total_cmp);
        Ok(Self(sorted))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a `SortedValues` holds at least one value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `p`-th quantile, `p` a fraction in `[0, 1]` (clamped).
    pub fn quantile(&self, p: f64) -> f64 {
        let sorted = &self.0;
        let last = sorted.len() - 1;
        let rank = p.clamp(0.0, 1.0) * last as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(last);
        let frac = rank - lower as f64;
        sorted[lower] + frac * (sorted[upper] - sorted[lower])
    }

    pub fn median(&self) -> f64 {
        self.quantile(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(values: &[f64]) -> SortedValues {
        SortedValues::from_series(&Series::from_values(values.to_vec())).unwrap()
    }

    #[test]
    fn test_quartiles_interpolate() {
        let s = sorted(&[100.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((s.quantile(0.25) - 2.25).abs() < 1e-12);
        assert!((s.quantile(0.75) - 4.75).abs() < 1e-12);
    }

    #[test]
    fn test_endpoints() {
        let s = sorted(&[3.0, 1.0, 2.0]);
        assert_eq!(s.quantile(0.0), 1.0);
        assert_eq!(s.quantile(1.0), 3.0);
        assert_eq!(s.median(), 2.0);
    }

    #[test]
    fn test_single_value() {
        let s = sorted(&[7.0]);
        assert_eq!(s.quantile(0.25), 7.0);
        assert_eq!(s.quantile(0.99), 7.0);
    }

    #[test]
    fn test_missing_values_are_dropped() {
        let s = sorted(&[f64::NAN, 2.0, 1.0]);
        assert_eq!(s.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_empty_and_all_missing_rejected() {
        assert_eq!(
            SortedValues::from_series(&Series::from_values(vec![])).unwrap_err(),
            InvalidInputError::Empty
        );
        assert_eq!(
            SortedValues::from_series(&Series::from_values(vec![f64::NAN; 3])).unwrap_err(),
            InvalidInputError::AllMissing { len: 3 }
        );
    }
}
