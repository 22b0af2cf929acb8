//! IQR with Tukey fences.
//!
//! Uses Q1 - k*IQR and Q3 + k*IQR as fences (k = 1.5 default).
//! Resistant to extreme values that inflate the standard deviation.

use crate::stats::SortedValues;

use super::Fences;

/// Fences at `multiplier` interquartile ranges outside the quartiles.
///
/// A zero IQR collapses both fences onto the quartiles, so every value
/// different from them is flagged.
pub fn fences(sorted: &SortedValues, multiplier: f64) -> Fences {
    let q1 = sorted.quantile(0.25);
    let q3 = sorted.quantile(0.75);
    let iqr = q3 - q1;
    Fences::two_sided(q1 - multiplier * iqr, q3 + multiplier * iqr)
}
