//! Upper-tail percentile cutoff.
//!
//! One-sided: only values above the `p`-th quantile are outliers. `p` is a
//! fraction (0.99), not a percentage (99).

use crate::stats::SortedValues;

use super::Fences;

pub fn fences(sorted: &SortedValues, fraction: f64) -> Fences {
    Fences::upper_only(sorted.quantile(fraction))
}
