//! Descriptive statistics over the present values of a series.
//!
//! Missing entries (`NaN`) never take part in a statistic.

pub mod moments;
pub mod quantile;
pub mod standardize;

pub use moments::Moments;
pub use quantile::SortedValues;
pub use standardize::standardize;

use sieve_core::{InvalidInputError, Series};

/// Reject series on which no statistic is defined at all.
pub(crate) fn ensure_present<L>(series: &Series<L>) -> Result<(), InvalidInputError> {
    if series.is_empty() {
        return Err(InvalidInputError::Empty);
    }
    if series.missing_count() == series.len() {
        return Err(InvalidInputError::AllMissing { len: series.len() });
    }
    Ok(())
}
