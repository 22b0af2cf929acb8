//! Z-score normalization.

use sieve_core::{InvalidInputError, Series, StatsError};
use tracing::trace;

use super::{ensure_present, Moments};

/// Return `(x - mean) / std_dev` for every entry, labels unchanged.
///
/// Uses the sample standard deviation. Missing entries stay missing.
/// Fails when fewer than two values are present or the values are constant.
pub fn standardize<L: Clone>(series: &Series<L>) -> Result<Series<L>, StatsError> {
    ensure_present(series)?;

    let moments = Moments::of(series);
    if moments.count < 2 {
        return Err(InvalidInputError::TooShort {
            required: 2,
            actual: moments.count,
        }
        .into());
    }
    if moments.std_dev <= 0.0 || !moments.std_dev.is_finite() {
        return Err(InvalidInputError::ZeroVariance.into());
    }

    trace!(
        count = moments.count,
        mean = moments.mean,
        std_dev = moments.std_dev,
        "standardizing series"
    );

    Ok(series.map_values(|x| (x - moments.mean) / moments.std_dev))
}
