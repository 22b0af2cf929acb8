//! Standardization and outlier detection over labelled numeric series.
//!
//! ```
//! use sieve_analysis::{get_outliers, OutlierMethod, Series};
//!
//! let series = Series::from_values(vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0]);
//! let outliers = get_outliers(&series, OutlierMethod::Iqr, None)?;
//! assert_eq!(outliers.values(), &[100.0]);
//! assert_eq!(outliers.labels(), &[5]);
//! # Ok::<(), sieve_analysis::StatsError>(())
//! ```

pub mod outliers;
pub mod stats;

pub use outliers::{get_outliers, get_outliers_by_tag, outlier_mask, Fences, OutlierDetector};
pub use sieve_core::{InvalidArgumentError, InvalidInputError, OutlierMethod, Series, StatsError};
pub use stats::{standardize, Moments, SortedValues};
