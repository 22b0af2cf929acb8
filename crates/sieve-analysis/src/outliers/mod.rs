//! Outlier detection with three selectable methods.
//!
//! - IQR with Tukey fences (two-sided, default k = 1.5)
//! - Z-Score on the standardized series (two-sided, default k = 3)
//! - Percentile (upper tail only, default p = 0.99)
//!
//! Every method reduces to [`Fences`] applied to a per-entry statistic;
//! the detector keeps the entries the fences flag.

pub mod detector;
pub mod fences;
pub mod iqr;
pub mod percentile;
pub mod zscore;

pub use detector::{get_outliers, get_outliers_by_tag, outlier_mask, OutlierDetector};
pub use fences::Fences;
