//! Shared data types.

pub mod method;
pub mod series;

pub use method::OutlierMethod;
pub use series::Series;
