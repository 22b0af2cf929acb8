//! Cut-offs of an outlier predicate.

use std::fmt;

/// Values strictly below `lower` or strictly above `upper` are outliers.
///
/// A one-sided test has no lower fence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fences {
    pub lower: Option<f64>,
    pub upper: f64,
}

impl Fences {
    pub fn two_sided(lower: f64, upper: f64) -> Self {
        Self {
            lower: Some(lower),
            upper,
        }
    }

    pub fn upper_only(upper: f64) -> Self {
        Self { lower: None, upper }
    }

    /// Whether `x` falls outside the fences. `NaN` never does.
    pub fn flags(&self, x: f64) -> bool {
        self.lower.is_some_and(|lower| x < lower) || x > self.upper
    }
}

impl fmt::Display for Fences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower {
            Some(lower) => write!(f, "[{lower:.4}, {:.4}]", self.upper),
            None => write!(f, "(-inf, {:.4}]", self.upper),
        }
    }
}
