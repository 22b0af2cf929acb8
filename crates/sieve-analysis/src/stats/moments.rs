//! Mean and sample standard deviation via `statrs`.

use sieve_core::Series;
use statrs::statistics::Statistics;

/// First two moments of the present values of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    /// Number of non-missing values.
    pub count: usize,
    /// Arithmetic mean. `NaN` when `count == 0`.
    pub mean: f64,
    /// Sample standard deviation (divisor `n - 1`). `NaN` when `count < 2`.
    pub std_dev: f64,
}

impl Moments {
    pub fn of<L>(series: &Series<L>) -> Self {
        let present: Vec<f64> = series.present_values().collect();
        Self {
            count: present.len(),
            mean: present.iter().mean(),
            std_dev: present.iter().std_dev(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_std_dev() {
        let m = Moments::of(&Series::from_values(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]));
        assert_eq!(m.count, 8);
        assert!((m.mean - 5.0).abs() < 1e-12);
        // population sd is 2.0; sample sd is sqrt(32 / 7)
        assert!((m.std_dev - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_missing_values_excluded() {
        let m = Moments::of(&Series::from_values(vec![1.0, f64::NAN, 3.0]));
        assert_eq!(m.count, 2);
        assert!((m.mean - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_value_has_undefined_std_dev() {
        let m = Moments::of(&Series::from_values(vec![4.0]));
        assert_eq!(m.count, 1);
        assert!(m.std_dev.is_nan());
    }
}
