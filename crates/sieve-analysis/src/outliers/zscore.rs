//! Z-Score against a symmetric cutoff.

use super::Fences;

/// Fences at `±cutoff`, applied to standardized values.
pub fn fences(cutoff: f64) -> Fences {
    Fences::two_sided(-cutoff, cutoff)
}
