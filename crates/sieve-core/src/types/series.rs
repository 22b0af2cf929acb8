//! Labelled one-dimensional numeric series.

use serde::Serialize;

use crate::errors::InvalidInputError;

/// An ordered sequence of `f64` values, each paired with a stable label.
///
/// A `NaN` value marks a missing entry. Every derived series keeps the
/// labels of the entries it retains, in their original relative order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series<L = usize> {
    labels: Vec<L>,
    values: Vec<f64>,
}

impl Series<usize> {
    /// Build a series with positional labels `0..n`.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            labels: (0..values.len()).collect(),
            values,
        }
    }
}

impl<L> Series<L> {
    /// Build a series from explicit labels. Lengths must match.
    pub fn with_labels(labels: Vec<L>, values: Vec<f64>) -> Result<Self, InvalidInputError> {
        if labels.len() != values.len() {
            return Err(InvalidInputError::LabelCountMismatch {
                labels: labels.len(),
                values: values.len(),
            });
        }
        Ok(Self { labels, values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Entry at position `index`, as `(label, value)`.
    pub fn get(&self, index: usize) -> Option<(&L, f64)> {
        Some((self.labels.get(index)?, *self.values.get(index)?))
    }

    /// Iterate `(label, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&L, f64)> + '_ {
        self.labels.iter().zip(self.values.iter().copied())
    }

    /// Non-missing values, in order.
    pub fn present_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied().filter(|v| !v.is_nan())
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_nan()).count()
    }

    /// Apply `f` elementwise, keeping every label in place.
    pub fn map_values<F>(&self, f: F) -> Series<L>
    where
        L: Clone,
        F: FnMut(f64) -> f64,
    {
        Series {
            labels: self.labels.clone(),
            values: self.values.iter().copied().map(f).collect(),
        }
    }

    /// Keep the entries whose `mask` slot is `true`.
    ///
    /// Slots past the end of a short mask count as `false`.
    pub fn select(&self, mask: &[bool]) -> Series<L>
    where
        L: Clone,
    {
        let (labels, values) = self
            .iter()
            .zip(mask.iter().copied())
            .filter(|(_, keep)| *keep)
            .map(|((label, value), _)| (label.clone(), value))
            .unzip();
        Series { labels, values }
    }
}

impl From<Vec<f64>> for Series<usize> {
    fn from(values: Vec<f64>) -> Self {
        Self::from_values(values)
    }
}

impl FromIterator<f64> for Series<usize> {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}
