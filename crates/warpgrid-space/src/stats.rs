//! Dataset statistics consumed by data-driven builders.

/// Read-only statistics of a labelled time series dataset.
///
/// `attribute_count` counts the class label slot, so a dataset of length-`L`
/// series reports `L + 1`.
pub trait DatasetStats {
    /// Number of attributes per instance, including the class label.
    fn attribute_count(&self) -> usize;

    /// Population standard deviation over every series value in the dataset.
    fn population_std_dev(&self) -> f64;

    /// Number of time steps per series. Zero when `attribute_count <= 1`.
    fn series_length(&self) -> usize {
        self.attribute_count().saturating_sub(1)
    }
}

/// Precomputed statistics, for callers that already know them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    attribute_count: usize,
    std_dev: f64,
}

impl SummaryStats {
    /// Create statistics from an attribute count (class slot included) and a
    /// population standard deviation.
    #[must_use]
    pub fn new(attribute_count: usize, std_dev: f64) -> Self {
        Self {
            attribute_count,
            std_dev,
        }
    }
}

impl DatasetStats for SummaryStats {
    fn attribute_count(&self) -> usize {
        self.attribute_count
    }

    fn population_std_dev(&self) -> f64 {
        self.std_dev
    }
}

/// Population standard deviation (divides by n) of `values`.
///
/// Returns `0.0` for an empty input.
#[must_use]
pub fn population_std_dev<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    let iter = values.into_iter();
    let (n, sum) = iter.clone().fold((0usize, 0.0), |(n, s), v| (n + 1, s + v));
    if n == 0 {
        return 0.0;
    }
    let mean = sum / n as f64;
    let variance = iter.map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
    variance.sqrt()
}
