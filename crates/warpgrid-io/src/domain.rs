//! Domain types for warpgrid-io.

use warpgrid_space::{population_std_dev, DatasetStats};

use crate::IoError;

/// A validated experiment name used as the artifact file prefix.
///
/// Must match `[a-zA-Z0-9_-]+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentName(String);

impl ExperimentName {
    /// Parse and validate an experiment name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidExperimentName`] if the name is empty or
    /// contains characters outside `[a-zA-Z0-9_-]`.
    pub fn new(name: String) -> Result<Self, IoError> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(IoError::InvalidExperimentName { name });
        }
        Ok(Self(name))
    }

    /// Return the experiment name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExperimentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Equal-length labelled time series.
///
/// Produced by [`DatasetReader`](crate::DatasetReader). `labels[i]` is the
/// class of `series[i]`. Every series has at least one value.
#[derive(Debug, Clone)]
pub struct LabelledDataset {
    labels: Vec<String>,
    series: Vec<Vec<f64>>,
    series_length: usize,
    std_dev: f64,
}

impl LabelledDataset {
    /// Create a dataset from parallel label and series vectors. The population
    /// standard deviation is computed once here.
    pub(crate) fn new(labels: Vec<String>, series: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(labels.len(), series.len());
        let series_length = series.first().map_or(0, Vec::len);
        let std_dev = population_std_dev(series.iter().flatten().copied());
        Self {
            labels,
            series,
            series_length,
            std_dev,
        }
    }

    /// Return the class labels in row order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Return the series in row order.
    #[must_use]
    pub fn series(&self) -> &[Vec<f64>] {
        &self.series
    }

    /// Return the number of instances.
    #[must_use]
    pub fn n_instances(&self) -> usize {
        self.series.len()
    }
}

impl DatasetStats for LabelledDataset {
    fn attribute_count(&self) -> usize {
        self.series_length + 1
    }

    fn population_std_dev(&self) -> f64 {
        self.std_dev
    }
}
