//! Error types for the measure catalogue.

use warpgrid_space::SpaceError;

/// Errors from building a measure's parameter space.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    /// Returned when no catalogue entry has the requested id.
    #[error("unknown measure \"{id}\" (expected one of: {expected})")]
    UnknownMeasure {
        /// The id that was looked up.
        id: String,
        /// Comma-separated list of known ids.
        expected: String,
    },

    /// Returned when the dataset reports a NaN, infinite or negative standard deviation.
    #[error("dataset standard deviation must be finite and non-negative, got {std_dev}")]
    InvalidStdDev {
        /// The reported standard deviation.
        std_dev: f64,
    },

    /// Returned when the series length does not fit a window-size value.
    #[error("series length {length} is too large for a window-size axis")]
    SeriesTooLong {
        /// The reported series length.
        length: usize,
    },

    /// Wraps an error raised while assembling the space.
    #[error("invalid parameter space: {0}")]
    Space(#[from] SpaceError),
}
