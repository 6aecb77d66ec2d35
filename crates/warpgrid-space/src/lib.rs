//! Nested discrete parameter spaces for elastic distance measures.
//!
//! Pure data library with no I/O. Provides the [`ParamSpace`] grid descriptor,
//! range generators for numeric axes, order-preserving deduplication, the
//! [`DatasetStats`] boundary for data-driven bounds, and opaque
//! [`DistanceMeasure`] handles.

mod dedup;
mod error;
mod flag;
mod measure;
mod param_set;
mod range;
mod space;
mod stats;
mod value;

pub use dedup::{unique, unique_within};
pub use error::SpaceError;
pub use flag::{Flag, UnknownFlag};
pub use measure::{DistanceMeasure, MeasureKind, Transform};
pub use param_set::ParamSet;
pub use range::{incremental_range, incremental_range_int, linear_range, linear_range_int};
pub use space::{Axis, Candidate, ParamSpace};
pub use stats::{population_std_dev, DatasetStats, SummaryStats};
pub use value::ParamValue;
