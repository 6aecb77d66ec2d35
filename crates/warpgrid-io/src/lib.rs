//! Dataset reading and parameter space persistence for warpgrid.

mod artifact;
mod domain;
mod error;
mod reader;
mod writer;

pub use artifact::{SpaceArtifact, FORMAT_VERSION};
pub use domain::{ExperimentName, LabelledDataset};
pub use error::IoError;
pub use reader::DatasetReader;
pub use writer::SpaceWriter;
