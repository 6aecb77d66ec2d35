//! Writes parameter space artifacts into an experiment directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use warpgrid_space::ParamSpace;

use crate::artifact::SpaceArtifact;
use crate::domain::ExperimentName;
use crate::IoError;

/// Writes one JSON artifact per measure.
///
/// Creates the output directory on construction if it does not exist.
/// Output files are named `{experiment}_{measure}_space.json`.
pub struct SpaceWriter {
    output_dir: PathBuf,
    experiment: ExperimentName,
}

impl SpaceWriter {
    /// Create a new writer targeting the given directory and experiment name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::OutputDirCreate`] if the directory cannot be created.
    #[instrument(skip_all, fields(dir = %output_dir.display(), experiment = %experiment))]
    pub fn new(output_dir: &Path, experiment: ExperimentName) -> Result<Self, IoError> {
        fs::create_dir_all(output_dir).map_err(|e| IoError::OutputDirCreate {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
        debug!("output directory ready");
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            experiment,
        })
    }

    /// Path the artifact for `measure` is written to.
    #[must_use]
    pub fn space_path(&self, measure: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_{measure}_space.json", self.experiment.as_str()))
    }

    /// Write `space` built for `measure` and return the file path.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`IoError::SerializeSpace`] | JSON encoding failed |
    /// | [`IoError::WriteFile`] | file write failed |
    pub fn write_space(&self, measure: &str, space: ParamSpace) -> Result<PathBuf, IoError> {
        let path = self.space_path(measure);
        SpaceArtifact::new(measure, space).save(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use warpgrid_space::Flag;

    use super::*;

    #[test]
    fn creates_nested_output_dir() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("a").join("b");
        let experiment = ExperimentName::new("exp".into()).unwrap();
        SpaceWriter::new(&out, experiment).unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn file_named_after_experiment_and_measure() {
        let dir = TempDir::new().unwrap();
        let experiment = ExperimentName::new("gunpoint".into()).unwrap();
        let writer = SpaceWriter::new(dir.path(), experiment).unwrap();
        let space = ParamSpace::new().add(Flag::Cost, [0.5]).unwrap();
        let path = writer.write_space("msm", space).unwrap();
        assert_eq!(path, dir.path().join("gunpoint_msm_space.json"));
        assert!(path.is_file());
    }
}
