//! Versioned JSON envelope for persisted parameter spaces.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use warpgrid_space::ParamSpace;

use crate::IoError;

/// Current artifact format version.
pub const FORMAT_VERSION: u32 = 1;

/// A parameter space together with the catalogue id it was built from.
///
/// Axis names are stored in their stable string form, so a reloaded space
/// compares equal to the one that was saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceArtifact {
    /// Format version for compatibility checking.
    format_version: u32,
    /// Catalogue id of the measure, e.g. `"lcss"`.
    measure: String,
    /// Number of configurations in `space`, recorded for quick inspection.
    n_configurations: usize,
    /// The space itself.
    space: ParamSpace,
}

impl SpaceArtifact {
    /// Wrap `space` built for `measure` in a current-version envelope.
    #[must_use]
    pub fn new(measure: impl Into<String>, space: ParamSpace) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            measure: measure.into(),
            n_configurations: space.size(),
            space,
        }
    }

    /// Return the catalogue id.
    #[must_use]
    pub fn measure(&self) -> &str {
        &self.measure
    }

    /// Return the number of configurations recorded at save time.
    #[must_use]
    pub fn n_configurations(&self) -> usize {
        self.n_configurations
    }

    /// Return the space.
    #[must_use]
    pub fn space(&self) -> &ParamSpace {
        &self.space
    }

    /// Consume the artifact and return the space.
    #[must_use]
    pub fn into_space(self) -> ParamSpace {
        self.space
    }

    /// Save the artifact as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`IoError::SerializeSpace`] | JSON encoding failed |
    /// | [`IoError::WriteFile`] | file write failed |
    #[instrument(skip_all, fields(measure = %self.measure, path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let path = path.as_ref();

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| IoError::SerializeSpace { source: e })?;

        std::fs::write(path, &json).map_err(|e| IoError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        info!(
            size_bytes = json.len(),
            n_configurations = self.n_configurations,
            "space saved"
        );
        Ok(())
    }

    /// Load an artifact, re-validating the space.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`IoError::ReadFile`] | file read failed |
    /// | [`IoError::DeserializeSpace`] | not valid JSON, or the space breaks an invariant |
    /// | [`IoError::IncompatibleFormatVersion`] | format version mismatch |
    /// | [`IoError::ConfigurationCountMismatch`] | recorded count differs from the space size |
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| IoError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let artifact: SpaceArtifact =
            serde_json::from_str(&json).map_err(|e| IoError::DeserializeSpace {
                path: path.to_path_buf(),
                source: e,
            })?;

        if artifact.format_version != FORMAT_VERSION {
            return Err(IoError::IncompatibleFormatVersion {
                expected: FORMAT_VERSION,
                found: artifact.format_version,
                path: path.to_path_buf(),
            });
        }

        let actual = artifact.space.size();
        if artifact.n_configurations != actual {
            return Err(IoError::ConfigurationCountMismatch {
                path: path.to_path_buf(),
                recorded: artifact.n_configurations,
                actual,
            });
        }

        debug!(
            measure = %artifact.measure,
            n_configurations = artifact.n_configurations,
            "space loaded"
        );
        Ok(artifact)
    }
}
