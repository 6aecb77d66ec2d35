//! Lookup table from measure id to its params and space builders.

use std::fmt;

use warpgrid_space::{DatasetStats, ParamSpace};

use crate::builders::{self, Era};
use crate::error::CatalogueError;

/// A builder taking dataset statistics. Builders for fixed grids ignore them.
pub type Builder = fn(&dyn DatasetStats) -> Result<ParamSpace, CatalogueError>;

/// A registered measure: a stable id plus its two builders.
#[derive(Clone, Copy)]
pub struct Entry {
    id: &'static str,
    params: Builder,
    space: Builder,
}

impl Entry {
    /// Return the stable id, e.g. `"dtw-v2"`.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Build the measure's own axes.
    ///
    /// # Errors
    ///
    /// Propagates the builder's [`CatalogueError`].
    pub fn params(&self, stats: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
        (self.params)(stats)
    }

    /// Build the tuner-ready space with the `distance-measure` axis on top.
    ///
    /// # Errors
    ///
    /// Propagates the builder's [`CatalogueError`].
    pub fn space(&self, stats: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
        (self.space)(stats)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry").field("id", &self.id).finish_non_exhaustive()
    }
}

fn ed_params(_: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::ed_params()
}

fn ed_space(_: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::ed_space()
}

fn full_dtw_params(_: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::full_dtw_params()
}

fn full_dtw_space(_: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::full_dtw_space()
}

fn full_ddtw_space(_: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::full_ddtw_space()
}

fn dtw_v1_params(stats: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::dtw_params(stats, Era::V1)
}

fn dtw_v1_space(stats: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::dtw_space(stats, Era::V1)
}

fn dtw_v2_params(stats: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::dtw_params(stats, Era::V2)
}

fn dtw_v2_space(stats: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::dtw_space(stats, Era::V2)
}

fn ddtw_v1_space(stats: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::ddtw_space(stats, Era::V1)
}

fn ddtw_v2_space(stats: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::ddtw_space(stats, Era::V2)
}

fn wdtw_v1_params(_: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::wdtw_params(Era::V1)
}

fn wdtw_v1_space(_: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::wdtw_space(Era::V1)
}

fn wdtw_v2_params(_: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::wdtw_params(Era::V2)
}

fn wdtw_v2_space(_: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::wdtw_space(Era::V2)
}

fn wddtw_v1_space(_: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::wddtw_space(Era::V1)
}

fn wddtw_v2_space(_: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::wddtw_space(Era::V2)
}

fn twe_params(_: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::twe_params()
}

fn twe_space(_: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::twe_space()
}

fn msm_params(_: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::msm_params()
}

fn msm_space(_: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    builders::msm_space()
}

// Derivative variants share their base measure's params builder.
static CATALOGUE: [Entry; 15] = [
    Entry { id: "ed", params: ed_params, space: ed_space },
    Entry { id: "full-dtw", params: full_dtw_params, space: full_dtw_space },
    Entry { id: "full-ddtw", params: full_dtw_params, space: full_ddtw_space },
    Entry { id: "dtw-v1", params: dtw_v1_params, space: dtw_v1_space },
    Entry { id: "dtw-v2", params: dtw_v2_params, space: dtw_v2_space },
    Entry { id: "ddtw-v1", params: dtw_v1_params, space: ddtw_v1_space },
    Entry { id: "ddtw-v2", params: dtw_v2_params, space: ddtw_v2_space },
    Entry { id: "wdtw-v1", params: wdtw_v1_params, space: wdtw_v1_space },
    Entry { id: "wdtw-v2", params: wdtw_v2_params, space: wdtw_v2_space },
    Entry { id: "wddtw-v1", params: wdtw_v1_params, space: wddtw_v1_space },
    Entry { id: "wddtw-v2", params: wdtw_v2_params, space: wddtw_v2_space },
    Entry { id: "lcss", params: builders::lcss_params, space: builders::lcss_space },
    Entry { id: "erp", params: builders::erp_params, space: builders::erp_space },
    Entry { id: "twe", params: twe_params, space: twe_space },
    Entry { id: "msm", params: msm_params, space: msm_space },
];

/// Every registered measure, in catalogue order.
#[must_use]
pub fn entries() -> &'static [Entry] {
    &CATALOGUE
}

/// Find the entry registered under `id`.
///
/// # Errors
///
/// Returns [`CatalogueError::UnknownMeasure`] if no entry has that id.
pub fn lookup(id: &str) -> Result<&'static Entry, CatalogueError> {
    CATALOGUE
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| CatalogueError::UnknownMeasure {
            id: id.to_string(),
            expected: CATALOGUE.iter().map(|e| e.id).collect::<Vec<_>>().join(", "),
        })
}
