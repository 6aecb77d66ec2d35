//! Parameter space catalogue for elastic time series distance measures.
//!
//! Each supported measure (ED, DTW, DDTW, WDTW, WDDTW, LCSS, ERP, TWE, MSM) has
//! a params builder and a space builder. Data-driven grids take their bounds
//! from a [`DatasetStats`](warpgrid_space::DatasetStats); the rest are fixed.
//! The [`entries`] table maps stable ids to those builder pairs.

mod builders;
mod error;
pub mod measures;
mod registry;
mod tables;

pub use builders::{
    ddtw_params, ddtw_space, dtw_params, dtw_space, ed_params, ed_space, erp_params, erp_space,
    full_ddtw_space, full_dtw_params, full_dtw_space, lcss_params, lcss_space, msm_params,
    msm_space, twe_params, twe_space, wddtw_params, wddtw_space, wdtw_params, wdtw_space, Era,
    DTW_WINDOW_COUNT, FULL_WINDOW, LCSS_ERP_COUNT,
};
pub use error::CatalogueError;
pub use registry::{entries, lookup, Builder, Entry};
pub use tables::{MSM_COST, TWE_LAMBDA, TWE_NU};
