//! Per-measure parameter space builders.
//!
//! Every measure has a `*_params` builder, returning the measure's own axes,
//! and a `*_space` builder, which wraps those axes under a single-candidate
//! `distance-measure` axis ready for a tuner. Derivative variants reuse the
//! params of their base measure, since the transform leaves the grid unchanged.

use tracing::{debug, instrument};
use warpgrid_space::{
    incremental_range, incremental_range_int, linear_range_int, unique, DatasetStats,
    DistanceMeasure, Flag, ParamSpace,
};

use crate::error::CatalogueError;
use crate::measures;
use crate::tables::{MSM_COST, TWE_LAMBDA, TWE_NU};

/// Number of window sizes generated for DTW-family grids, before deduplication.
pub const DTW_WINDOW_COUNT: usize = 100;

/// Number of values generated per LCSS/ERP axis, before deduplication.
pub const LCSS_ERP_COUNT: usize = 10;

/// Window size meaning "no constraint".
pub const FULL_WINDOW: i64 = -1;

/// Generation conventions for grids that have been revised over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Era {
    /// Incremental ranges that stop short of the upper bound; WDTW `g` over `[0, 0.99]`.
    V1,
    /// Bound-inclusive linear ranges; WDTW `g` over `[0, 1]`.
    #[default]
    V2,
}

fn wrap(measure: DistanceMeasure, params: ParamSpace) -> Result<ParamSpace, CatalogueError> {
    Ok(ParamSpace::new().add_conditioned(Flag::DistanceMeasure, [measure], params)?)
}

/// Largest warping window for the dataset: `series_length`, as an `i64`.
fn max_window(stats: &dyn DatasetStats) -> Result<i64, CatalogueError> {
    let length = stats.series_length();
    i64::try_from(length).map_err(|_| CatalogueError::SeriesTooLong { length })
}

fn checked_std_dev(stats: &dyn DatasetStats) -> Result<f64, CatalogueError> {
    let std_dev = stats.population_std_dev();
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(CatalogueError::InvalidStdDev { std_dev });
    }
    Ok(std_dev)
}

// --- Euclidean ---

/// `{window-size: [0]}`: Euclidean expressed as a zero-width warping window.
///
/// # Errors
///
/// Infallible in practice; returns [`CatalogueError::Space`] only if the space
/// could not be assembled.
pub fn ed_params() -> Result<ParamSpace, CatalogueError> {
    Ok(ParamSpace::new().add(Flag::WindowSize, [0i64])?)
}

/// `{distance-measure: [ED]}`, with no nested axes.
///
/// # Errors
///
/// See [`ed_params`].
pub fn ed_space() -> Result<ParamSpace, CatalogueError> {
    Ok(ParamSpace::new().add(Flag::DistanceMeasure, [measures::euclidean()])?)
}

// --- Full-window DTW / DDTW ---

/// `{window-size: [-1]}`: unconstrained warping.
///
/// # Errors
///
/// See [`ed_params`].
pub fn full_dtw_params() -> Result<ParamSpace, CatalogueError> {
    Ok(ParamSpace::new().add(Flag::WindowSize, [FULL_WINDOW])?)
}

/// DTW with an unconstrained window.
///
/// # Errors
///
/// See [`ed_params`].
pub fn full_dtw_space() -> Result<ParamSpace, CatalogueError> {
    wrap(measures::dtw(), full_dtw_params()?)
}

/// DDTW with an unconstrained window.
///
/// # Errors
///
/// See [`ed_params`].
pub fn full_ddtw_space() -> Result<ParamSpace, CatalogueError> {
    wrap(measures::ddtw(), full_dtw_params()?)
}

// --- Tunable DTW / DDTW ---

/// Window sizes from 0 to the series length, 100 steps, deduplicated.
///
/// [`Era::V1`] uses the incremental range (stops short of the series length);
/// [`Era::V2`] uses the bound-inclusive linear range. A dataset with no time
/// steps yields `{window-size: [0]}`.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`CatalogueError::SeriesTooLong`] | series length exceeds `i64::MAX` |
#[instrument(skip(stats), fields(attribute_count = stats.attribute_count()))]
pub fn dtw_params(stats: &dyn DatasetStats, era: Era) -> Result<ParamSpace, CatalogueError> {
    let upper = max_window(stats)?;
    let windows = match era {
        Era::V1 => incremental_range_int(0, upper, DTW_WINDOW_COUNT),
        Era::V2 => linear_range_int(0, upper, DTW_WINDOW_COUNT),
    };
    let windows = unique(&windows);
    debug!(n_windows = windows.len(), "window axis built");
    Ok(ParamSpace::new().add(Flag::WindowSize, windows)?)
}

/// DTW over the window grid of [`dtw_params`].
///
/// # Errors
///
/// See [`dtw_params`].
pub fn dtw_space(stats: &dyn DatasetStats, era: Era) -> Result<ParamSpace, CatalogueError> {
    wrap(measures::dtw(), dtw_params(stats, era)?)
}

/// Same grid as [`dtw_params`].
///
/// # Errors
///
/// See [`dtw_params`].
pub fn ddtw_params(stats: &dyn DatasetStats, era: Era) -> Result<ParamSpace, CatalogueError> {
    dtw_params(stats, era)
}

/// DDTW over the window grid of [`dtw_params`].
///
/// # Errors
///
/// See [`dtw_params`].
pub fn ddtw_space(stats: &dyn DatasetStats, era: Era) -> Result<ParamSpace, CatalogueError> {
    wrap(measures::ddtw(), ddtw_params(stats, era)?)
}

// --- WDTW / WDDTW ---

/// Weight-curve steepness `g = i / 100`.
///
/// [`Era::V1`] takes `i` in `0..100`, [`Era::V2`] takes `i` in `0..=100`.
///
/// # Errors
///
/// See [`ed_params`].
pub fn wdtw_params(era: Era) -> Result<ParamSpace, CatalogueError> {
    let n: u32 = match era {
        Era::V1 => 100,
        Era::V2 => 101,
    };
    let g: Vec<f64> = (0..n).map(|i| f64::from(i) / 100.0).collect();
    Ok(ParamSpace::new().add(Flag::G, unique(&g))?)
}

/// WDTW over the `g` grid of [`wdtw_params`].
///
/// # Errors
///
/// See [`ed_params`].
pub fn wdtw_space(era: Era) -> Result<ParamSpace, CatalogueError> {
    wrap(measures::wdtw(), wdtw_params(era)?)
}

/// Same grid as [`wdtw_params`].
///
/// # Errors
///
/// See [`ed_params`].
pub fn wddtw_params(era: Era) -> Result<ParamSpace, CatalogueError> {
    wdtw_params(era)
}

/// WDDTW over the `g` grid of [`wdtw_params`].
///
/// # Errors
///
/// See [`ed_params`].
pub fn wddtw_space(era: Era) -> Result<ParamSpace, CatalogueError> {
    wrap(measures::wddtw(), wddtw_params(era)?)
}

// --- LCSS / ERP ---

/// Threshold grid shared by LCSS `epsilon` and ERP `g`: 10 incremental steps
/// from `0.2 * sd` towards `sd`.
fn threshold_values(stats: &dyn DatasetStats) -> Result<Vec<f64>, CatalogueError> {
    let std_dev = checked_std_dev(stats)?;
    Ok(unique(&incremental_range(0.2 * std_dev, std_dev, LCSS_ERP_COUNT)))
}

/// Band grid shared by LCSS and ERP: 10 incremental steps from 0 towards a
/// quarter of the series length.
fn band_values(stats: &dyn DatasetStats) -> Result<Vec<i64>, CatalogueError> {
    let upper = max_window(stats)? / 4;
    Ok(unique(&incremental_range_int(0, upper, LCSS_ERP_COUNT)))
}

/// `{epsilon: .., window-size: ..}` scaled to the dataset.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`CatalogueError::InvalidStdDev`] | standard deviation is not finite and non-negative |
/// | [`CatalogueError::SeriesTooLong`] | series length exceeds `i64::MAX` |
#[instrument(skip(stats), fields(attribute_count = stats.attribute_count()))]
pub fn lcss_params(stats: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    let epsilons = threshold_values(stats)?;
    let windows = band_values(stats)?;
    debug!(n_epsilons = epsilons.len(), n_windows = windows.len(), "LCSS axes built");
    Ok(ParamSpace::new()
        .add(Flag::Epsilon, epsilons)?
        .add(Flag::WindowSize, windows)?)
}

/// LCSS over the grid of [`lcss_params`].
///
/// # Errors
///
/// See [`lcss_params`].
pub fn lcss_space(stats: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    wrap(measures::lcss(), lcss_params(stats)?)
}

/// `{window-size: .., g: ..}`: the LCSS ranges with band first and penalty second.
///
/// # Errors
///
/// See [`lcss_params`].
#[instrument(skip(stats), fields(attribute_count = stats.attribute_count()))]
pub fn erp_params(stats: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    let bands = band_values(stats)?;
    let penalties = threshold_values(stats)?;
    debug!(n_bands = bands.len(), n_penalties = penalties.len(), "ERP axes built");
    Ok(ParamSpace::new()
        .add(Flag::WindowSize, bands)?
        .add(Flag::G, penalties)?)
}

/// ERP over the grid of [`erp_params`].
///
/// # Errors
///
/// See [`lcss_params`].
pub fn erp_space(stats: &dyn DatasetStats) -> Result<ParamSpace, CatalogueError> {
    wrap(measures::erp(), erp_params(stats)?)
}

// --- TWE / MSM ---

/// `{lambda: .., nu: ..}` from the fixed TWE tables.
///
/// # Errors
///
/// See [`ed_params`].
pub fn twe_params() -> Result<ParamSpace, CatalogueError> {
    Ok(ParamSpace::new()
        .add(Flag::Lambda, unique(&TWE_LAMBDA))?
        .add(Flag::Nu, unique(&TWE_NU))?)
}

/// TWE over the grid of [`twe_params`].
///
/// # Errors
///
/// See [`ed_params`].
pub fn twe_space() -> Result<ParamSpace, CatalogueError> {
    wrap(measures::twe(), twe_params()?)
}

/// `{cost: ..}` from the fixed MSM table.
///
/// # Errors
///
/// See [`ed_params`].
pub fn msm_params() -> Result<ParamSpace, CatalogueError> {
    Ok(ParamSpace::new().add(Flag::Cost, unique(&MSM_COST))?)
}

/// MSM over the grid of [`msm_params`].
///
/// # Errors
///
/// See [`ed_params`].
pub fn msm_space() -> Result<ParamSpace, CatalogueError> {
    wrap(measures::msm(), msm_params()?)
}
