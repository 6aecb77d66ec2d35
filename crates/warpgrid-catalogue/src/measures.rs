//! Constructors for the distance-measure handles the catalogue places on the
//! `distance-measure` axis.

use warpgrid_space::{DistanceMeasure, MeasureKind, Transform};

/// Euclidean distance.
#[must_use]
pub fn euclidean() -> DistanceMeasure {
    DistanceMeasure::new(MeasureKind::Euclidean)
}

/// Dynamic Time Warping.
#[must_use]
pub fn dtw() -> DistanceMeasure {
    DistanceMeasure::new(MeasureKind::Dtw)
}

/// DTW over the first derivative of each series.
#[must_use]
pub fn ddtw() -> DistanceMeasure {
    DistanceMeasure::transformed("DDTW", Transform::Derivative, MeasureKind::Dtw)
}

/// Weighted DTW.
#[must_use]
pub fn wdtw() -> DistanceMeasure {
    DistanceMeasure::new(MeasureKind::Wdtw)
}

/// Weighted DTW over the first derivative of each series.
#[must_use]
pub fn wddtw() -> DistanceMeasure {
    DistanceMeasure::transformed("WDDTW", Transform::Derivative, MeasureKind::Wdtw)
}

/// Longest Common Subsequence.
#[must_use]
pub fn lcss() -> DistanceMeasure {
    DistanceMeasure::new(MeasureKind::Lcss)
}

/// Edit distance with Real Penalty.
#[must_use]
pub fn erp() -> DistanceMeasure {
    DistanceMeasure::new(MeasureKind::Erp)
}

/// Time Warp Edit distance.
#[must_use]
pub fn twe() -> DistanceMeasure {
    DistanceMeasure::new(MeasureKind::Twe)
}

/// Move-Split-Merge.
#[must_use]
pub fn msm() -> DistanceMeasure {
    DistanceMeasure::new(MeasureKind::Msm)
}
