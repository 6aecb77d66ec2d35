//! Opaque distance-measure handles placed on the `distance-measure` axis.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The underlying elastic distance algorithm a handle refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasureKind {
    /// Lock-step Euclidean distance.
    Euclidean,
    /// Dynamic Time Warping.
    Dtw,
    /// Weighted Dynamic Time Warping.
    Wdtw,
    /// Longest Common Subsequence.
    Lcss,
    /// Edit distance with Real Penalty.
    Erp,
    /// Time Warp Edit distance.
    Twe,
    /// Move-Split-Merge.
    Msm,
}

impl MeasureKind {
    /// Return the conventional display name of the plain measure.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Euclidean => "ED",
            Self::Dtw => "DTW",
            Self::Wdtw => "WDTW",
            Self::Lcss => "LCSS",
            Self::Erp => "ERP",
            Self::Twe => "TWE",
            Self::Msm => "MSM",
        }
    }
}

/// A unary series transform applied before the base measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
    /// First derivative of the series.
    Derivative,
}

/// An immutable, named reference to a distance measure.
///
/// Handles are never executed here. Two handles are equal when their names are
/// equal, regardless of how they were composed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceMeasure {
    name: String,
    kind: MeasureKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    transform: Option<Transform>,
}

impl DistanceMeasure {
    /// Handle for a plain measure, named after its kind.
    #[must_use]
    pub fn new(kind: MeasureKind) -> Self {
        Self {
            name: kind.name().to_string(),
            kind,
            transform: None,
        }
    }

    /// Handle for `kind` applied to the output of `transform`, under a custom name.
    #[must_use]
    pub fn transformed(name: impl Into<String>, transform: Transform, kind: MeasureKind) -> Self {
        Self {
            name: name.into(),
            kind,
            transform: Some(transform),
        }
    }

    /// Return the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the base measure kind.
    #[must_use]
    pub fn kind(&self) -> MeasureKind {
        self.kind
    }

    /// Return the transform applied before the base measure, if any.
    #[must_use]
    pub fn transform(&self) -> Option<Transform> {
        self.transform
    }
}

impl PartialEq for DistanceMeasure {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for DistanceMeasure {}

impl fmt::Display for DistanceMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
