//! Axis names shared by every parameter space.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Name of a parameter space axis.
///
/// The string forms are stable: persisted search results are keyed on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flag {
    /// The distance measure itself.
    DistanceMeasure,
    /// Warping window or band size, in time steps. `-1` means unconstrained.
    WindowSize,
    /// LCSS matching threshold.
    Epsilon,
    /// WDTW weight-curve steepness, or ERP gap penalty.
    G,
    /// TWE edit penalty.
    Lambda,
    /// TWE stiffness.
    Nu,
    /// MSM split/merge cost.
    Cost,
}

impl Flag {
    /// Every flag, in declaration order.
    pub const ALL: [Flag; 7] = [
        Flag::DistanceMeasure,
        Flag::WindowSize,
        Flag::Epsilon,
        Flag::G,
        Flag::Lambda,
        Flag::Nu,
        Flag::Cost,
    ];

    /// Return the stable string form of this flag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DistanceMeasure => "distance-measure",
            Self::WindowSize => "window-size",
            Self::Epsilon => "epsilon",
            Self::G => "g",
            Self::Lambda => "lambda",
            Self::Nu => "nu",
            Self::Cost => "cost",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known [`Flag`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown axis flag \"{0}\"")]
pub struct UnknownFlag(pub String);

impl FromStr for Flag {
    type Err = UnknownFlag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.as_str() == s)
            .ok_or_else(|| UnknownFlag(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_forms_are_stable() {
        assert_eq!(Flag::WindowSize.as_str(), "window-size");
        assert_eq!(Flag::Epsilon.as_str(), "epsilon");
        assert_eq!(Flag::G.as_str(), "g");
        assert_eq!(Flag::Lambda.as_str(), "lambda");
        assert_eq!(Flag::Nu.as_str(), "nu");
        assert_eq!(Flag::Cost.as_str(), "cost");
        assert_eq!(Flag::DistanceMeasure.as_str(), "distance-measure");
    }

    #[test]
    fn parse_matches_display() {
        for flag in Flag::ALL {
            assert_eq!(flag.to_string().parse::<Flag>(), Ok(flag));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!("window".parse::<Flag>(), Err(UnknownFlag("window".into())));
    }

    #[test]
    fn serde_uses_string_form() {
        let json = serde_json::to_string(&Flag::WindowSize).unwrap();
        assert_eq!(json, "\"window-size\"");
        let back: Flag = serde_json::from_str("\"distance-measure\"").unwrap();
        assert_eq!(back, Flag::DistanceMeasure);
    }
}
