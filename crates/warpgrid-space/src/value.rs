//! Candidate values held by parameter space axes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::measure::DistanceMeasure;

/// A single candidate value on an axis.
///
/// Floats compare with exact `==`, so values differing only by rounding noise
/// are distinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamValue {
    /// An integer parameter such as a window size.
    Int(i64),
    /// A real-valued parameter.
    Float(f64),
    /// A distance-measure handle.
    Measure(DistanceMeasure),
}

impl ParamValue {
    /// Return the integer, if this is an [`ParamValue::Int`].
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Return the value as a float. Integers are widened.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Measure(_) => None,
        }
    }

    /// Return the measure handle, if this is a [`ParamValue::Measure`].
    #[must_use]
    pub fn as_measure(&self) -> Option<&DistanceMeasure> {
        match self {
            Self::Measure(m) => Some(m),
            _ => None,
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<DistanceMeasure> for ParamValue {
    fn from(m: DistanceMeasure) -> Self {
        Self::Measure(m)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Measure(m) => write!(f, "{m}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::MeasureKind;

    #[test]
    fn accessors() {
        assert_eq!(ParamValue::Int(3).as_int(), Some(3));
        assert_eq!(ParamValue::Int(3).as_float(), Some(3.0));
        assert_eq!(ParamValue::Float(0.5).as_int(), None);
        let m = ParamValue::from(DistanceMeasure::new(MeasureKind::Msm));
        assert_eq!(m.as_measure().map(|m| m.name()), Some("MSM"));
        assert_eq!(m.as_float(), None);
    }

    #[test]
    fn float_equality_is_exact() {
        assert_ne!(ParamValue::Float(0.1 + 0.2), ParamValue::Float(0.3));
    }

    #[test]
    fn display() {
        assert_eq!(ParamValue::Int(-1).to_string(), "-1");
        assert_eq!(ParamValue::Float(0.25).to_string(), "0.25");
        assert_eq!(ParamValue::from(DistanceMeasure::new(MeasureKind::Erp)).to_string(), "ERP");
    }
}
