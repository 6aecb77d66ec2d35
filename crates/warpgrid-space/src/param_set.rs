//! A single configuration drawn from a parameter space.

use std::fmt;

use serde::Serialize;

use crate::flag::Flag;
use crate::value::ParamValue;

/// One selected value per axis along a single traversal branch, in traversal
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParamSet(Vec<(Flag, ParamValue)>);

impl ParamSet {
    pub(crate) fn push(&mut self, flag: Flag, value: ParamValue) {
        self.0.push((flag, value));
    }

    /// Return the value selected for `flag`. The outermost match wins.
    #[must_use]
    pub fn get(&self, flag: Flag) -> Option<&ParamValue> {
        self.0.iter().find(|(f, _)| *f == flag).map(|(_, v)| v)
    }

    /// Iterate over `(flag, value)` pairs in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = &(Flag, ParamValue)> {
        self.0.iter()
    }

    /// Return the number of selected values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ParamSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (flag, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{flag}: {value}")?;
        }
        f.write_str("}")
    }
}
