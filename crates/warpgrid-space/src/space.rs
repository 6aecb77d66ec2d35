//! The nested, named, multi-valued discrete parameter space.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::SpaceError;
use crate::flag::Flag;
use crate::param_set::ParamSet;
use crate::value::ParamValue;

/// One candidate on an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Candidate {
    /// A value with no further parameters.
    Plain(ParamValue),
    /// A value whose selection opens a nested space of further axes.
    Conditioned {
        /// The conditioning value.
        value: ParamValue,
        /// Axes that only exist when `value` is selected.
        space: ParamSpace,
    },
}

impl Candidate {
    /// Return the candidate value.
    #[must_use]
    pub fn value(&self) -> &ParamValue {
        match self {
            Self::Plain(value) | Self::Conditioned { value, .. } => value,
        }
    }

    /// Return the nested space, if this candidate is conditioned.
    #[must_use]
    pub fn nested(&self) -> Option<&ParamSpace> {
        match self {
            Self::Plain(_) => None,
            Self::Conditioned { space, .. } => Some(space),
        }
    }

    /// Number of configurations this candidate contributes to its axis, or
    /// `None` on overflow.
    fn checked_size(&self) -> Option<usize> {
        match self {
            Self::Plain(_) => Some(1),
            Self::Conditioned { space, .. } => space.checked_size(),
        }
    }

    fn size(&self) -> usize {
        self.checked_size().unwrap_or(usize::MAX)
    }
}

/// A named axis and its ordered, non-empty candidate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    flag: Flag,
    candidates: Vec<Candidate>,
}

impl Axis {
    /// Return the axis name.
    #[must_use]
    pub fn flag(&self) -> Flag {
        self.flag
    }

    /// Return the candidates in insertion order.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Iterate over the candidate values, ignoring any nested spaces.
    pub fn values(&self) -> impl Iterator<Item = &ParamValue> {
        self.candidates.iter().map(Candidate::value)
    }

    /// Number of configurations spanned by this axis, nested spaces included.
    ///
    /// Axes of a constructed [`ParamSpace`] never overflow; see
    /// [`SpaceError::TooManyConfigurations`].
    #[must_use]
    pub fn size(&self) -> usize {
        self.checked_size().unwrap_or(usize::MAX)
    }

    fn checked_size(&self) -> Option<usize> {
        self.candidates
            .iter()
            .try_fold(0usize, |acc, c| acc.checked_add(c.checked_size()?))
    }
}

/// An ordered set of axes, each with candidate values, some of which may open
/// nested spaces.
///
/// Built by chaining [`ParamSpace::add`], [`ParamSpace::add_conditioned`] and
/// [`ParamSpace::add_candidates`]. Each consumes the space, so a failed call
/// never leaves a partially built space behind.
///
/// # Traversal
///
/// The configurations are the cross product of all axes, with the first axis
/// outermost. A conditioned candidate expands into one configuration per
/// configuration of its nested space, whose axes are placed directly after the
/// conditioned axis. A space with no axes has a single empty configuration.
///
/// The number of configurations always fits in a `usize`: an axis that would
/// overflow it is rejected when added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSpace")]
pub struct ParamSpace {
    axes: Vec<Axis>,
}

impl ParamSpace {
    /// Create an empty space.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an axis with the given candidate values.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SpaceError::DuplicateAxis`] | `flag` is already present at this level |
    /// | [`SpaceError::EmptyAxis`] | `values` is empty |
    /// | [`SpaceError::TooManyConfigurations`] | the configuration count overflows `usize` |
    pub fn add<V, I>(self, flag: Flag, values: I) -> Result<Self, SpaceError>
    where
        V: Into<ParamValue>,
        I: IntoIterator<Item = V>,
    {
        let candidates = values
            .into_iter()
            .map(|v| Candidate::Plain(v.into()))
            .collect();
        self.push_axis(Axis { flag, candidates })
    }

    /// Append an axis whose last candidate opens `nested`.
    ///
    /// `values` must hold exactly one value; it is the conditioned candidate.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SpaceError::DuplicateAxis`] | `flag` is already present at this level |
    /// | [`SpaceError::EmptyAxis`] | `values` is empty |
    /// | [`SpaceError::AmbiguousCondition`] | `values` holds more than one value |
    /// | [`SpaceError::TooManyConfigurations`] | the configuration count overflows `usize` |
    pub fn add_conditioned<V, I>(
        self,
        flag: Flag,
        values: I,
        nested: ParamSpace,
    ) -> Result<Self, SpaceError>
    where
        V: Into<ParamValue>,
        I: IntoIterator<Item = V>,
    {
        if self.axis(flag).is_some() {
            return Err(SpaceError::DuplicateAxis { flag });
        }
        let mut values: Vec<ParamValue> = values.into_iter().map(Into::into).collect();
        let n_candidates = values.len();
        if n_candidates > 1 {
            return Err(SpaceError::AmbiguousCondition { flag, n_candidates });
        }
        let candidates = values
            .pop()
            .map(|value| Candidate::Conditioned {
                value,
                space: nested,
            })
            .into_iter()
            .collect();
        self.push_axis(Axis { flag, candidates })
    }

    /// Append an axis from explicit candidates, plain and conditioned mixed.
    ///
    /// Each conditioned candidate owns its nested space, so several candidates
    /// on one axis may open different spaces.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SpaceError::DuplicateAxis`] | `flag` is already present at this level |
    /// | [`SpaceError::EmptyAxis`] | `candidates` is empty |
    /// | [`SpaceError::TooManyConfigurations`] | the configuration count overflows `usize` |
    pub fn add_candidates<I>(self, flag: Flag, candidates: I) -> Result<Self, SpaceError>
    where
        I: IntoIterator<Item = Candidate>,
    {
        self.push_axis(Axis {
            flag,
            candidates: candidates.into_iter().collect(),
        })
    }

    fn push_axis(mut self, axis: Axis) -> Result<Self, SpaceError> {
        let flag = axis.flag;
        if self.axis(flag).is_some() {
            return Err(SpaceError::DuplicateAxis { flag });
        }
        let n_candidates = axis.candidates.len();
        if n_candidates == 0 {
            return Err(SpaceError::EmptyAxis { flag });
        }
        let size = axis
            .checked_size()
            .and_then(|axis_size| self.checked_size()?.checked_mul(axis_size))
            .ok_or(SpaceError::TooManyConfigurations { flag })?;
        trace!(%flag, n_candidates, size, "axis added");
        self.axes.push(axis);
        Ok(self)
    }

    /// Return the axes in insertion order.
    #[must_use]
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Return the axis named `flag` at this level, if present.
    #[must_use]
    pub fn axis(&self, flag: Flag) -> Option<&Axis> {
        self.axes.iter().find(|a| a.flag == flag)
    }

    /// Return the number of axes at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Return true if this level has no axes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Number of configurations, nested spaces included.
    #[must_use]
    pub fn size(&self) -> usize {
        self.checked_size().unwrap_or(usize::MAX)
    }

    fn checked_size(&self) -> Option<usize> {
        self.axes
            .iter()
            .try_fold(1usize, |acc, a| acc.checked_mul(a.checked_size()?))
    }

    /// Return the configuration at `index`, or `None` if `index >= self.size()`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<ParamSet> {
        if index >= self.size() {
            return None;
        }
        let mut set = ParamSet::default();
        self.fill(index, &mut set);
        Some(set)
    }

    /// Iterate over every configuration in index order.
    pub fn configurations(&self) -> impl Iterator<Item = ParamSet> + '_ {
        (0..self.size()).filter_map(move |i| self.get(i))
    }

    /// Write the configuration at `index` into `set`. `index` must be in range.
    fn fill(&self, index: usize, set: &mut ParamSet) {
        // Mixed-radix decomposition, last axis varying fastest.
        let mut locals = vec![0usize; self.axes.len()];
        let mut rem = index;
        for (slot, axis) in locals.iter_mut().zip(&self.axes).rev() {
            let radix = axis.size();
            *slot = rem % radix;
            rem /= radix;
        }

        for (axis, mut local) in self.axes.iter().zip(locals) {
            for candidate in &axis.candidates {
                let width = candidate.size();
                if local >= width {
                    local -= width;
                    continue;
                }
                set.push(axis.flag, candidate.value().clone());
                if let Some(nested) = candidate.nested() {
                    nested.fill(local, set);
                }
                break;
            }
        }
    }
}

impl fmt::Display for ParamSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, axis) in self.axes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: [", axis.flag)?;
            for (j, candidate) in axis.candidates.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", candidate.value())?;
                if let Some(nested) = candidate.nested() {
                    write!(f, " {nested}")?;
                }
            }
            f.write_str("]")?;
        }
        f.write_str("}")
    }
}

/// Unvalidated wire form of [`ParamSpace`]. Every axis is re-checked on load.
#[derive(Deserialize)]
struct RawSpace {
    axes: Vec<Axis>,
}

impl TryFrom<RawSpace> for ParamSpace {
    type Error = SpaceError;

    fn try_from(raw: RawSpace) -> Result<Self, Self::Error> {
        raw.axes
            .into_iter()
            .try_fold(ParamSpace::new(), ParamSpace::push_axis)
    }
}
