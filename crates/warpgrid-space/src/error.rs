//! Error types for parameter space construction.

use crate::flag::Flag;

/// Errors from building a [`ParamSpace`](crate::ParamSpace).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpaceError {
    /// Returned when an axis name is already present at the same level.
    #[error("axis \"{flag}\" is already present in this space")]
    DuplicateAxis {
        /// The repeated axis.
        flag: Flag,
    },

    /// Returned when an axis is given no candidate values.
    #[error("axis \"{flag}\" must have at least one candidate value")]
    EmptyAxis {
        /// The axis with no candidates.
        flag: Flag,
    },

    /// Returned when a nested space is paired with more than one candidate,
    /// leaving the conditioned candidate ambiguous.
    #[error("axis \"{flag}\" has {n_candidates} candidates; a nested space needs exactly one")]
    AmbiguousCondition {
        /// The axis carrying the nested space.
        flag: Flag,
        /// Number of candidates that were supplied.
        n_candidates: usize,
    },

    /// Returned when adding an axis would make the number of configurations
    /// exceed `usize::MAX`.
    #[error("adding axis \"{flag}\" makes the configuration count overflow usize")]
    TooManyConfigurations {
        /// The axis that was being added.
        flag: Flag,
    },
}
