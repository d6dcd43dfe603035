//! Registry error types.
//!
//! Every registry operation returns a typed outcome; these are the
//! recoverable failure kinds. None of them is fatal to the process, and
//! none is ever encoded as an in-band sentinel value. The shell decides
//! user-facing wording; the registry only classifies.

use super::{InvalidConstraint, TrainId};

/// Failure kinds for registry operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// No record matches the requested train id
    #[error("no train with id {0}")]
    NotFound(TrainId),

    /// Constraint name outside the supported set
    #[error(transparent)]
    InvalidConstraint(#[from] InvalidConstraint),

    /// Travel time requested for a cancelled train (zero speed)
    #[error("train {0} has speed 0, travel time is undefined")]
    DivisionByZero(TrainId),

    /// Structural precondition violated on the record itself
    #[error("invalid record state: {0}")]
    InvalidRecordState(&'static str),
}
