//! Structured error taxonomy for the seating optimizer (spec §7).
//!
//! Every variant corresponds to exactly one row of the error table in the
//! specification. `ConstraintCapHit` is deliberately absent: it is a warning
//! carried on [`crate::diagnostics::Diagnostics`], never a failure outcome.

use thiserror::Error;

use crate::types::StudentId;

#[derive(Debug, Error)]
pub enum SeatingError {
    #[error("duplicate student id {0}")]
    DuplicateStudentId(StudentId),

    #[error("duplicate room id {0:?}")]
    DuplicateRoomId(String),

    #[error("room {0:?} has non-positive dimensions")]
    InvalidRoomDimensions(String),

    #[error("restriction for exam {exam:?} names unknown room {room:?}")]
    UnknownRestrictedRoom { exam: String, room: String },

    #[error("total usable seats ({available}) are fewer than the student count ({required})")]
    InsufficientCapacity { available: usize, required: usize },

    #[error(
        "exam {exam:?} is restricted to rooms with {available} usable seats but has {required} students"
    )]
    RestrictedInsufficientCapacity {
        exam: String,
        available: usize,
        required: usize,
    },

    #[error("solver timed out with no feasible solution after {elapsed_ms} ms")]
    SolverTimeout { elapsed_ms: u128 },

    #[error("solver proved the model infeasible")]
    SolverInfeasible,

    #[error("solver rejected the model as invalid")]
    SolverModelInvalid,

    #[error("solver response violated a post-solve invariant: {0}")]
    SolverInvariantViolated(String),
}

pub type SeatingResult<T> = Result<T, SeatingError>;
