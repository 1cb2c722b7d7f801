//! Error types for model building and solving.

use good_lp::ResolutionError;
use thiserror::Error;

/// Fatal configuration errors that abort a build.
///
/// Per-rule problems never end up here; those are downgraded to warnings in
/// the build report so that partial configurations still produce a model.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The shift alphabet is empty.
    #[error("shift alphabet is empty")]
    EmptyShiftSet,

    /// The same shift code appears twice in the alphabet.
    #[error("duplicate shift code {0:?} in shift alphabet")]
    DuplicateShift(String),

    /// The day-off shift is not part of the alphabet.
    #[error("shift alphabet does not contain the day-off shift {0:?}")]
    MissingOffShift(String),

    /// A working-shift code does not resolve against the alphabet.
    #[error("working shift {0:?} is not in the shift alphabet")]
    UnknownWorkingShift(String),

    /// A status-leave rule names a leave shift outside the alphabet.
    #[error("leave shift {0:?} is not in the shift alphabet")]
    UnknownLeaveShift(String),

    /// The employee roster is empty.
    #[error("employee roster is empty")]
    EmptyRoster,

    /// The planning horizon contains no dates.
    #[error("planning horizon is empty")]
    EmptyHorizon,

    /// A date range runs backwards.
    #[error("start date {start} is after end date {end}")]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}

/// Errors surfaced when handing a built model to the backend solver.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The backend rejected the model or found it infeasible/unbounded.
    #[error("solver failed: {0}")]
    Resolution(#[from] ResolutionError),

    /// A solution came back without exactly one shift per employee-day cell.
    #[error("no unique shift assignment for employee {employee} on {date}")]
    AmbiguousCell {
        employee: String,
        date: chrono::NaiveDate,
    },
}
