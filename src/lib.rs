//! Constraint-model builder for care facility shift scheduling.
//!
//! Given a shift alphabet, a date horizon, an employee roster and a
//! declarative [`rules::RuleSet`], [`build_schedule_model`] compiles ten rule
//! families into a linear model over a binary assignment grid: hard rules
//! become inviolable constraints, soft rules become slack variables with
//! weighted penalty terms in a minimisation objective. The result is handed
//! to a `good_lp` backend by [`solver::solve`], which decodes the optimal
//! assignment into a per-employee shift table.
//!
//! Invalid rules are skipped with a warning in the build report rather than
//! failing the build; only structural problems (missing day-off shift, empty
//! roster or horizon) are fatal.

pub mod builder;
pub mod demo_data;
pub mod domain;
pub mod error;
pub mod model;
pub mod report;
pub mod rules;
pub mod solver;

pub(crate) mod constraints;

#[cfg(test)]
pub(crate) mod test_util;

pub use builder::build_schedule_model;
pub use error::{BuildError, SolveError};
pub use model::{PenaltyTerm, ScheduleModel, VariableGrid};
pub use report::{BuildReport, Diagnostic, Severity};
pub use rules::RuleSet;
pub use solver::{solve, SolvedSchedule};
