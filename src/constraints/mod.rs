//! Rule compilers.
//!
//! One module per rule family; each consumes the builder plus its rule
//! collection and emits constraints and penalty terms. Invalid rules are
//! skipped with a warning, no-op rules with an info entry; only structural
//! problems (see [`crate::error::BuildError`]) abort the build.

pub(crate) mod balance;
pub(crate) mod consecutive;
pub(crate) mod days_off;
pub(crate) mod pair_avoidance;
pub(crate) mod requests;
pub(crate) mod sequence;
pub(crate) mod staffing;
pub(crate) mod status_leave;
pub(crate) mod weekend_holiday;
pub(crate) mod workdays;
