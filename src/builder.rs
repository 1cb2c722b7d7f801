//! Builder façade: validates inputs and sequences the rule compilers.

use crate::constraints;
use crate::domain::{Horizon, Roster, ShiftSet};
use crate::error::BuildError;
use crate::model::{ModelBuilder, ScheduleModel};
use crate::rules::RuleSet;

/// Builds the full scheduling model for the given inputs.
///
/// Structural problems (empty roster or horizon, an unresolvable leave
/// shift) abort with [`BuildError`]; per-rule problems are downgraded to
/// warnings in the returned report. The compilers run in a fixed order, with
/// the pure-fixing families first; the emitted model is the same set of
/// constraints regardless, so observable behaviour is order-independent.
///
/// # Examples
///
/// ```
/// let problem = shift_scheduling::demo_data::generate();
/// let model = shift_scheduling::build_schedule_model(
///     &problem.shifts,
///     &problem.horizon,
///     &problem.roster,
///     &problem.rules,
/// )
/// .unwrap();
/// assert!(model.report.variables_count > 0);
/// assert!(!model.report.has_warnings());
/// ```
pub fn build_schedule_model(
    shifts: &ShiftSet,
    horizon: &Horizon,
    roster: &Roster,
    rules: &RuleSet,
) -> Result<ScheduleModel, BuildError> {
    if roster.is_empty() {
        return Err(BuildError::EmptyRoster);
    }
    if horizon.is_empty() {
        return Err(BuildError::EmptyHorizon);
    }
    tracing::debug!(
        employees = roster.len(),
        days = horizon.len(),
        shifts = shifts.len(),
        "building schedule model"
    );

    let mut builder = ModelBuilder::new(shifts, horizon, roster);
    if let Some(rule) = &rules.status_leave {
        constraints::status_leave::apply(&mut builder, rule)?;
    }
    constraints::requests::apply(&mut builder, &rules.shift_requests);
    if let Some(rule) = &rules.weekend_holiday_off {
        constraints::weekend_holiday::apply(&mut builder, rule);
    }
    constraints::staffing::apply(&mut builder, &rules.staffing);
    constraints::days_off::apply(&mut builder, &rules.min_days_off);
    constraints::consecutive::apply(&mut builder, &rules.max_consecutive);
    constraints::sequence::apply(&mut builder, &rules.sequences);
    constraints::balance::apply(&mut builder, &rules.balance);
    constraints::pair_avoidance::apply(&mut builder, &rules.pair_avoidance);
    constraints::workdays::apply(&mut builder, &rules.total_workdays);

    Ok(builder.finish())
}
