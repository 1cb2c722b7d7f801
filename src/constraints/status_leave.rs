//! Status-driven full-horizon leave (hard only).

use good_lp::constraint;

use crate::error::BuildError;
use crate::model::ModelBuilder;
use crate::rules::StatusLeaveRule;

const RULE: &str = "status_leave";

/// Pins every day of a matching employee to the leave shift. An unresolvable
/// leave shift is a fatal configuration error.
pub(crate) fn apply(builder: &mut ModelBuilder, rule: &StatusLeaveRule) -> Result<(), BuildError> {
    let leave_shift = builder
        .shifts
        .position(&rule.leave_shift_name)
        .ok_or_else(|| BuildError::UnknownLeaveShift(rule.leave_shift_name.clone()))?;

    if let Some(ids) = &rule.target_employees {
        for id in ids {
            if builder.roster.position(id).is_none() {
                builder
                    .report_mut()
                    .warn(RULE, format!("unknown employee id {id:?} in target_employees"));
            }
        }
    }

    for employee in 0..builder.roster.len() {
        let record = builder.roster.get(employee);
        let on_leave = record
            .status
            .as_ref()
            .is_some_and(|status| rule.status_values_for_full_leave.contains(status));
        if !on_leave {
            continue;
        }
        if let Some(ids) = &rule.target_employees {
            if !ids.contains(&record.id) {
                continue;
            }
        }
        let id = record.id.clone();
        for day in 0..builder.horizon.len() {
            let cell = builder.assignment(employee, day, leave_shift);
            builder.push_constraint(constraint!(cell == 1));
        }
        builder
            .report_mut()
            .info(RULE, format!("employee {id} placed on full-horizon leave"));
    }
    Ok(())
}
