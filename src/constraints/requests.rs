//! Individual shift requests.

use good_lp::{constraint, Expression};

use crate::model::ModelBuilder;
use crate::rules::{ConstraintType, ShiftRequestRule};

const RULE: &str = "shift_request";

pub(crate) fn apply(builder: &mut ModelBuilder, rules: &[ShiftRequestRule]) {
    for rule in rules {
        let Some(employee) = builder.roster.position(&rule.employee_id) else {
            builder.report_mut().warn(
                RULE,
                format!("unknown employee id {:?}; request skipped", rule.employee_id),
            );
            continue;
        };
        let Some(day) = builder.horizon.position(rule.date) else {
            builder.report_mut().warn(
                RULE,
                format!("date {} is outside the horizon; request skipped", rule.date),
            );
            continue;
        };
        let Some(shift) = builder.shifts.position(&rule.requested_shift) else {
            builder.report_mut().warn(
                RULE,
                format!("unknown shift {:?}; request skipped", rule.requested_shift),
            );
            continue;
        };

        let cell = builder.assignment(employee, day, shift);
        match rule.constraint_type {
            ConstraintType::Hard => builder.push_constraint(constraint!(cell == 1)),
            ConstraintType::Soft => {
                if rule.penalty_weight == 0 {
                    builder.report_mut().info(
                        RULE,
                        format!(
                            "soft request for {} on {} has zero weight; no effect",
                            rule.employee_id, rule.date
                        ),
                    );
                    continue;
                }
                let miss = builder.new_bool_var();
                builder.push_constraint(constraint!(miss + cell == 1));
                builder.push_penalty(
                    Expression::from(miss),
                    rule.penalty_weight,
                    format!(
                        "request {} {} {}",
                        rule.employee_id, rule.date, rule.requested_shift
                    ),
                );
            }
        }
    }
}
