//! Sequential shift rules: `A` today forces (or prefers) `B` tomorrow.

use good_lp::{constraint, Expression};

use crate::model::ModelBuilder;
use crate::rules::{ConstraintType, SequenceRule};

const RULE: &str = "sequence";

pub(crate) fn apply(builder: &mut ModelBuilder, rules: &[SequenceRule]) {
    for rule in rules {
        let Some(previous) = builder.shifts.position(&rule.previous_shift_name) else {
            builder.report_mut().warn(
                RULE,
                format!("unknown shift {:?}; rule skipped", rule.previous_shift_name),
            );
            continue;
        };
        let Some(next) = builder.shifts.position(&rule.next_shift_name) else {
            builder.report_mut().warn(
                RULE,
                format!("unknown shift {:?}; rule skipped", rule.next_shift_name),
            );
            continue;
        };
        if rule.constraint_type == ConstraintType::Soft && rule.penalty_weight == 0 {
            builder
                .report_mut()
                .info(RULE, "soft rule with zero weight; no effect");
            continue;
        }
        if builder.horizon.len() < 2 {
            builder
                .report_mut()
                .info(RULE, "single-day horizon; no effect");
            continue;
        }

        // The last day has no successor.
        for employee in 0..builder.roster.len() {
            for day in 0..builder.horizon.len() - 1 {
                let today = builder.assignment(employee, day, previous);
                let tomorrow = builder.assignment(employee, day + 1, next);
                match rule.constraint_type {
                    ConstraintType::Hard => {
                        builder.push_constraint(constraint!(today <= tomorrow));
                    }
                    ConstraintType::Soft => {
                        let violation = builder.new_bool_var();
                        builder.push_constraint(constraint!(today - tomorrow - violation <= 0));
                        let id = &builder.roster.get(employee).id;
                        let date = builder.horizon.day(day).date;
                        builder.push_penalty(
                            Expression::from(violation),
                            rule.penalty_weight,
                            format!(
                                "sequence {}->{} {id} {date}",
                                rule.previous_shift_name, rule.next_shift_name
                            ),
                        );
                    }
                }
            }
        }
    }
}
