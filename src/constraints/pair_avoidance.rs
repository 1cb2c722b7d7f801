//! Keeps employee pairs off the same shift on the same day. Hard only.

use good_lp::constraint;

use crate::model::ModelBuilder;
use crate::rules::{ConstraintType, PairAvoidanceRule};

const RULE: &str = "pair_avoidance";

pub(crate) fn apply(builder: &mut ModelBuilder, rules: &[PairAvoidanceRule]) {
    for rule in rules {
        if rule.constraint_type != ConstraintType::Hard {
            builder
                .report_mut()
                .warn(RULE, "only hard pair avoidance is supported; rule skipped");
            continue;
        }
        let [first_id, second_id] = rule.employee_pair.as_slice() else {
            builder.report_mut().warn(
                RULE,
                format!(
                    "employee_pair must name exactly two employees, got {}; rule skipped",
                    rule.employee_pair.len()
                ),
            );
            continue;
        };
        let (Some(first), Some(second)) = (
            builder.roster.position(first_id),
            builder.roster.position(second_id),
        ) else {
            builder.report_mut().warn(
                RULE,
                format!("unknown employee in pair [{first_id:?}, {second_id:?}]; rule skipped"),
            );
            continue;
        };
        if first == second {
            builder
                .report_mut()
                .warn(RULE, format!("pair names {first_id:?} twice; rule skipped"));
            continue;
        }
        let mut shifts = Vec::with_capacity(rule.avoid_shifts.len());
        let mut resolved = true;
        for name in &rule.avoid_shifts {
            match builder.shifts.position(name) {
                Some(shift) => shifts.push(shift),
                None => {
                    builder
                        .report_mut()
                        .warn(RULE, format!("unknown shift {name:?}; rule skipped"));
                    resolved = false;
                    break;
                }
            }
        }
        if !resolved {
            continue;
        }

        for day in 0..builder.horizon.len() {
            for &shift in &shifts {
                let a = builder.assignment(first, day, shift);
                let b = builder.assignment(second, day, shift);
                builder.push_constraint(constraint!(a + b <= 1));
            }
        }
    }
}
