//! Maximum consecutive workdays, evaluated per sliding window.

use good_lp::{constraint, Expression};

use crate::model::ModelBuilder;
use crate::rules::{ConstraintType, MaxConsecutiveRule};

const RULE: &str = "max_consecutive";

pub(crate) fn apply(builder: &mut ModelBuilder, rules: &[MaxConsecutiveRule]) {
    for rule in rules {
        let mut work_shifts = Vec::with_capacity(rule.work_shifts.len());
        let mut resolved = true;
        for name in &rule.work_shifts {
            match builder.shifts.position(name) {
                Some(shift) => work_shifts.push(shift),
                None => {
                    builder
                        .report_mut()
                        .warn(RULE, format!("unknown work shift {name:?}; rule skipped"));
                    resolved = false;
                    break;
                }
            }
        }
        if !resolved {
            continue;
        }
        if work_shifts.is_empty() {
            builder
                .report_mut()
                .warn(RULE, "empty work_shifts list; rule skipped");
            continue;
        }
        if rule.constraint_type == ConstraintType::Soft && rule.over_penalty_weight == 0 {
            builder
                .report_mut()
                .info(RULE, "soft rule with zero weight; no effect");
            continue;
        }
        let window = rule.max_days as usize + 1;
        if window > builder.horizon.len() {
            builder
                .report_mut()
                .info(RULE, "horizon shorter than the window; no effect");
            continue;
        }

        let max_days = rule.max_days as i32;
        for employee in 0..builder.roster.len() {
            for start in 0..=(builder.horizon.len() - window) {
                let run: Expression = (start..start + window)
                    .map(|day| builder.cell_sum(employee, day, &work_shifts))
                    .sum();
                match rule.constraint_type {
                    ConstraintType::Hard => {
                        builder.push_constraint(constraint!(run <= max_days));
                    }
                    ConstraintType::Soft => {
                        let slack = builder.new_int_var(0, window as u32);
                        builder.push_constraint(constraint!(run - slack <= max_days));
                        let id = &builder.roster.get(employee).id;
                        let date = builder.horizon.day(start).date;
                        builder.push_penalty(
                            Expression::from(slack),
                            rule.over_penalty_weight,
                            format!("consecutive workdays {id} from {date}"),
                        );
                    }
                }
            }
        }
    }
}
