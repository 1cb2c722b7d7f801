//! Assignment-count balancing across an employment-type group.

use good_lp::{constraint, Expression};

use crate::model::ModelBuilder;
use crate::rules::{BalanceRule, ConstraintType};

const RULE: &str = "balance";

pub(crate) fn apply(builder: &mut ModelBuilder, rules: &[BalanceRule]) {
    for rule in rules {
        let Some(shift) = builder.shifts.position(&rule.target_shift_name) else {
            builder.report_mut().warn(
                RULE,
                format!("unknown shift {:?}; rule skipped", rule.target_shift_name),
            );
            continue;
        };
        let group = builder
            .roster
            .with_employment_type(&rule.target_employment_type);
        if group.len() < 2 {
            builder.report_mut().info(
                RULE,
                format!(
                    "group {:?} has fewer than two members; no effect",
                    rule.target_employment_type
                ),
            );
            continue;
        }
        let max_diff = match rule.constraint_type {
            ConstraintType::Hard => match rule.max_diff_allowed {
                Some(diff) => Some(diff as i32),
                None => {
                    builder
                        .report_mut()
                        .warn(RULE, "hard rule without max_diff_allowed; rule skipped");
                    continue;
                }
            },
            ConstraintType::Soft => {
                if rule.penalty_weight == 0 {
                    builder
                        .report_mut()
                        .info(RULE, "soft rule with zero weight; no effect");
                    continue;
                }
                None
            }
        };

        // Reified group extremes: the objective or the hard bound pulls them
        // onto the actual max/min.
        let horizon_len = builder.horizon.len() as u32;
        let highest = builder.new_int_var(0, horizon_len);
        let lowest = builder.new_int_var(0, horizon_len);
        for &employee in &group {
            let count: Expression = (0..builder.horizon.len())
                .map(|day| builder.assignment(employee, day, shift))
                .sum();
            builder.push_constraint(constraint!(count.clone() - highest <= 0));
            builder.push_constraint(constraint!(count - lowest >= 0));
        }
        match max_diff {
            Some(diff) => builder.push_constraint(constraint!(highest - lowest <= diff)),
            None => builder.push_penalty(
                highest - lowest,
                rule.penalty_weight,
                format!(
                    "balance {}/{}",
                    rule.target_employment_type, rule.target_shift_name
                ),
            ),
        }
    }
}
