//! Per-employee total workdays control.
//!
//! Several rules may target the same employee; they compose, and conflicting
//! bounds are passed through for the solver to reject.

use good_lp::constraint;

use crate::model::ModelBuilder;
use crate::rules::{TotalWorkdaysRule, WorkdaysBound};

const RULE: &str = "total_workdays";

pub(crate) fn apply(builder: &mut ModelBuilder, rules: &[TotalWorkdaysRule]) {
    for rule in rules {
        let Some(employee) = builder.roster.position(&rule.employee_id) else {
            builder.report_mut().warn(
                RULE,
                format!("unknown employee id {:?}; rule skipped", rule.employee_id),
            );
            continue;
        };
        if matches!(
            rule.constraint_type,
            WorkdaysBound::SoftExact | WorkdaysBound::SoftMax | WorkdaysBound::SoftMin
        ) && rule.penalty_weight == 0
        {
            builder.report_mut().info(
                RULE,
                format!("soft rule for {} has zero weight; no effect", rule.employee_id),
            );
            continue;
        }

        let total = builder.workday_total(employee);
        let days = rule.days as i32;
        let horizon_len = builder.horizon.len() as u32;
        match rule.constraint_type {
            WorkdaysBound::Exact => builder.push_constraint(constraint!(total == days)),
            WorkdaysBound::Max => builder.push_constraint(constraint!(total <= days)),
            WorkdaysBound::Min => builder.push_constraint(constraint!(total >= days)),
            WorkdaysBound::SoftExact => {
                let over = builder.new_int_var(0, horizon_len);
                let under = builder.new_int_var(0, rule.days);
                builder.push_constraint(constraint!(total - over + under == days));
                builder.push_penalty(
                    over + under,
                    rule.penalty_weight,
                    format!("workdays deviation {}", rule.employee_id),
                );
            }
            WorkdaysBound::SoftMax => {
                let over = builder.new_int_var(0, horizon_len);
                builder.push_constraint(constraint!(total - over <= days));
                builder.push_penalty(
                    over.into(),
                    rule.penalty_weight,
                    format!("workdays excess {}", rule.employee_id),
                );
            }
            WorkdaysBound::SoftMin => {
                let under = builder.new_int_var(0, rule.days);
                builder.push_constraint(constraint!(total + under >= days));
                builder.push_penalty(
                    under.into(),
                    rule.penalty_weight,
                    format!("workdays shortage {}", rule.employee_id),
                );
            }
        }
    }
}
