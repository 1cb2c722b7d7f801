//! Minimum personal days off per employment type.

use good_lp::{constraint, Expression};

use crate::model::ModelBuilder;
use crate::rules::{ConstraintType, MinDaysOffRule};

const RULE: &str = "min_days_off";

pub(crate) fn apply(builder: &mut ModelBuilder, rules: &[MinDaysOffRule]) {
    let off = builder.shifts.off_index();
    for rule in rules {
        if rule.constraint_type == ConstraintType::Soft && rule.under_penalty_weight == 0 {
            builder
                .report_mut()
                .info(RULE, "soft rule with zero weight; no effect");
            continue;
        }
        let members = builder
            .roster
            .with_employment_type(&rule.target_employment_type);
        if members.is_empty() {
            builder.report_mut().warn(
                RULE,
                format!(
                    "no employees with employment type {:?}; rule skipped",
                    rule.target_employment_type
                ),
            );
            continue;
        }
        let min_days = rule.min_days as i32;
        for &employee in &members {
            let days_off: Expression =
                (0..builder.horizon.len()).map(|day| builder.assignment(employee, day, off)).sum();
            match rule.constraint_type {
                ConstraintType::Hard => {
                    builder.push_constraint(constraint!(days_off >= min_days));
                }
                ConstraintType::Soft => {
                    let shortage = builder.new_int_var(0, rule.min_days);
                    builder.push_constraint(constraint!(days_off + shortage >= min_days));
                    let id = &builder.roster.get(employee).id;
                    builder.push_penalty(
                        Expression::from(shortage),
                        rule.under_penalty_weight,
                        format!("days-off shortage {id}"),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::OFF;
    use crate::rules::{ConstraintType, MinDaysOffRule, RuleSet, TotalWorkdaysRule, WorkdaysBound};
    use crate::test_util;

    #[test]
    fn hard_minimum_is_met_by_every_matching_employee() {
        let rules = RuleSet {
            min_days_off: vec![MinDaysOffRule {
                min_days: 2,
                target_employment_type: "常勤".to_string(),
                constraint_type: ConstraintType::Hard,
                under_penalty_weight: 0,
            }],
            ..RuleSet::default()
        };
        let solved = test_util::build_and_solve(&rules);
        for id in ["A", "B"] {
            assert!(
                solved.count_shift(id, OFF) >= 2,
                "{id} has fewer than 2 days off"
            );
        }
    }

    #[test]
    fn blocked_soft_minimum_pays_the_shortage() {
        // A must work 2 of 3 days, so one day off remains against a soft
        // minimum of two.
        let rules = RuleSet {
            min_days_off: vec![MinDaysOffRule {
                min_days: 2,
                target_employment_type: "常勤".to_string(),
                constraint_type: ConstraintType::Soft,
                under_penalty_weight: 3,
            }],
            total_workdays: vec![TotalWorkdaysRule {
                employee_id: "A".to_string(),
                constraint_type: WorkdaysBound::Exact,
                days: 2,
                penalty_weight: 0,
            }],
            ..RuleSet::default()
        };
        let solved = test_util::build_and_solve(&rules);
        assert_eq!(solved.count_shift("A", OFF), 1);
        assert_eq!(solved.objective_value().round() as i64, 3);
    }

    #[test]
    fn unmatched_employment_type_warns_and_skips() {
        let rules = RuleSet {
            min_days_off: vec![MinDaysOffRule {
                min_days: 1,
                target_employment_type: "派遣".to_string(),
                constraint_type: ConstraintType::Hard,
                under_penalty_weight: 0,
            }],
            ..RuleSet::default()
        };
        let model = test_util::build(&rules);
        assert_eq!(model.report.warnings().count(), 1);
        assert_eq!(model.report.constraints_count, 6);
    }
}
