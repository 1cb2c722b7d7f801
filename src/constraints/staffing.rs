//! Facility staffing levels per floor and shift.

use good_lp::{constraint, Expression};

use crate::model::ModelBuilder;
use crate::rules::{ConstraintType, StaffingRules};

const RULE: &str = "staffing";

pub(crate) fn apply(builder: &mut ModelBuilder, rules: &StaffingRules) {
    for (floor, shift_rules) in rules {
        let members = builder.roster.floor_members(floor);
        if members.is_empty() {
            builder.report_mut().warn(
                RULE,
                format!("no employees on floor {floor:?}; staffing rules skipped"),
            );
            continue;
        }
        for (shift_name, rule) in shift_rules {
            let Some(shift) = builder.shifts.position(shift_name) else {
                builder.report_mut().warn(
                    RULE,
                    format!("unknown shift {shift_name:?} on floor {floor:?}; rule skipped"),
                );
                continue;
            };
            if rule.constraint_type == ConstraintType::Soft
                && rule.under_penalty_weight == 0
                && rule.over_penalty_weight == 0
            {
                builder.report_mut().info(
                    RULE,
                    format!("soft rule for {floor}/{shift_name} has zero weights; no effect"),
                );
                continue;
            }

            let target = rule.target as i32;
            for day in 0..builder.horizon.len() {
                let headcount: Expression = builder.headcount(&members, day, shift);
                match rule.constraint_type {
                    ConstraintType::Hard => {
                        builder.push_constraint(constraint!(headcount == target));
                    }
                    ConstraintType::Soft => {
                        let shortage = builder.new_int_var(0, rule.target);
                        let excess = builder
                            .new_int_var(0, (members.len() as u32).saturating_sub(rule.target));
                        builder
                            .push_constraint(constraint!(headcount + shortage - excess == target));
                        let date = builder.horizon.day(day).date;
                        builder.push_penalty(
                            Expression::from(shortage),
                            rule.under_penalty_weight,
                            format!("staffing shortage {floor}/{shift_name} {date}"),
                        );
                        builder.push_penalty(
                            Expression::from(excess),
                            rule.over_penalty_weight,
                            format!("staffing excess {floor}/{shift_name} {date}"),
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::domain::DAY;
    use crate::rules::{ConstraintType, RuleSet, StaffingRule, StaffingRules};
    use crate::test_util;

    fn one_floor(rule: StaffingRule) -> StaffingRules {
        let mut by_shift = BTreeMap::new();
        by_shift.insert(DAY.to_string(), rule);
        let mut by_floor = BTreeMap::new();
        by_floor.insert("1F".to_string(), by_shift);
        by_floor
    }

    #[test]
    fn hard_rule_fixes_the_daily_headcount() {
        let rules = RuleSet {
            staffing: one_floor(StaffingRule {
                target: 1,
                constraint_type: ConstraintType::Hard,
                under_penalty_weight: 0,
                over_penalty_weight: 0,
            }),
            ..RuleSet::default()
        };
        let solved = test_util::build_and_solve(&rules);
        for &date in solved.dates() {
            let on_day = ["A", "B"]
                .iter()
                .filter(|id| solved.shift_on(id, date) == Some(DAY))
                .count();
            assert_eq!(on_day, 1, "headcount off target on {date}");
        }
    }

    #[test]
    fn soft_rule_reaches_the_target_when_it_can() {
        let rules = RuleSet {
            staffing: one_floor(StaffingRule {
                target: 1,
                constraint_type: ConstraintType::Soft,
                under_penalty_weight: 10,
                over_penalty_weight: 1,
            }),
            ..RuleSet::default()
        };
        let solved = test_util::build_and_solve(&rules);
        assert_eq!(solved.objective_value().round() as i64, 0);
        for &date in solved.dates() {
            let on_day = ["A", "B"]
                .iter()
                .filter(|id| solved.shift_on(id, date) == Some(DAY))
                .count();
            assert_eq!(on_day, 1, "optimum should hit the target on {date}");
        }
    }

    #[test]
    fn unreachable_soft_target_pays_the_shortage() {
        // Two employees, target three: shortage of one per day, weight 10.
        let rules = RuleSet {
            staffing: one_floor(StaffingRule {
                target: 3,
                constraint_type: ConstraintType::Soft,
                under_penalty_weight: 10,
                over_penalty_weight: 1,
            }),
            ..RuleSet::default()
        };
        let solved = test_util::build_and_solve(&rules);
        assert_eq!(solved.objective_value().round() as i64, 30);
    }

    #[test]
    fn unknown_floor_and_shift_are_skipped() {
        let mut staffing = one_floor(StaffingRule {
            target: 1,
            constraint_type: ConstraintType::Hard,
            under_penalty_weight: 0,
            over_penalty_weight: 0,
        });
        staffing
            .get_mut("1F")
            .unwrap()
            .insert("遅出".to_string(), StaffingRule {
                target: 1,
                constraint_type: ConstraintType::Hard,
                under_penalty_weight: 0,
                over_penalty_weight: 0,
            });
        staffing.insert("3F".to_string(), BTreeMap::new());
        let rules = RuleSet {
            staffing,
            ..RuleSet::default()
        };
        let model = test_util::build(&rules);
        assert_eq!(model.report.warnings().count(), 2);
        // 6 one-hot cells + 3 daily headcount constraints for the valid rule
        assert_eq!(model.report.constraints_count, 9);
    }
}
