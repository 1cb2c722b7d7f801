//! Shared fixtures for the constraint compiler tests.
//!
//! The default world matches the small end-to-end scenarios: two full-time
//! employees on one floor, a three-weekday horizon and a reduced
//! off/day/night alphabet.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use crate::builder::build_schedule_model;
use crate::domain::{Employee, Horizon, Roster, ShiftSet, DAY, NIGHT, OFF};
use crate::model::ScheduleModel;
use crate::rules::{
    BalanceRule, ConstraintType, MinDaysOffRule, RuleSet, SequenceRule, ShiftRequestRule,
    StaffingRule, TotalWorkdaysRule, WorkdaysBound,
};
use crate::solver::{solve, SolvedSchedule};

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub(crate) fn small_shifts() -> ShiftSet {
    ShiftSet::new([OFF, DAY, NIGHT], [DAY, NIGHT]).unwrap()
}

pub(crate) fn two_person_roster() -> Roster {
    Roster::new(vec![
        Employee::new("A", "職員A", "常勤", "1F"),
        Employee::new("B", "職員B", "常勤", "1F"),
    ])
}

/// Horizon of `days` days starting Monday 2025-04-07, no holidays.
pub(crate) fn weekday_horizon(days: u64) -> Horizon {
    let start = date(2025, 4, 7);
    let dates = (0..days)
        .map(|i| start + chrono::Duration::days(i as i64))
        .collect();
    Horizon::new(dates, &HashSet::new())
}

pub(crate) fn build(rules: &RuleSet) -> ScheduleModel {
    build_schedule_model(&small_shifts(), &weekday_horizon(3), &two_person_roster(), rules)
        .expect("build failed")
}

pub(crate) fn build_and_solve(rules: &RuleSet) -> SolvedSchedule {
    solve(build(rules)).expect("solve failed")
}

pub(crate) fn build_and_solve_days(rules: &RuleSet, days: u64) -> SolvedSchedule {
    let model = build_schedule_model(
        &small_shifts(),
        &weekday_horizon(days),
        &two_person_roster(),
        rules,
    )
    .expect("build failed");
    solve(model).expect("solve failed")
}

/// A valid multi-family rule set used by determinism and report tests.
pub(crate) fn mixed_rule_set() -> RuleSet {
    let mut by_shift = BTreeMap::new();
    by_shift.insert(
        DAY.to_string(),
        StaffingRule {
            target: 1,
            constraint_type: ConstraintType::Soft,
            under_penalty_weight: 2,
            over_penalty_weight: 1,
        },
    );
    let mut staffing = BTreeMap::new();
    staffing.insert("1F".to_string(), by_shift);

    RuleSet {
        staffing,
        min_days_off: vec![MinDaysOffRule {
            min_days: 1,
            target_employment_type: "常勤".to_string(),
            constraint_type: ConstraintType::Hard,
            under_penalty_weight: 0,
        }],
        sequences: vec![SequenceRule {
            previous_shift_name: NIGHT.to_string(),
            next_shift_name: OFF.to_string(),
            constraint_type: ConstraintType::Hard,
            penalty_weight: 0,
        }],
        shift_requests: vec![ShiftRequestRule {
            employee_id: "B".to_string(),
            date: date(2025, 4, 8),
            requested_shift: DAY.to_string(),
            constraint_type: ConstraintType::Soft,
            penalty_weight: 2,
        }],
        total_workdays: vec![TotalWorkdaysRule {
            employee_id: "A".to_string(),
            constraint_type: WorkdaysBound::SoftMax,
            days: 2,
            penalty_weight: 1,
        }],
        ..RuleSet::default()
    }
}

/// Hard workday bounds forcing an off-day spread of two, balanced softly at
/// the given weight; the optimum objective is twice the weight.
pub(crate) fn imbalance_rule_set(weight: u32) -> RuleSet {
    RuleSet {
        balance: vec![BalanceRule {
            target_employment_type: "常勤".to_string(),
            target_shift_name: OFF.to_string(),
            constraint_type: ConstraintType::Soft,
            max_diff_allowed: None,
            penalty_weight: weight,
        }],
        total_workdays: vec![
            TotalWorkdaysRule {
                employee_id: "A".to_string(),
                constraint_type: WorkdaysBound::Exact,
                days: 1,
                penalty_weight: 0,
            },
            TotalWorkdaysRule {
                employee_id: "B".to_string(),
                constraint_type: WorkdaysBound::Exact,
                days: 3,
                penalty_weight: 0,
            },
        ],
        ..RuleSet::default()
    }
}
