//! Day off on weekends and public holidays.

use std::collections::HashSet;

use good_lp::{constraint, Expression};

use crate::model::ModelBuilder;
use crate::rules::{ConstraintType, WeekendHolidayOffRule};

const RULE: &str = "weekend_holiday_off";

pub(crate) fn apply(builder: &mut ModelBuilder, rule: &WeekendHolidayOffRule) {
    if rule.constraint_type == ConstraintType::Soft && rule.penalty_weight == 0 {
        builder
            .report_mut()
            .info(RULE, "soft rule with zero weight; no effect");
        return;
    }

    let extra_holidays: HashSet<usize> = rule
        .holidays
        .iter()
        .filter_map(|&date| builder.horizon.position(date))
        .collect();

    let targets: Vec<usize> = match &rule.target_employees {
        Some(ids) => {
            let mut resolved = Vec::new();
            for id in ids {
                match builder.roster.position(id) {
                    Some(employee) => resolved.push(employee),
                    None => builder
                        .report_mut()
                        .warn(RULE, format!("unknown employee id {id:?}; target skipped")),
                }
            }
            resolved
        }
        None => (0..builder.roster.len()).collect(),
    };

    let off_days: Vec<usize> = builder
        .horizon
        .days()
        .iter()
        .enumerate()
        .filter(|(day, entry)| entry.is_weekend_or_holiday() || extra_holidays.contains(day))
        .map(|(day, _)| day)
        .collect();

    let off = builder.shifts.off_index();
    for &employee in &targets {
        for &day in &off_days {
            let cell = builder.assignment(employee, day, off);
            match rule.constraint_type {
                ConstraintType::Hard => builder.push_constraint(constraint!(cell == 1)),
                ConstraintType::Soft => {
                    let miss = builder.new_bool_var();
                    builder.push_constraint(constraint!(miss + cell == 1));
                    let id = &builder.roster.get(employee).id;
                    let date = builder.horizon.day(day).date;
                    builder.push_penalty(
                        Expression::from(miss),
                        rule.penalty_weight,
                        format!("weekend/holiday off {id} {date}"),
                    );
                }
            }
        }
    }
}
