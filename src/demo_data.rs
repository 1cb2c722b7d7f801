//! Demo data mirroring the facility's production configuration.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Employee, Horizon, Roster, ShiftSet, DAY, EARLY, NIGHT, POST_NIGHT};
use crate::rules::{ConstraintType, MinDaysOffRule, RuleSet, StaffingRule};

/// A complete demo problem: alphabet, horizon, roster and rules.
pub struct DemoProblem {
    pub shifts: ShiftSet,
    pub horizon: Horizon,
    pub roster: Roster,
    pub rules: RuleSet,
}

/// The 2025 Golden Week holidays falling into the demo horizon.
pub fn demo_holidays() -> HashSet<NaiveDate> {
    [
        (2025, 4, 29), // Showa Day
        (2025, 5, 3),  // Constitution Day
        (2025, 5, 4),  // Greenery Day
        (2025, 5, 5),  // Children's Day
        (2025, 5, 6),  // substitute holiday
    ]
    .into_iter()
    .map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    .collect()
}

const SURNAMES: &[&str] = &[
    "佐藤", "鈴木", "高橋", "田中", "伊藤", "渡辺", "山本", "中村", "小林", "加藤", "吉田",
    "山田", "佐々木", "山口", "松本", "井上", "木村", "林", "斎藤", "清水", "山崎", "森",
    "池田", "橋本", "阿部",
];

/// Generates the demo world: floors 1F/2F, a mostly full-time roster and the
/// facility's baseline rule set over 2025-04-10 to 2025-05-07.
pub fn generate() -> DemoProblem {
    let mut rng = StdRng::seed_from_u64(0);

    let shifts = ShiftSet::standard();
    let start = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 5, 7).unwrap();
    let horizon =
        Horizon::over_range(start, end, &demo_holidays()).expect("demo range is valid");

    let mut employees = Vec::new();
    for i in 0..25 {
        let floor = if i < 17 { "1F" } else { "2F" };
        let employment_type = if rng.gen_bool(0.8) { "常勤" } else { "パート" };
        employees.push(Employee::new(
            format!("E{:03}", i + 1),
            SURNAMES[i],
            employment_type,
            floor,
        ));
    }
    let roster = Roster::new(employees);

    let mut first_floor = BTreeMap::new();
    first_floor.insert(EARLY.to_string(), hard_target(2));
    first_floor.insert(DAY.to_string(), hard_target(4));
    first_floor.insert(NIGHT.to_string(), hard_target(2));
    first_floor.insert(
        POST_NIGHT.to_string(),
        StaffingRule {
            target: 1,
            constraint_type: ConstraintType::Soft,
            under_penalty_weight: 10,
            over_penalty_weight: 1,
        },
    );
    let mut staffing = BTreeMap::new();
    staffing.insert("1F".to_string(), first_floor);

    let rules = RuleSet {
        staffing,
        min_days_off: vec![MinDaysOffRule {
            min_days: 8,
            target_employment_type: "常勤".to_string(),
            constraint_type: ConstraintType::Hard,
            under_penalty_weight: 0,
        }],
        ..RuleSet::default()
    };

    DemoProblem {
        shifts,
        horizon,
        roster,
        rules,
    }
}

fn hard_target(target: u32) -> StaffingRule {
    StaffingRule {
        target,
        constraint_type: ConstraintType::Hard,
        under_penalty_weight: 0,
        over_penalty_weight: 0,
    }
}
