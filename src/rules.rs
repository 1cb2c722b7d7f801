//! Declarative scheduling rules.
//!
//! Every rule family is a plain data struct with a `constraint_type`
//! discriminator selecting hard (inviolable) or soft (penalised) semantics.
//! Required parameters are required fields; optional parameters carry serde
//! defaults, and unknown keys in rule dictionaries are ignored on
//! deserialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain;

/// Hard versus soft compilation of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintType {
    #[default]
    Hard,
    Soft,
}

impl ConstraintType {
    pub fn is_hard(self) -> bool {
        self == ConstraintType::Hard
    }
}

/// Bound kinds for the total-workdays family, which extends the plain
/// hard/soft split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkdaysBound {
    Exact,
    Max,
    Min,
    SoftExact,
    SoftMax,
    SoftMin,
}

/// Required daily headcount for one floor and shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffingRule {
    pub target: u32,
    #[serde(default)]
    pub constraint_type: ConstraintType,
    #[serde(default)]
    pub under_penalty_weight: u32,
    #[serde(default)]
    pub over_penalty_weight: u32,
}

/// Staffing rules keyed floor → shift name.
pub type StaffingRules = BTreeMap<String, BTreeMap<String, StaffingRule>>;

/// Minimum days off over the horizon for one employment type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinDaysOffRule {
    pub min_days: u32,
    pub target_employment_type: String,
    #[serde(default)]
    pub constraint_type: ConstraintType,
    #[serde(default)]
    pub under_penalty_weight: u32,
}

/// Cap on consecutive workdays, evaluated over every sliding window of
/// `max_days + 1` days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxConsecutiveRule {
    pub max_days: u32,
    pub work_shifts: Vec<String>,
    #[serde(default)]
    pub constraint_type: ConstraintType,
    #[serde(default)]
    pub over_penalty_weight: u32,
}

/// `A` on one day forces (or prefers) `B` on the next.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceRule {
    pub previous_shift_name: String,
    pub next_shift_name: String,
    #[serde(default)]
    pub constraint_type: ConstraintType,
    #[serde(default)]
    pub penalty_weight: u32,
}

/// Balances per-employee counts of one shift across an employment-type
/// group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRule {
    pub target_employment_type: String,
    pub target_shift_name: String,
    #[serde(default)]
    pub constraint_type: ConstraintType,
    /// Required for hard rules; ignored for soft ones.
    #[serde(default)]
    pub max_diff_allowed: Option<u32>,
    #[serde(default)]
    pub penalty_weight: u32,
}

/// One employee's request for a specific shift on a specific date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequestRule {
    pub employee_id: String,
    pub date: NaiveDate,
    pub requested_shift: String,
    #[serde(default)]
    pub constraint_type: ConstraintType,
    #[serde(default)]
    pub penalty_weight: u32,
}

/// Keeps two employees off the listed shifts on the same day. Hard only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairAvoidanceRule {
    pub employee_pair: Vec<String>,
    pub avoid_shifts: Vec<String>,
    #[serde(default)]
    pub constraint_type: ConstraintType,
}

/// Bounds one employee's total workdays over the horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalWorkdaysRule {
    pub employee_id: String,
    pub constraint_type: WorkdaysBound,
    pub days: u32,
    #[serde(default)]
    pub penalty_weight: u32,
}

/// Day off on weekends and public holidays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekendHolidayOffRule {
    /// Extra holidays on top of the horizon's flags; dates outside the
    /// horizon are ignored.
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    /// Scope; `None` targets the whole roster.
    #[serde(default)]
    pub target_employees: Option<Vec<String>>,
    #[serde(default)]
    pub constraint_type: ConstraintType,
    #[serde(default)]
    pub penalty_weight: u32,
}

/// Full-horizon leave for employees with a matching status. Hard only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusLeaveRule {
    pub status_values_for_full_leave: Vec<String>,
    #[serde(default = "default_leave_shift")]
    pub leave_shift_name: String,
    #[serde(default)]
    pub target_employees: Option<Vec<String>>,
}

fn default_leave_shift() -> String {
    domain::OFF.to_string()
}

/// The full rule configuration, one collection per family.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub status_leave: Option<StatusLeaveRule>,
    #[serde(default)]
    pub shift_requests: Vec<ShiftRequestRule>,
    #[serde(default)]
    pub weekend_holiday_off: Option<WeekendHolidayOffRule>,
    #[serde(default)]
    pub staffing: StaffingRules,
    #[serde(default)]
    pub min_days_off: Vec<MinDaysOffRule>,
    #[serde(default)]
    pub max_consecutive: Vec<MaxConsecutiveRule>,
    #[serde(default)]
    pub sequences: Vec<SequenceRule>,
    #[serde(default)]
    pub balance: Vec<BalanceRule>,
    #[serde(default)]
    pub pair_avoidance: Vec<PairAvoidanceRule>,
    #[serde(default)]
    pub total_workdays: Vec<TotalWorkdaysRule>,
}
