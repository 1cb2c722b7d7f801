//! Domain model: shift alphabet, planning horizon and employee roster.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::BuildError;

/// The day-off shift code.
pub const OFF: &str = "公休";
/// Regular day shift.
pub const DAY: &str = "日勤";
/// Early shift.
pub const EARLY: &str = "早出";
/// Night shift.
pub const NIGHT: &str = "夜勤";
/// Post-night recovery shift, counted as work.
pub const POST_NIGHT: &str = "明勤";

/// The ordered shift alphabet together with the subset counted as work.
///
/// Construction fails fast on structural misuse: an empty or duplicated
/// alphabet, a missing day-off code, or a working code that is not part of
/// the alphabet.
#[derive(Debug, Clone)]
pub struct ShiftSet {
    names: Vec<String>,
    index: HashMap<String, usize>,
    working: Vec<usize>,
    off: usize,
}

impl ShiftSet {
    pub fn new<S, W>(shifts: S, working: W) -> Result<Self, BuildError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        let names: Vec<String> = shifts.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(BuildError::EmptyShiftSet);
        }
        let mut index = HashMap::new();
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(BuildError::DuplicateShift(name.clone()));
            }
        }
        let off = *index
            .get(OFF)
            .ok_or_else(|| BuildError::MissingOffShift(OFF.to_string()))?;
        let mut working_indices = Vec::new();
        for name in working.into_iter().map(Into::into) {
            let idx = *index
                .get(&name)
                .ok_or(BuildError::UnknownWorkingShift(name))?;
            working_indices.push(idx);
        }
        Ok(Self {
            names,
            index,
            working: working_indices,
            off,
        })
    }

    /// The facility's standard five-code alphabet with the default working
    /// subset (day, early, night, post-night).
    pub fn standard() -> Self {
        Self::new([DAY, OFF, NIGHT, EARLY, POST_NIGHT], [DAY, EARLY, NIGHT, POST_NIGHT])
            .expect("standard alphabet is well formed")
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Index of the day-off shift; guaranteed present by construction.
    pub fn off_index(&self) -> usize {
        self.off
    }

    /// Indices of the shifts counted toward workday totals.
    pub fn working_indices(&self) -> &[usize] {
        &self.working
    }
}

/// One calendar day of the planning horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub date: NaiveDate,
    pub is_public_holiday: bool,
}

impl ScheduleDay {
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Weekend-or-holiday membership; a holiday falling on a weekend counts
    /// once.
    pub fn is_weekend_or_holiday(&self) -> bool {
        self.is_weekend() || self.is_public_holiday
    }
}

/// Ordered, finite sequence of schedule days.
#[derive(Debug, Clone)]
pub struct Horizon {
    days: Vec<ScheduleDay>,
    index: HashMap<NaiveDate, usize>,
}

impl Horizon {
    /// Builds a horizon over the given dates, flagging public holidays by
    /// membership in `holidays`. Holidays outside the dates are ignored.
    pub fn new(dates: Vec<NaiveDate>, holidays: &HashSet<NaiveDate>) -> Self {
        let days: Vec<ScheduleDay> = dates
            .into_iter()
            .map(|date| ScheduleDay {
                date,
                is_public_holiday: holidays.contains(&date),
            })
            .collect();
        let index = days.iter().enumerate().map(|(i, d)| (d.date, i)).collect();
        Self { days, index }
    }

    /// Inclusive date range, one day per step.
    pub fn over_range(
        start: NaiveDate,
        end: NaiveDate,
        holidays: &HashSet<NaiveDate>,
    ) -> Result<Self, BuildError> {
        if start > end {
            return Err(BuildError::InvalidDateRange { start, end });
        }
        let span = (end - start).num_days();
        let dates = (0..=span).map(|i| start + Duration::days(i)).collect();
        Ok(Self::new(dates, holidays))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn days(&self) -> &[ScheduleDay] {
        &self.days
    }

    pub fn day(&self, index: usize) -> &ScheduleDay {
        &self.days[index]
    }

    pub fn position(&self, date: NaiveDate) -> Option<usize> {
        self.index.get(&date).copied()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().map(|d| d.date)
    }
}

/// An employee on the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    /// Employment type, e.g. `常勤` or `パート`.
    pub employment_type: String,
    /// Floor assignment, e.g. `1F` or `2F`.
    pub floor: String,
    /// Optional status such as `育休` or `病休`.
    #[serde(default)]
    pub status: Option<String>,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        employment_type: impl Into<String>,
        floor: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            employment_type: employment_type.into(),
            floor: floor.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// The fixed employee set, with id lookup and scope filters.
///
/// Iteration order is roster order everywhere; lookups go through the id
/// index.
#[derive(Debug, Clone)]
pub struct Roster {
    employees: Vec<Employee>,
    index: HashMap<String, usize>,
}

impl Roster {
    pub fn new(employees: Vec<Employee>) -> Self {
        let index = employees
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        Self { employees, index }
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, index: usize) -> &Employee {
        &self.employees[index]
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Indices of employees assigned to the given floor, in roster order.
    pub fn floor_members(&self, floor: &str) -> Vec<usize> {
        self.employees
            .iter()
            .enumerate()
            .filter(|(_, e)| e.floor == floor)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of employees with the given employment type, in roster order.
    pub fn with_employment_type(&self, employment_type: &str) -> Vec<usize> {
        self.employees
            .iter()
            .enumerate()
            .filter(|(_, e)| e.employment_type == employment_type)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn standard_alphabet_has_all_five_codes() {
        let shifts = ShiftSet::standard();
        assert_eq!(shifts.len(), 5);
        for code in [OFF, DAY, EARLY, NIGHT, POST_NIGHT] {
            assert!(shifts.contains(code), "missing {code}");
        }
        assert_eq!(shifts.name(shifts.off_index()), OFF);
        assert_eq!(shifts.working_indices().len(), 4);
        assert!(!shifts
            .working_indices()
            .contains(&shifts.off_index()));
    }

    #[test]
    fn alphabet_without_day_off_is_rejected() {
        let err = ShiftSet::new([DAY, NIGHT], [DAY]).unwrap_err();
        assert!(matches!(err, BuildError::MissingOffShift(_)));
    }

    #[test]
    fn unknown_working_shift_is_rejected() {
        let err = ShiftSet::new([OFF, DAY], ["遅出"]).unwrap_err();
        assert!(matches!(err, BuildError::UnknownWorkingShift(_)));
    }

    #[test]
    fn duplicate_shift_is_rejected() {
        let err = ShiftSet::new([OFF, DAY, DAY], [DAY]).unwrap_err();
        assert!(matches!(err, BuildError::DuplicateShift(_)));
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let horizon =
            Horizon::over_range(date(2025, 4, 10), date(2025, 5, 7), &HashSet::new()).unwrap();
        assert_eq!(horizon.len(), 28);
        assert_eq!(horizon.day(0).date, date(2025, 4, 10));
        assert_eq!(horizon.day(27).date, date(2025, 5, 7));
        assert_eq!(horizon.position(date(2025, 4, 29)), Some(19));
        assert_eq!(horizon.position(date(2025, 5, 8)), None);
    }

    #[test]
    fn backwards_range_is_rejected() {
        let err =
            Horizon::over_range(date(2025, 5, 7), date(2025, 4, 10), &HashSet::new()).unwrap_err();
        assert!(matches!(err, BuildError::InvalidDateRange { .. }));
    }

    #[test]
    fn holiday_flags_follow_the_holiday_set() {
        let holidays: HashSet<NaiveDate> = [date(2025, 4, 29)].into_iter().collect();
        let horizon =
            Horizon::over_range(date(2025, 4, 28), date(2025, 4, 30), &holidays).unwrap();
        assert!(!horizon.day(0).is_public_holiday);
        assert!(horizon.day(1).is_public_holiday);
        assert!(!horizon.day(2).is_public_holiday);
    }

    #[test]
    fn weekend_and_holiday_membership_is_a_single_flag() {
        // 2025-04-12 is a Saturday; marking it a holiday must not change
        // weekend-or-holiday membership.
        let saturday = date(2025, 4, 12);
        let holidays: HashSet<NaiveDate> = [saturday].into_iter().collect();
        let horizon = Horizon::over_range(saturday, saturday, &holidays).unwrap();
        let day = horizon.day(0);
        assert!(day.is_weekend());
        assert!(day.is_public_holiday);
        assert!(day.is_weekend_or_holiday());
    }

    #[test]
    fn roster_lookup_and_filters() {
        let roster = Roster::new(vec![
            Employee::new("E001", "佐藤", "常勤", "1F"),
            Employee::new("E002", "鈴木", "パート", "2F"),
            Employee::new("E003", "高橋", "常勤", "1F").with_status("育休"),
        ]);
        assert_eq!(roster.position("E002"), Some(1));
        assert_eq!(roster.position("E999"), None);
        assert_eq!(roster.floor_members("1F"), vec![0, 2]);
        assert_eq!(roster.with_employment_type("常勤"), vec![0, 2]);
        assert_eq!(roster.get(2).status.as_deref(), Some("育休"));
    }
}
