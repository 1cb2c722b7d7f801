//! Solver-model assembly: the assignment grid plus accumulated constraints
//! and penalty terms.

use chrono::NaiveDate;
use good_lp::{constraint, variable, Constraint, Expression, ProblemVariables, Variable};

use crate::domain::{Horizon, Roster, ShiftSet};
use crate::report::BuildReport;

/// Dense lookup for the binary assignment grid, indexed by
/// `(employee_index, date_index, shift_index)`.
#[derive(Clone, Debug)]
pub struct VariableGrid {
    vars: Vec<Variable>,
    days: usize,
    shifts: usize,
}

impl VariableGrid {
    pub fn get(&self, employee: usize, day: usize, shift: usize) -> Variable {
        self.vars[(employee * self.days + day) * self.shifts + shift]
    }
}

/// One weighted penalty term of the minimisation objective.
#[derive(Clone, Debug)]
pub struct PenaltyTerm {
    pub expression: Expression,
    pub weight: u32,
    pub label: String,
}

/// The finished model: variables, constraints and objective ready to hand to
/// a backend solver, plus the orderings needed to decode a solution.
pub struct ScheduleModel {
    pub variables: ProblemVariables,
    pub constraints: Vec<Constraint>,
    pub objective: Expression,
    pub penalties: Vec<PenaltyTerm>,
    pub grid: VariableGrid,
    pub employee_ids: Vec<String>,
    pub dates: Vec<NaiveDate>,
    pub shift_names: Vec<String>,
    pub report: BuildReport,
}

impl std::fmt::Debug for ScheduleModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduleModel")
            .field("constraints", &self.constraints)
            .field("objective", &self.objective)
            .field("penalties", &self.penalties)
            .field("grid", &self.grid)
            .field("employee_ids", &self.employee_ids)
            .field("dates", &self.dates)
            .field("shift_names", &self.shift_names)
            .field("report", &self.report)
            .finish()
    }
}

/// Accumulates the model during rule compilation.
///
/// The variable factory runs in [`ModelBuilder::new`]: it creates the full
/// `|E|·|D|·|S|` binary grid and the one-hot constraint per employee-day
/// cell. Everything else is rule-driven.
pub struct ModelBuilder<'a> {
    pub(crate) shifts: &'a ShiftSet,
    pub(crate) horizon: &'a Horizon,
    pub(crate) roster: &'a Roster,
    vars: ProblemVariables,
    var_count: usize,
    grid: VariableGrid,
    constraints: Vec<Constraint>,
    penalties: Vec<PenaltyTerm>,
    report: BuildReport,
    workday_totals: Vec<Option<Expression>>,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(shifts: &'a ShiftSet, horizon: &'a Horizon, roster: &'a Roster) -> Self {
        let mut vars = ProblemVariables::new();
        let cell_count = roster.len() * horizon.len() * shifts.len();
        let grid = VariableGrid {
            vars: vars.add_vector(variable().binary(), cell_count),
            days: horizon.len(),
            shifts: shifts.len(),
        };

        let mut constraints = Vec::new();
        for employee in 0..roster.len() {
            for day in 0..horizon.len() {
                let cell: Expression = (0..shifts.len())
                    .map(|shift| grid.get(employee, day, shift))
                    .sum();
                constraints.push(constraint!(cell == 1));
            }
        }

        Self {
            shifts,
            horizon,
            roster,
            vars,
            var_count: cell_count,
            grid,
            constraints,
            penalties: Vec::new(),
            report: BuildReport::default(),
            workday_totals: vec![None; roster.len()],
        }
    }

    pub fn assignment(&self, employee: usize, day: usize, shift: usize) -> Variable {
        self.grid.get(employee, day, shift)
    }

    pub fn push_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Fresh bounded integer slack variable.
    pub fn new_int_var(&mut self, min: u32, max: u32) -> Variable {
        self.var_count += 1;
        self.vars
            .add(variable().integer().min(min as f64).max(max as f64))
    }

    /// Fresh binary indicator variable.
    pub fn new_bool_var(&mut self) -> Variable {
        self.var_count += 1;
        self.vars.add(variable().binary())
    }

    /// Appends a weighted penalty term. Zero-weight terms are dropped.
    pub fn push_penalty(&mut self, expression: Expression, weight: u32, label: impl Into<String>) {
        if weight == 0 {
            return;
        }
        self.penalties.push(PenaltyTerm {
            expression,
            weight,
            label: label.into(),
        });
    }

    pub fn report_mut(&mut self) -> &mut BuildReport {
        &mut self.report
    }

    /// Work-indicator expression for one employee-day cell over the given
    /// shift indices.
    pub fn cell_sum(&self, employee: usize, day: usize, shift_indices: &[usize]) -> Expression {
        shift_indices
            .iter()
            .map(|&shift| self.grid.get(employee, day, shift))
            .sum()
    }

    /// Daily headcount expression over a group of employees for one shift.
    pub fn headcount(&self, employees: &[usize], day: usize, shift: usize) -> Expression {
        employees
            .iter()
            .map(|&employee| self.grid.get(employee, day, shift))
            .sum()
    }

    /// Total workdays of one employee over the horizon, counted over the
    /// alphabet's working subset. Memoised per employee.
    pub fn workday_total(&mut self, employee: usize) -> Expression {
        if let Some(total) = &self.workday_totals[employee] {
            return total.clone();
        }
        let grid = &self.grid;
        let working = self.shifts.working_indices();
        let total: Expression = (0..self.horizon.len())
            .flat_map(|day| working.iter().map(move |&shift| grid.get(employee, day, shift)))
            .sum();
        self.workday_totals[employee] = Some(total.clone());
        total
    }

    /// Assembles the objective and seals the model.
    pub fn finish(self) -> ScheduleModel {
        let objective: Expression = self
            .penalties
            .iter()
            .map(|term| term.weight as f64 * term.expression.clone())
            .sum();

        let mut report = self.report;
        report.variables_count = self.var_count;
        report.constraints_count = self.constraints.len();
        report.penalty_terms_count = self.penalties.len();
        tracing::debug!(
            variables = report.variables_count,
            constraints = report.constraints_count,
            penalty_terms = report.penalty_terms_count,
            "schedule model assembled"
        );

        ScheduleModel {
            variables: self.vars,
            constraints: self.constraints,
            objective,
            penalties: self.penalties,
            grid: self.grid,
            employee_ids: self.roster.employees().iter().map(|e| e.id.clone()).collect(),
            dates: self.horizon.dates().collect(),
            shift_names: self.shifts.names().to_vec(),
            report,
        }
    }
}
