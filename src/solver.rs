//! Hands a built model to the backend solver and decodes the assignment.

use chrono::NaiveDate;
use good_lp::{constraint, default_solver, variable, Expression, Solution, SolverModel};

use crate::error::SolveError;
use crate::model::ScheduleModel;

/// A decoded schedule: one shift name per employee per day.
#[derive(Debug)]
pub struct SolvedSchedule {
    objective_value: f64,
    employee_ids: Vec<String>,
    dates: Vec<NaiveDate>,
    shift_names: Vec<String>,
    /// Shift index per `[employee][day]`.
    assignments: Vec<Vec<usize>>,
}

impl SolvedSchedule {
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    pub fn employee_ids(&self) -> &[String] {
        &self.employee_ids
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// The shift assigned to an employee on a date, if both resolve.
    pub fn shift_on(&self, employee_id: &str, date: NaiveDate) -> Option<&str> {
        let employee = self.employee_ids.iter().position(|id| id == employee_id)?;
        let day = self.dates.iter().position(|&d| d == date)?;
        Some(&self.shift_names[self.assignments[employee][day]])
    }

    /// The full row of shift names for one employee, in horizon order.
    pub fn row(&self, employee_id: &str) -> Option<Vec<&str>> {
        let employee = self.employee_ids.iter().position(|id| id == employee_id)?;
        Some(
            self.assignments[employee]
                .iter()
                .map(|&shift| self.shift_names[shift].as_str())
                .collect(),
        )
    }

    /// How often an employee is assigned the given shift over the horizon.
    pub fn count_shift(&self, employee_id: &str, shift_name: &str) -> usize {
        self.row(employee_id)
            .map(|row| row.iter().filter(|&&s| s == shift_name).count())
            .unwrap_or(0)
    }
}

/// Solves the model with the default `good_lp` backend and decodes the
/// one-hot grid into shift names.
pub fn solve(model: ScheduleModel) -> Result<SolvedSchedule, SolveError> {
    let ScheduleModel {
        mut variables,
        constraints,
        objective,
        grid,
        employee_ids,
        dates,
        shift_names,
        ..
    } = model;

    tracing::debug!(constraints = constraints.len(), "handing model to solver");
    // The objective is pinned to one auxiliary variable so its optimal value
    // can be read back from the solution.
    let cost = variables.add(variable().min(0.0));
    let mut problem = variables
        .minimise(Expression::from(cost))
        .using(default_solver);
    problem.add_constraint(constraint!(objective - cost == 0));
    for constraint in constraints {
        problem.add_constraint(constraint);
    }
    let solution = problem.solve()?;
    let objective_value = solution.value(cost);

    let mut assignments = vec![vec![0usize; dates.len()]; employee_ids.len()];
    for (employee, row) in assignments.iter_mut().enumerate() {
        for (day, slot) in row.iter_mut().enumerate() {
            let mut assigned = None;
            for shift in 0..shift_names.len() {
                if solution.value(grid.get(employee, day, shift)) > 0.5 {
                    if assigned.is_some() {
                        return Err(SolveError::AmbiguousCell {
                            employee: employee_ids[employee].clone(),
                            date: dates[day],
                        });
                    }
                    assigned = Some(shift);
                }
            }
            *slot = assigned.ok_or_else(|| SolveError::AmbiguousCell {
                employee: employee_ids[employee].clone(),
                date: dates[day],
            })?;
        }
    }

    Ok(SolvedSchedule {
        objective_value,
        employee_ids,
        dates,
        shift_names,
        assignments,
    })
}
