use log::debug;

use crate::domain::problem::{LpProblem, OptimizationDirection, RelOp};
use crate::domain::solver::{Solver, SolverOutcome};
use crate::domain::tableau::DisplayTableau;

/// Terminal result of one solve request. Every kind maps to a distinct
/// user-visible explanation; none triggers a retry.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveResult {
    Optimal(Optimum),
    Infeasible,
    Unbounded,
    SolverError { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Optimum {
    /// One value per decision variable, in declaration order.
    pub solution: Vec<f64>,
    pub objective_value: f64,
    /// One entry per constraint. Duals are reported as absolute values; the
    /// backend's sign convention is not surfaced. Constraints without a dual
    /// report 0.0.
    pub shadow_prices: Vec<f64>,
    pub tableau: DisplayTableau,
}

/// Build the model from already-validated parts, hand it to the backend, and
/// map the outcome. Model-construction failures and backend faults become
/// `SolveResult::SolverError`; nothing escapes as a panic or raw error.
pub fn solve(
    objective: &[f64],
    constraints: &[Vec<f64>],
    rhs: &[f64],
    operators: &[RelOp],
    num_variables: usize,
    direction: OptimizationDirection,
    solver: &dyn Solver,
) -> SolveResult {
    let problem = match LpProblem::new(
        objective.to_vec(),
        constraints,
        rhs,
        operators,
        num_variables,
        direction,
    ) {
        Ok(problem) => problem,
        Err(err) => {
            return SolveResult::SolverError {
                message: err.to_string(),
            }
        }
    };

    debug!(
        "solving {} variables / {} constraints with {}",
        problem.num_variables(),
        problem.num_constraints(),
        solver.name()
    );

    match solver.solve(&problem) {
        Ok(SolverOutcome::Optimal(point)) => {
            let shadow_prices = point
                .dual_values
                .iter()
                .map(|dual| dual.unwrap_or(0.0).abs())
                .collect();
            let tableau = DisplayTableau::build(&problem, point.objective_value);
            SolveResult::Optimal(Optimum {
                solution: point.variable_values,
                objective_value: point.objective_value,
                shadow_prices,
                tableau,
            })
        }
        Ok(SolverOutcome::Infeasible) => SolveResult::Infeasible,
        Ok(SolverOutcome::Unbounded) => SolveResult::Unbounded,
        Ok(SolverOutcome::Other(status)) => SolveResult::SolverError {
            message: format!("solver finished with non-optimal status: {status}"),
        },
        Err(failure) => SolveResult::SolverError {
            message: failure.details,
        },
    }
}
