use microlp::{ComparisonOp, OptimizationDirection as MicrolpDirection, Problem};

use crate::domain::problem::{LpProblem, OptimizationDirection, RelOp};
use crate::domain::solver::{OptimalPoint, Solver, SolverFailure, SolverOutcome};

/// Pure-Rust fallback backend.
///
/// microlp exposes no dual values, so every constraint reports `None` and
/// shadow prices render as 0.0 when solving through this backend.
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        MicrolpSolver
    }
}

impl Default for MicrolpSolver {
    fn default() -> Self {
        MicrolpSolver::new()
    }
}

impl Solver for MicrolpSolver {
    fn solve(&self, problem: &LpProblem) -> Result<SolverOutcome, SolverFailure> {
        let direction = match problem.direction() {
            OptimizationDirection::Maximize => MicrolpDirection::Maximize,
            OptimizationDirection::Minimize => MicrolpDirection::Minimize,
        };

        let mut model = Problem::new(direction);
        let variables: Vec<_> = problem
            .objective()
            .iter()
            .map(|&coefficient| model.add_var(coefficient, (0.0, f64::INFINITY)))
            .collect();

        for constraint in problem.constraints() {
            let expr: Vec<_> = variables
                .iter()
                .copied()
                .zip(constraint.coefficients.iter().copied())
                .collect();
            let op = match constraint.op {
                RelOp::Le => ComparisonOp::Le,
                RelOp::Ge => ComparisonOp::Ge,
                RelOp::Eq => ComparisonOp::Eq,
            };
            model.add_constraint(expr, op, constraint.rhs);
        }

        match model.solve() {
            Ok(solution) => {
                let variable_values: Vec<f64> =
                    variables.iter().map(|&var| solution[var]).collect();
                let objective_value = solution.objective();
                Ok(SolverOutcome::Optimal(OptimalPoint {
                    variable_values,
                    objective_value,
                    dual_values: vec![None; problem.num_constraints()],
                }))
            }
            Err(microlp::Error::Infeasible) => Ok(SolverOutcome::Infeasible),
            Err(microlp::Error::Unbounded) => Ok(SolverOutcome::Unbounded),
            Err(other) => Err(SolverFailure {
                details: other.to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "microlp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_solve_production_problem_should_return_known_optimum() {
        let problem = LpProblem::new(
            vec![100.0, 80.0],
            &[vec![2.0, 1.0], vec![1.0, 2.0]],
            &[40.0, 50.0],
            &[RelOp::Le, RelOp::Le],
            2,
            OptimizationDirection::Maximize,
        )
        .unwrap();

        let outcome = MicrolpSolver::new().solve(&problem).unwrap();
        let SolverOutcome::Optimal(point) = outcome else {
            panic!("expected optimal outcome, got {outcome:?}");
        };
        assert!(close(point.variable_values[0], 10.0));
        assert!(close(point.variable_values[1], 20.0));
        assert!(close(point.objective_value, 2600.0));
        // No duals through this backend.
        assert_eq!(point.dual_values, vec![None, None]);
    }

    #[test]
    fn test_solve_given_contradictory_bounds_should_report_infeasible() {
        let problem = LpProblem::new(
            vec![1.0],
            &[vec![1.0], vec![1.0]],
            &[10.0, 5.0],
            &[RelOp::Ge, RelOp::Le],
            1,
            OptimizationDirection::Maximize,
        )
        .unwrap();

        let outcome = MicrolpSolver::new().solve(&problem).unwrap();
        assert_eq!(outcome, SolverOutcome::Infeasible);
    }

    #[test]
    fn test_solve_given_no_upper_constraint_should_report_unbounded() {
        let problem = LpProblem::new(
            vec![1.0],
            &[vec![1.0]],
            &[0.0],
            &[RelOp::Ge],
            1,
            OptimizationDirection::Maximize,
        )
        .unwrap();

        let outcome = MicrolpSolver::new().solve(&problem).unwrap();
        assert_eq!(outcome, SolverOutcome::Unbounded);
    }
}
