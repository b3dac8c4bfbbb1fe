use highs::{HighsModelStatus, RowProblem, Sense};

use crate::domain::problem::{LpProblem, OptimizationDirection, RelOp};
use crate::domain::solver::{OptimalPoint, Solver, SolverFailure, SolverOutcome};

/// HiGHS solver implementation
pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        HighsSolver
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        HighsSolver::new()
    }
}

impl Solver for HighsSolver {
    fn solve(&self, problem: &LpProblem) -> Result<SolverOutcome, SolverFailure> {
        let mut row_problem = RowProblem::default();

        // One non-negative continuous column per decision variable, carrying
        // its objective coefficient.
        let columns: Vec<_> = problem
            .objective()
            .iter()
            .map(|&coefficient| row_problem.add_column(coefficient, 0.0..))
            .collect();

        for constraint in problem.constraints() {
            let factors: Vec<_> = columns
                .iter()
                .copied()
                .zip(constraint.coefficients.iter().copied())
                .collect();
            match constraint.op {
                RelOp::Le => row_problem.add_row(..=constraint.rhs, &factors),
                RelOp::Ge => row_problem.add_row(constraint.rhs.., &factors),
                RelOp::Eq => row_problem.add_row(constraint.rhs..=constraint.rhs, &factors),
            };
        }

        let sense = match problem.direction() {
            OptimizationDirection::Maximize => Sense::Maximise,
            OptimizationDirection::Minimize => Sense::Minimise,
        };

        let mut model = row_problem.optimise(sense);
        model.set_option("output_flag", false);
        // Presolve off so infeasible and unbounded come back as distinct
        // terminal statuses instead of UnboundedOrInfeasible.
        model.set_option("presolve", "off");

        let solved = model.solve();

        match solved.status() {
            HighsModelStatus::Optimal => {
                let solution = solved.get_solution();
                let variable_values: Vec<f64> = solution.columns().to_vec();
                let dual_values: Vec<Option<f64>> =
                    solution.dual_rows().iter().map(|&dual| Some(dual)).collect();

                // The binding does not surface the solver's objective value,
                // so it is recomputed from the optimal point.
                let objective_value = problem
                    .objective()
                    .iter()
                    .zip(variable_values.iter())
                    .map(|(coefficient, value)| coefficient * value)
                    .sum();

                Ok(SolverOutcome::Optimal(OptimalPoint {
                    variable_values,
                    objective_value,
                    dual_values,
                }))
            }
            HighsModelStatus::Infeasible => Ok(SolverOutcome::Infeasible),
            HighsModelStatus::UnboundedOrInfeasible => Ok(SolverOutcome::Unbounded),
            HighsModelStatus::Unbounded => Ok(SolverOutcome::Unbounded),
            other => Ok(SolverOutcome::Other(format!("{other:?}"))),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
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
        // Maximize 100 x1 + 80 x2 subject to 2 x1 + x2 <= 40 and
        // x1 + 2 x2 <= 50: optimum at (10, 20) with value 2600.
        let problem = LpProblem::new(
            vec![100.0, 80.0],
            &[vec![2.0, 1.0], vec![1.0, 2.0]],
            &[40.0, 50.0],
            &[RelOp::Le, RelOp::Le],
            2,
            OptimizationDirection::Maximize,
        )
        .unwrap();

        let outcome = HighsSolver::new().solve(&problem).unwrap();
        let SolverOutcome::Optimal(point) = outcome else {
            panic!("expected optimal outcome, got {outcome:?}");
        };
        assert!(close(point.variable_values[0], 10.0));
        assert!(close(point.variable_values[1], 20.0));
        assert!(close(point.objective_value, 2600.0));
        // Both constraints bind; their duals are 40 and 20 up to sign.
        assert_eq!(point.dual_values.len(), 2);
        assert!(close(point.dual_values[0].unwrap().abs(), 40.0));
        assert!(close(point.dual_values[1].unwrap().abs(), 20.0));
    }

    #[test]
    fn test_solve_given_contradictory_bounds_should_report_infeasible() {
        // x1 >= 10 and x1 <= 5 cannot both hold.
        let problem = LpProblem::new(
            vec![1.0],
            &[vec![1.0], vec![1.0]],
            &[10.0, 5.0],
            &[RelOp::Ge, RelOp::Le],
            1,
            OptimizationDirection::Maximize,
        )
        .unwrap();

        let outcome = HighsSolver::new().solve(&problem).unwrap();
        assert_eq!(outcome, SolverOutcome::Infeasible);
    }

    #[test]
    fn test_solve_given_no_upper_constraint_should_report_unbounded() {
        // Maximize x1 with only x1 >= 0 stated as a row.
        let problem = LpProblem::new(
            vec![1.0],
            &[vec![1.0]],
            &[0.0],
            &[RelOp::Ge],
            1,
            OptimizationDirection::Maximize,
        )
        .unwrap();

        let outcome = HighsSolver::new().solve(&problem).unwrap();
        assert_eq!(outcome, SolverOutcome::Unbounded);
    }

    #[test]
    fn test_solve_given_equality_constraint_should_hold_it_tight() {
        // Minimize x1 + x2 with x1 + x2 = 10.
        let problem = LpProblem::new(
            vec![1.0, 1.0],
            &[vec![1.0, 1.0]],
            &[10.0],
            &[RelOp::Eq],
            2,
            OptimizationDirection::Minimize,
        )
        .unwrap();

        let outcome = HighsSolver::new().solve(&problem).unwrap();
        let SolverOutcome::Optimal(point) = outcome else {
            panic!("expected optimal outcome, got {outcome:?}");
        };
        assert!(close(point.variable_values.iter().sum::<f64>(), 10.0));
        assert!(close(point.objective_value, 10.0));
    }
}
