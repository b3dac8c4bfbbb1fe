use crate::domain::problem::{LpProblem, RelOp};

/// Display-only tableau derived from the raw constraint matrix.
///
/// Layout: one row per constraint plus a final objective row; columns are the
/// raw variable coefficients, one slack/surplus indicator column per
/// constraint (+1 for <=, -1 for >=, 0 for =), and the right-hand side. The
/// objective row carries the raw objective coefficients, zeros under the
/// slack columns, and the optimal objective value in the last cell.
///
/// This is a presentation artifact, kept in the exact shape the original
/// calculator rendered: the constraint rows are pre-solve input while the
/// bottom-right cell is a post-solve scalar. It is never a pivoted simplex
/// state and must not be read as one.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTableau {
    num_variables: usize,
    num_constraints: usize,
    rows: Vec<Vec<f64>>,
}

impl DisplayTableau {
    pub fn build(problem: &LpProblem, objective_value: f64) -> DisplayTableau {
        let n = problem.num_variables();
        let m = problem.num_constraints();
        let width = n + m + 1;

        let mut rows = Vec::with_capacity(m + 1);
        for (i, constraint) in problem.constraints().iter().enumerate() {
            let mut row = vec![0.0; width];
            row[..n].copy_from_slice(&constraint.coefficients);
            row[n + i] = match constraint.op {
                RelOp::Le => 1.0,
                RelOp::Ge => -1.0,
                RelOp::Eq => 0.0,
            };
            row[width - 1] = constraint.rhs;
            rows.push(row);
        }

        let mut objective_row = vec![0.0; width];
        objective_row[..n].copy_from_slice(problem.objective());
        objective_row[width - 1] = objective_value;
        rows.push(objective_row);

        DisplayTableau {
            num_variables: n,
            num_constraints: m,
            rows,
        }
    }

    /// `num_constraints + 1` rows by `num_variables + num_constraints + 1`
    /// columns, always.
    pub fn dimensions(&self) -> (usize, usize) {
        (
            self.num_constraints + 1,
            self.num_variables + self.num_constraints + 1,
        )
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn num_constraints(&self) -> usize {
        self.num_constraints
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}
