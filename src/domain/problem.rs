use std::fmt;

use thiserror::Error;

/// Whether the objective function is maximized or minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationDirection {
    Maximize,
    Minimize,
}

/// Relation between a constraint's left-hand side and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Le,
    Ge,
    Eq,
}

impl RelOp {
    /// Parse a relation symbol. Accepts the ASCII spellings and the
    /// typographic forms the original form widgets emitted.
    pub fn parse(symbol: &str) -> Option<RelOp> {
        match symbol.trim() {
            "<=" | "≤" => Some(RelOp::Le),
            ">=" | "≥" => Some(RelOp::Ge),
            "=" | "==" => Some(RelOp::Eq),
            _ => None,
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            RelOp::Le => "<=",
            RelOp::Ge => ">=",
            RelOp::Eq => "=",
        };
        f.write_str(symbol)
    }
}

/// A single linear constraint: `coefficients · x  op  rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Stable identifier, `Restricao_<k>` with k 1-indexed. Responses key
    /// shadow prices by this name, so the convention is part of the wire
    /// format.
    pub name: String,
    pub coefficients: Vec<f64>,
    pub op: RelOp,
    pub rhs: f64,
}

impl Constraint {
    /// Identifier of the constraint at `index` (0-based in, 1-indexed out).
    pub fn label(index: usize) -> String {
        format!("Restricao_{}", index + 1)
    }
}

/// Raised when the problem parts cannot be assembled into a coherent model.
/// Surfaced to callers as a solver error, never as a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("objective has {found} coefficients, expected {expected}")]
    ObjectiveWidth { found: usize, expected: usize },
    #[error("constraint {index} has {found} coefficients, expected {expected}")]
    ConstraintWidth {
        index: usize,
        found: usize,
        expected: usize,
    },
    #[error(
        "{constraints} constraint rows, {rhs} right-hand sides, {operators} operators; counts must match"
    )]
    CountMismatch {
        constraints: usize,
        rhs: usize,
        operators: usize,
    },
}

/// An immutable LP model: one objective, a set of constraints, a direction.
///
/// Decision variables are implicit: one non-negative continuous variable per
/// index `0..num_variables`, lower bound 0, no upper bound. Free or bounded
/// variables are not supported. A problem is built fresh per solve request
/// and discarded with its result.
#[derive(Debug, Clone, PartialEq)]
pub struct LpProblem {
    objective: Vec<f64>,
    constraints: Vec<Constraint>,
    direction: OptimizationDirection,
    num_variables: usize,
}

impl LpProblem {
    pub fn new(
        objective: Vec<f64>,
        rows: &[Vec<f64>],
        rhs: &[f64],
        operators: &[RelOp],
        num_variables: usize,
        direction: OptimizationDirection,
    ) -> Result<LpProblem, ModelError> {
        if objective.len() != num_variables {
            return Err(ModelError::ObjectiveWidth {
                found: objective.len(),
                expected: num_variables,
            });
        }
        if rhs.len() != rows.len() || operators.len() != rows.len() {
            return Err(ModelError::CountMismatch {
                constraints: rows.len(),
                rhs: rhs.len(),
                operators: operators.len(),
            });
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != num_variables {
                return Err(ModelError::ConstraintWidth {
                    index,
                    found: row.len(),
                    expected: num_variables,
                });
            }
        }

        let constraints = rows
            .iter()
            .enumerate()
            .map(|(index, row)| Constraint {
                name: Constraint::label(index),
                coefficients: row.clone(),
                op: operators[index],
                rhs: rhs[index],
            })
            .collect();

        Ok(LpProblem {
            objective,
            constraints,
            direction,
            num_variables,
        })
    }

    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn direction(&self) -> OptimizationDirection {
        self.direction
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}
