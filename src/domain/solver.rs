use thiserror::Error;

use crate::domain::problem::LpProblem;

/// Common interface for LP solver backends.
///
/// The core consumes the external solving capability through exactly this
/// surface: a terminal status plus, on optimality, the variable values, the
/// objective value and the per-constraint duals. Any conforming backend can
/// be substituted without touching validation or tableau derivation.
pub trait Solver: Send + Sync {
    /// Solve one linear programming problem to completion. Backend faults
    /// (malformed model, numerical failure) come back as `SolverFailure`,
    /// never as a panic.
    fn solve(&self, problem: &LpProblem) -> Result<SolverOutcome, SolverFailure>;

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;
}

/// Terminal status reported by a backend.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverOutcome {
    Optimal(OptimalPoint),
    /// The constraints admit no feasible point.
    Infeasible,
    /// The objective can be improved without bound.
    Unbounded,
    /// Any other terminal status, by backend name (time limit, numerical
    /// trouble, ...). Surfaced to callers as a solver error.
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimalPoint {
    /// One value per decision variable, in declaration order.
    pub variable_values: Vec<f64>,
    pub objective_value: f64,
    /// Raw signed dual per constraint, `None` where the backend exposes
    /// none. Sign normalization happens in the result mapping, not here.
    pub dual_values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{details}")]
pub struct SolverFailure {
    pub details: String,
}
