use crate::domain::solver::Solver;
use crate::domain::solvers::HighsSolver;

#[cfg(feature = "microlp-solver")]
use crate::domain::solvers::MicrolpSolver;

/// Available solver backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverType {
    Highs,
    #[cfg(feature = "microlp-solver")]
    Microlp,
}

impl SolverType {
    /// Parse solver type from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "highs" => Some(SolverType::Highs),
            #[cfg(feature = "microlp-solver")]
            "microlp" => Some(SolverType::Microlp),
            _ => None,
        }
    }
}

/// Create a solver instance based on the specified type
pub fn create_solver(solver_type: SolverType) -> Box<dyn Solver> {
    match solver_type {
        SolverType::Highs => Box::new(HighsSolver::new()),
        #[cfg(feature = "microlp-solver")]
        SolverType::Microlp => Box::new(MicrolpSolver::new()),
    }
}
