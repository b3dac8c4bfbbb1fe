pub mod highs_solver;

#[cfg(feature = "microlp-solver")]
pub mod microlp_solver;

pub use highs_solver::HighsSolver;

#[cfg(feature = "microlp-solver")]
pub use microlp_solver::MicrolpSolver;
