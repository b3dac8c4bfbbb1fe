//! # LP Calculator
//!
//! An HTTP service for solving linear programming problems: describe an
//! objective and a set of linear constraints, get back the optimal point, the
//! optimal value, per-constraint shadow prices and a simplified display
//! tableau.
//!
//! The solving itself is delegated to an external LP backend (HiGHS by
//! default) behind the narrow [`domain::solver::Solver`] trait; this crate
//! contributes input validation, model construction and the tableau
//! derivation. The pure core lives under [`domain`] and is usable without the
//! HTTP layer.

pub mod convert;
pub mod domain;
pub mod models;
pub mod routes;
