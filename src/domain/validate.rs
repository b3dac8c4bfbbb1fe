use thiserror::Error;

use crate::domain::problem::RelOp;

/// A shape or type problem in the raw input. Validation runs every check and
/// accumulates; it never attempts a solve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("objective coefficients must be numeric")]
    ObjectiveNotNumeric,
    #[error("at least one constraint is required")]
    NoConstraints,
    #[error("all constraint rows must have the same number of coefficients")]
    RaggedConstraints,
    #[error("constraint rows, right-hand sides and operators must have the same count")]
    CountMismatch,
    #[error("unrecognized relation operator `{0}`")]
    UnknownOperator(String),
    #[error("right-hand side values must be numeric")]
    RhsNotNumeric,
}

/// Check a raw problem description before any solve attempt. Returns all
/// violations in check order; an empty list means the input is solvable in
/// shape. Each check contributes at most one entry.
///
/// Numeric here means finite: NaN and the infinities are the `f64` values a
/// deserialized form can smuggle past the type system.
pub fn validate(
    objective: &[f64],
    constraints: &[Vec<f64>],
    rhs: &[f64],
    operators: &[String],
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !objective.iter().all(|c| c.is_finite()) {
        errors.push(ValidationError::ObjectiveNotNumeric);
    }

    if constraints.is_empty() {
        errors.push(ValidationError::NoConstraints);
    }

    // Rows are compared against the first row, not the objective; a row set
    // that is internally consistent but disagrees with the objective is
    // caught later, at model construction.
    if let Some(first) = constraints.first() {
        if constraints.iter().any(|row| row.len() != first.len()) {
            errors.push(ValidationError::RaggedConstraints);
        }
    }

    if rhs.len() != constraints.len() || operators.len() != constraints.len() {
        errors.push(ValidationError::CountMismatch);
    }

    if let Some(bad) = operators.iter().find(|op| RelOp::parse(op).is_none()) {
        errors.push(ValidationError::UnknownOperator(bad.clone()));
    }

    if !rhs.iter().all(|b| b.is_finite()) {
        errors.push(ValidationError::RhsNotNumeric);
    }

    errors
}
