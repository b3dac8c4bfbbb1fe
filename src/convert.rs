use crate::domain::problem::{Constraint, OptimizationDirection, RelOp};
use crate::domain::solve::{Optimum, SolveResult};
use crate::domain::tableau::DisplayTableau;
use crate::models::{
    ApiShadowPrice, ApiStatus, ApiTableau, ApiVariableValue, SolveResponse, SolverDirection,
};

// ---------- Helpers: convert API types → domain types ----------

pub fn to_domain_direction(direction: SolverDirection) -> OptimizationDirection {
    match direction {
        SolverDirection::Maximize => OptimizationDirection::Maximize,
        SolverDirection::Minimize => OptimizationDirection::Minimize,
    }
}

/// Parse operator symbols into relations. `None` if any symbol is unknown;
/// handlers run validation first, so that only happens on a programming
/// error, and it is answered with an error payload rather than a panic.
pub fn parse_operators(operators: &[String]) -> Option<Vec<RelOp>> {
    operators.iter().map(|op| RelOp::parse(op)).collect()
}

/// Resolve display names for the decision variables. Requested names apply
/// positionally; missing or blank entries fall back to `x<i>`, extras are
/// ignored.
pub fn variable_names(num_variables: usize, requested: Option<&[String]>) -> Vec<String> {
    (0..num_variables)
        .map(|i| {
            requested
                .and_then(|names| names.get(i))
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("x{}", i + 1))
        })
        .collect()
}

// ---------- Helpers: convert domain results → API types ----------

pub fn to_solve_response(result: SolveResult, names: &[String]) -> SolveResponse {
    match result {
        SolveResult::Optimal(optimum) => optimal_response(optimum, names),
        SolveResult::Infeasible => failure_response(
            ApiStatus::Infeasible,
            "the problem is infeasible: the constraints are inconsistent",
        ),
        SolveResult::Unbounded => failure_response(
            ApiStatus::Unbounded,
            "the problem is unbounded: the objective can grow indefinitely",
        ),
        SolveResult::SolverError { message } => failure_response(ApiStatus::Error, &message),
    }
}

fn optimal_response(optimum: Optimum, names: &[String]) -> SolveResponse {
    let variables = names
        .iter()
        .zip(optimum.solution.iter())
        .map(|(name, &value)| ApiVariableValue {
            name: name.clone(),
            value,
        })
        .collect();

    let shadow_prices = optimum
        .shadow_prices
        .iter()
        .enumerate()
        .map(|(index, &value)| ApiShadowPrice {
            constraint: Constraint::label(index),
            value,
        })
        .collect();

    let tableau = to_api_tableau(&optimum.tableau, names);

    SolveResponse {
        status: ApiStatus::Optimal,
        variables: Some(variables),
        objective_value: Some(optimum.objective_value),
        shadow_prices: Some(shadow_prices),
        tableau: Some(tableau),
        message: None,
    }
}

fn failure_response(status: ApiStatus, message: &str) -> SolveResponse {
    SolveResponse {
        status,
        variables: None,
        objective_value: None,
        shadow_prices: None,
        tableau: None,
        message: Some(message.to_string()),
    }
}

/// Header and label conventions reproduce the original rendering: variable
/// names, then one s<i> column per constraint, then "LD" for the right-hand
/// side; rows R1..Rm and "Z".
fn to_api_tableau(tableau: &DisplayTableau, names: &[String]) -> ApiTableau {
    let mut column_headers: Vec<String> = names.to_vec();
    column_headers.extend((1..=tableau.num_constraints()).map(|i| format!("s{i}")));
    column_headers.push("LD".to_string());

    let mut row_labels: Vec<String> =
        (1..=tableau.num_constraints()).map(|i| format!("R{i}")).collect();
    row_labels.push("Z".to_string());

    ApiTableau {
        column_headers,
        row_labels,
        rows: tableau.rows().to_vec(),
    }
}
