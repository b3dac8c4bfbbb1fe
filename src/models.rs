use serde::{Deserialize, Serialize};

// ---------- API (wire) types: owned & serde-friendly ----------

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum SolverDirection {
    Maximize,
    Minimize,
}

#[derive(Deserialize, Clone)]
pub struct SolveRequest {
    /// Objective coefficients, one per decision variable.
    pub objective: Vec<f64>,
    /// Constraint coefficient rows.
    pub constraints: Vec<Vec<f64>>,
    /// Right-hand side per constraint.
    pub rhs: Vec<f64>,
    /// Relation symbol per constraint: "<=", ">=", "=" (or the typographic
    /// forms).
    pub operators: Vec<String>,
    pub direction: SolverDirection,
    /// Defaults to the objective length.
    #[serde(default)]
    pub num_variables: Option<usize>,
    /// Optional display names; missing or blank entries fall back to x1..xn.
    #[serde(default)]
    pub variable_names: Option<Vec<String>>,
}

// ---------- API response types (decoupled from the domain) ----------

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Optimal,
    Infeasible,
    Unbounded,
    Error,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiVariableValue {
    pub name: String,
    pub value: f64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiShadowPrice {
    /// Constraint identifier, `Restricao_<k>`.
    pub constraint: String,
    pub value: f64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiTableau {
    /// Variable names, then s1..sm, then "LD".
    pub column_headers: Vec<String>,
    /// R1..Rm, then "Z".
    pub row_labels: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SolveResponse {
    pub status: ApiStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<ApiVariableValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_prices: Option<Vec<ApiShadowPrice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tableau: Option<ApiTableau>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}
