use actix_web::{web, HttpResponse, Responder};
use log::warn;

use crate::convert::{parse_operators, to_domain_direction, to_solve_response, variable_names};
use crate::domain::solver::Solver;
use crate::domain::{solve as lp, validate};
use crate::models::{SolveRequest, ValidationErrorResponse};

/// POST /solve
pub async fn solve(
    req: web::Json<SolveRequest>,
    solver: web::Data<Box<dyn Solver>>,
) -> impl Responder {
    let req = req.into_inner();

    let errors = validate::validate(&req.objective, &req.constraints, &req.rhs, &req.operators);
    if !errors.is_empty() {
        return HttpResponse::BadRequest().json(ValidationErrorResponse {
            errors: errors.iter().map(|e| e.to_string()).collect(),
        });
    }

    let Some(operators) = parse_operators(&req.operators) else {
        // Validation already vetted the symbols; answered without panicking
        // anyway.
        warn!("operator parse failed after validation passed");
        return HttpResponse::InternalServerError()
            .json(serde_json::json!({ "error": "inconsistent operator symbols" }));
    };

    let num_variables = req.num_variables.unwrap_or(req.objective.len());
    let direction = to_domain_direction(req.direction);

    let result = lp::solve(
        &req.objective,
        &req.constraints,
        &req.rhs,
        &operators,
        num_variables,
        direction,
        solver.get_ref().as_ref(),
    );

    let names = variable_names(num_variables, req.variable_names.as_deref());
    HttpResponse::Ok().json(to_solve_response(result, &names))
}

/// GET /health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

/// GET /docs
pub async fn docs() -> impl Responder {
    let docs_html = include_str!("../static/docs.html");
    HttpResponse::Ok()
        .content_type("text/html")
        .body(docs_html)
}

/// GET / - Redirect to docs
pub async fn root_redirect() -> impl Responder {
    HttpResponse::Found()
        .append_header(("Location", "/docs"))
        .finish()
}

/// JSON extractor configuration shared by the server and the tests: payload
/// limit plus a 400 body in the same error shape the API uses elsewhere.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default().limit(limit).error_handler(|err, _| {
        let err_string = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "error": err_string })),
        )
        .into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root_redirect))
        .route("/solve", web::post().to(solve))
        .route("/health", web::get().to(health_check))
        .route("/docs", web::get().to(docs));
}
