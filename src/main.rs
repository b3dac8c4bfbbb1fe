use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::warn;
use std::env;

use lp_calculator::domain::solver_factory::{create_solver, SolverType};
use lp_calculator::routes;

// ---------- Server bootstrap ----------
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let _sentry_guard = env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(9000);

    let json_limit = env::var("JSON_PAYLOAD_LIMIT")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(2 * 1024 * 1024); // default 2 MB

    let solver_type = match env::var("SOLVER_BACKEND") {
        Ok(name) => SolverType::from_str(&name).unwrap_or_else(|| {
            warn!("unknown solver backend `{name}`, falling back to HiGHS");
            SolverType::Highs
        }),
        Err(_) => SolverType::Highs,
    };

    println!("Starting server on http://127.0.0.1:{} ({:?} backend)", port, solver_type);
    HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .wrap(Logger::default())
            .app_data(web::Data::new(create_solver(solver_type)))
            .app_data(routes::json_config(json_limit))
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
