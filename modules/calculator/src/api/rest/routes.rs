//! Route registration for the calculator module

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use crate::domain::Service;

use super::handlers;

/// Operation names, one GET route each under the base path.
pub const OPERATIONS: [&str; 15] = [
    "add", "subtract", "multiply", "divide", "power", "sqrt", "log", "log10", "factorial", "sin",
    "cos", "tan", "asin", "acos", "atan",
];

/// Register all REST routes for the calculator module.
///
/// # Arguments
/// * `router` - Axum router to add routes to
/// * `base_path` - Prefix the operations are nested under, e.g. `/api/calc`
/// * `service` - Domain Service
#[must_use]
pub fn register_routes(router: Router, base_path: &str, service: Arc<Service>) -> Router {
    let calc = Router::new()
        .route("/add", get(handlers::add))
        .route("/subtract", get(handlers::subtract))
        .route("/multiply", get(handlers::multiply))
        .route("/divide", get(handlers::divide))
        .route("/power", get(handlers::power))
        .route("/sqrt", get(handlers::sqrt))
        .route("/log", get(handlers::log))
        .route("/log10", get(handlers::log10))
        .route("/factorial", get(handlers::factorial))
        .route("/sin", get(handlers::sin))
        .route("/cos", get(handlers::cos))
        .route("/tan", get(handlers::tan))
        .route("/asin", get(handlers::asin))
        .route("/acos", get(handlers::acos))
        .route("/atan", get(handlers::atan))
        .layer(Extension(service));

    tracing::debug!(base_path, operations = OPERATIONS.len(), "calculator routes built");
    router.nest(base_path, calc)
}
