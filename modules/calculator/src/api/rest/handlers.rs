//! REST handlers for the calculator module
//!
//! One handler per operation. Operands are bound from the query string,
//! the result is returned as a bare JSON number.

#![allow(clippy::unused_async)] // axum handlers must be async

use std::sync::Arc;

use axum::extract::OriginalUri;
use axum::{Extension, Json};
use calc_errors::Problem;

use crate::domain::Service;

use super::dto::{BinaryOperands, FactorialOperand, UnaryOperand};
use super::error::domain_error_to_problem;
use super::extract::Operands;

pub type ApiResult<T> = Result<T, Problem>;

/// Handler for GET `{base}/add`
pub async fn add(
    Extension(svc): Extension<Arc<Service>>,
    Operands(BinaryOperands { a, b }): Operands<BinaryOperands>,
) -> Json<f64> {
    Json(svc.add(a, b))
}

/// Handler for GET `{base}/subtract`
pub async fn subtract(
    Extension(svc): Extension<Arc<Service>>,
    Operands(BinaryOperands { a, b }): Operands<BinaryOperands>,
) -> Json<f64> {
    Json(svc.subtract(a, b))
}

/// Handler for GET `{base}/multiply`
pub async fn multiply(
    Extension(svc): Extension<Arc<Service>>,
    Operands(BinaryOperands { a, b }): Operands<BinaryOperands>,
) -> Json<f64> {
    Json(svc.multiply(a, b))
}

/// Handler for GET `{base}/divide`
pub async fn divide(
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Operands(BinaryOperands { a, b }): Operands<BinaryOperands>,
) -> ApiResult<Json<f64>> {
    let quotient = svc
        .divide(a, b)
        .map_err(|e| domain_error_to_problem(&e, &uri))?;
    Ok(Json(quotient))
}

/// Handler for GET `{base}/power`
pub async fn power(
    Extension(svc): Extension<Arc<Service>>,
    Operands(BinaryOperands { a, b }): Operands<BinaryOperands>,
) -> Json<f64> {
    Json(svc.power(a, b))
}

/// Handler for GET `{base}/sqrt`
pub async fn sqrt(
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Operands(UnaryOperand { a }): Operands<UnaryOperand>,
) -> ApiResult<Json<f64>> {
    let root = svc.sqrt(a).map_err(|e| domain_error_to_problem(&e, &uri))?;
    Ok(Json(root))
}

/// Handler for GET `{base}/log`
pub async fn log(
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Operands(UnaryOperand { a }): Operands<UnaryOperand>,
) -> ApiResult<Json<f64>> {
    let ln = svc.log(a).map_err(|e| domain_error_to_problem(&e, &uri))?;
    Ok(Json(ln))
}

/// Handler for GET `{base}/log10`
pub async fn log10(
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Operands(UnaryOperand { a }): Operands<UnaryOperand>,
) -> ApiResult<Json<f64>> {
    let lg = svc.log10(a).map_err(|e| domain_error_to_problem(&e, &uri))?;
    Ok(Json(lg))
}

/// Handler for GET `{base}/factorial`
pub async fn factorial(
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Operands(FactorialOperand { n }): Operands<FactorialOperand>,
) -> ApiResult<Json<i64>> {
    let product = svc
        .factorial(n)
        .map_err(|e| domain_error_to_problem(&e, &uri))?;
    Ok(Json(product))
}

/// Handler for GET `{base}/sin`
pub async fn sin(
    Extension(svc): Extension<Arc<Service>>,
    Operands(UnaryOperand { a }): Operands<UnaryOperand>,
) -> Json<f64> {
    Json(svc.sin(a))
}

/// Handler for GET `{base}/cos`
pub async fn cos(
    Extension(svc): Extension<Arc<Service>>,
    Operands(UnaryOperand { a }): Operands<UnaryOperand>,
) -> Json<f64> {
    Json(svc.cos(a))
}

/// Handler for GET `{base}/tan`
pub async fn tan(
    Extension(svc): Extension<Arc<Service>>,
    Operands(UnaryOperand { a }): Operands<UnaryOperand>,
) -> Json<f64> {
    Json(svc.tan(a))
}

/// Handler for GET `{base}/asin`
pub async fn asin(
    Extension(svc): Extension<Arc<Service>>,
    Operands(UnaryOperand { a }): Operands<UnaryOperand>,
) -> Json<f64> {
    Json(svc.asin(a))
}

/// Handler for GET `{base}/acos`
pub async fn acos(
    Extension(svc): Extension<Arc<Service>>,
    Operands(UnaryOperand { a }): Operands<UnaryOperand>,
) -> Json<f64> {
    Json(svc.acos(a))
}

/// Handler for GET `{base}/atan`
pub async fn atan(
    Extension(svc): Extension<Arc<Service>>,
    Operands(UnaryOperand { a }): Operands<UnaryOperand>,
) -> Json<f64> {
    Json(svc.atan(a))
}
