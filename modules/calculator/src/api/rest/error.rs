use axum::http::Uri;
use calc_errors::{Problem, WithRequestContext, bad_request, error_type_url};
use http::StatusCode;

use crate::domain::DomainError;

pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const MALFORMED_REQUEST: &str = "MALFORMED_REQUEST";

/// Map domain error to RFC 9457 Problem
#[must_use]
pub fn domain_error_to_problem(e: &DomainError, uri: &Uri) -> Problem {
    match e {
        DomainError::InvalidArgument { message } => {
            tracing::debug!(error = %e, path = uri.path(), "rejected invalid argument");
            Problem::new(StatusCode::BAD_REQUEST, "Invalid Argument", message.clone())
                .with_code(INVALID_ARGUMENT)
                .with_type(error_type_url(INVALID_ARGUMENT))
                .with_request_context(uri)
        }
    }
}

/// Problem for a query string that is missing operands or holds non-numeric ones.
#[must_use]
pub fn malformed_request(detail: impl Into<String>, uri: &Uri) -> Problem {
    bad_request(detail)
        .with_code(MALFORMED_REQUEST)
        .with_type(error_type_url(MALFORMED_REQUEST))
        .with_request_context(uri)
}
