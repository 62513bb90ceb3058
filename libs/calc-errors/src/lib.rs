//! Error types shared by the calc server crates
//!
//! - RFC 9457 Problem Details (`Problem`) with axum integration
//! - Convenience constructors for the status codes the server emits
//! - Request context enrichment (`instance` and `trace_id`)

pub mod context;
pub mod problem;

pub use context::{WithRequestContext, current_trace_id};
pub use problem::{APPLICATION_PROBLEM_JSON, Problem, bad_request, internal_error, not_found};

/// Base URI for the `type` member of every Problem the server emits.
pub const ERROR_TYPE_BASE: &str = "https://errors.calc.local";

/// Build the `type` URI for a machine-readable error code.
#[must_use]
pub fn error_type_url(code: &str) -> String {
    format!("{ERROR_TYPE_BASE}/{code}")
}
