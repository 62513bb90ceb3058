//! Request context enrichment for Problem responses
//!
//! Fills `instance` from the request path and `trace_id` from the current
//! tracing span so handlers do not repeat that boilerplate.

use axum::http::Uri;

use crate::problem::Problem;

/// Id of the current tracing span, if one is entered.
#[must_use]
pub fn current_trace_id() -> Option<String> {
    tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string())
}

pub trait WithRequestContext {
    /// Attach the request path as `instance` and the current span id as `trace_id`.
    #[must_use]
    fn with_request_context(self, uri: &Uri) -> Self;
}

impl WithRequestContext for Problem {
    fn with_request_context(self, uri: &Uri) -> Self {
        let problem = self.with_instance(uri.path());
        match current_trace_id() {
            Some(tid) => problem.with_trace_id(tid),
            None => problem,
        }
    }
}
