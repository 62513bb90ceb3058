//! Query-string binding for operation operands.

use axum::extract::{FromRequestParts, OriginalUri, Query};
use axum::http::request::Parts;
use calc_errors::Problem;
use serde::de::DeserializeOwned;

use super::error::malformed_request;

/// Like `axum::extract::Query`, but rejects with a `MALFORMED_REQUEST` Problem.
#[derive(Debug, Clone, Copy)]
pub struct Operands<T>(pub T);

impl<S, T> FromRequestParts<S> for Operands<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                let uri = parts
                    .extensions
                    .get::<OriginalUri>()
                    .map_or(&parts.uri, |original| &original.0);
                Err(malformed_request(rejection.body_text(), uri))
            }
        }
    }
}
