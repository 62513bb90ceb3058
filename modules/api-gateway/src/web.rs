use axum::Json;
use serde_json::{Value, json};

/// Detailed health response: status plus the current UTC timestamp.
#[allow(clippy::unused_async)] // axum handlers must be async
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Liveness probe.
#[allow(clippy::unused_async)]
pub async fn healthz() -> &'static str {
    "ok"
}
