use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::config::{ApiGatewayConfig, CorsConfig};

/// Build a CORS layer from config.
///
/// # Errors
///
/// Returns an error if `allow_credentials` is `true` while `allowed_origins` contains `"*"`.
/// Browsers reject that combination.
pub fn build_cors_layer(cfg: &ApiGatewayConfig) -> anyhow::Result<CorsLayer> {
    let cors_cfg: CorsConfig = cfg.cors.clone().unwrap_or_default();

    let has_wildcard_origin = cors_cfg.allowed_origins.iter().any(|o| o == "*");

    if has_wildcard_origin && cors_cfg.allow_credentials {
        anyhow::bail!(
            "CORS misconfiguration: allowed_origins=['*'] cannot be combined with \
             allow_credentials=true; list explicit origins instead"
        );
    }

    let mut layer = CorsLayer::new();

    if has_wildcard_origin {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_cfg
            .allowed_origins
            .iter()
            .filter_map(|s| match HeaderValue::from_str(s) {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %s, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        if !origins.is_empty() {
            layer = layer.allow_origin(origins);
        }
    }

    if cors_cfg.allowed_methods.iter().any(|m| m == "*") {
        layer = layer.allow_methods(Any);
    } else {
        let methods: Vec<Method> = cors_cfg
            .allowed_methods
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        if !methods.is_empty() {
            layer = layer.allow_methods(methods);
        }
    }

    if cors_cfg.allowed_headers.iter().any(|h| h == "*") {
        layer = layer.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = cors_cfg
            .allowed_headers
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        if !headers.is_empty() {
            layer = layer.allow_headers(headers);
        }
    }

    if cors_cfg.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    if cors_cfg.max_age_seconds > 0 {
        layer = layer.max_age(Duration::from_secs(cors_cfg.max_age_seconds));
    }

    Ok(layer)
}
