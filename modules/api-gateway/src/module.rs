//! API Gateway module definition
//!
//! Builds the HTTP router from the registered modules, applies the middleware
//! stack, and serves it until the cancellation token fires.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::Router;
use axum::body::Body;
use axum::extract::OriginalUri;
use axum::handler::HandlerWithoutStateExt;
use axum::http::{Request, Response, StatusCode};
use axum::routing::get;
use calc_errors::{Problem, WithRequestContext, not_found};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::ApiGatewayConfig;
use crate::contracts::RestApiCapability;
use crate::middleware::request_id;
use crate::web;

/// HTTP host: owns the listener and the middleware stack.
pub struct ApiGateway {
    config: ApiGatewayConfig,
}

impl Default for ApiGateway {
    fn default() -> Self {
        Self::new(ApiGatewayConfig::default())
    }
}

impl ApiGateway {
    #[must_use]
    pub fn new(config: ApiGatewayConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiGatewayConfig {
        &self.config
    }

    /// Build the HTTP router: health endpoints, every module's routes, the
    /// optional static asset directory, a Problem-returning fallback, and
    /// the middleware stack.
    ///
    /// # Errors
    /// Returns an error if a module fails to register, `static_dir` is not a
    /// directory, or the CORS config is invalid.
    pub fn build_router(&self, modules: &[Arc<dyn RestApiCapability>]) -> Result<Router> {
        // /health: detailed JSON response with status and timestamp
        // /healthz: simple "ok" liveness probe
        let mut router = Router::new()
            .route("/health", get(web::health_check))
            .route("/healthz", get(web::healthz));

        for module in modules {
            router = module.register_rest(router)?;
            tracing::info!(module = module.name(), "REST routes registered");
        }

        let router = match self.static_dir()? {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "Serving static assets");
                router.fallback_service(ServeDir::new(dir).fallback(route_not_found.into_service()))
            }
            None => router.fallback(route_not_found),
        };
        self.apply_middleware_stack(router)
    }

    /// Apply trace layer to router.
    fn apply_trace_layer(router: Router) -> Router {
        router.layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri().path(),
                        version = ?req.version(),
                        request_id = %request_id::request_id_of(req),
                        status = Empty,
                        latency_ms = Empty,
                    )
                })
                .on_response(
                    |res: &Response<Body>, latency: Duration, span: &tracing::Span| {
                        span.record("status", res.status().as_u16());
                        span.record("latency_ms", latency.as_millis());
                    },
                ),
        )
    }

    /// Apply all middleware layers to a router.
    ///
    /// Layers are registered innermost first. At runtime a request flows
    /// `SetRequestId` -> `PropagateRequestId` -> Trace -> Timeout -> CORS -> Router.
    pub(crate) fn apply_middleware_stack(&self, mut router: Router) -> Result<Router> {
        // 5) CORS
        if self.config.cors_enabled {
            router = router.layer(crate::cors::build_cors_layer(&self.config)?);
        }

        // 4) Timeout
        router = router.layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            Duration::from_secs(self.config.request_timeout_secs),
        ));

        // 3) Trace
        router = Self::apply_trace_layer(router);

        // 2) PropagateRequestId (request ID to response headers)
        router = router.layer(PropagateRequestIdLayer::new(request_id::header()));

        // 1) SetRequestId (registered last, runs first)
        router = router.layer(SetRequestIdLayer::new(
            request_id::header(),
            request_id::MakeReqId,
        ));

        Ok(router)
    }

    /// Configured static asset directory, checked to exist.
    ///
    /// # Errors
    /// Returns an error if `static_dir` is set but is not a directory.
    pub fn static_dir(&self) -> Result<Option<&Path>> {
        match &self.config.static_dir {
            Some(dir) if !dir.is_dir() => {
                anyhow::bail!("static_dir is not a directory: {}", dir.display())
            }
            dir => Ok(dir.as_deref()),
        }
    }

    /// Parse bind address from configuration string.
    fn parse_bind_address(bind_addr: &str) -> Result<SocketAddr> {
        bind_addr
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address '{bind_addr}': {e}"))
    }

    /// Configured bind address.
    ///
    /// # Errors
    /// Returns an error if `bind_addr` is not a valid socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        Self::parse_bind_address(&self.config.bind_addr)
    }

    /// Bind the configured address.
    ///
    /// # Errors
    /// Returns an error if the address is invalid or cannot be bound.
    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = self.bind_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind {addr}: {e}"))?;
        tracing::info!("HTTP server bound on {}", listener.local_addr()?);
        Ok(listener)
    }

    /// Serve `router` on `listener` until `cancel` fires, then drain gracefully.
    ///
    /// # Errors
    /// Returns an error if the server fails while accepting connections.
    pub async fn serve(
        listener: TcpListener,
        router: Router,
        cancel: CancellationToken,
    ) -> Result<()> {
        let shutdown = async move {
            cancel.cancelled().await;
            tracing::info!("HTTP server shutting down gracefully (cancellation)");
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }
}

#[allow(clippy::unused_async)] // axum handlers must be async
async fn route_not_found(OriginalUri(uri): OriginalUri) -> Problem {
    not_found(format!("No route for {}", uri.path()))
        .with_code("ROUTE_NOT_FOUND")
        .with_type(calc_errors::error_type_url("ROUTE_NOT_FOUND"))
        .with_request_context(&uri)
}
