//! API Gateway module
//!
//! Owns the HTTP listener for the calc server. Modules contribute routes
//! through [`RestApiCapability`]; the gateway adds health endpoints, wraps
//! everything in its middleware stack and serves until cancelled.
//!
//! Runtime order of the middleware stack (outermost first):
//! set request id -> propagate request id -> trace -> timeout -> CORS -> router

pub mod config;
pub mod contracts;
pub mod cors;
pub mod middleware;
pub mod module;
pub mod web;

pub use config::{ApiGatewayConfig, CorsConfig};
pub use contracts::RestApiCapability;
pub use module::ApiGateway;
