//! Calculator Module
//!
//! A stateless REST service exposing elementary arithmetic and math-library
//! functions, one GET endpoint per operation under `/api/calc`.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Pure math operations and their validation rules
//! - `api/rest/` - Query binding, handlers, route registration, error mapping
//! - `module.rs` - Module definition plugged into the API gateway

// === MODULE DEFINITION ===
pub mod module;
pub use module::Calculator;

pub mod config;
pub use config::CalculatorConfig;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
