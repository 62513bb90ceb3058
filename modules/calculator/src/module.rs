//! Calculator Module definition
//!
//! An in-process module that exposes the math operations over REST
//! through the API gateway.

use std::sync::Arc;

use anyhow::Result;
use api_gateway::RestApiCapability;
use axum::Router;

use crate::api::rest::routes;
use crate::config::CalculatorConfig;
use crate::domain::Service;

/// Calculator module.
pub struct Calculator {
    config: CalculatorConfig,
    service: Arc<Service>,
}

impl Calculator {
    /// Create the module from its configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        tracing::info!(base_path = %config.base_path, "Initializing calculator module");
        Ok(Self {
            config,
            service: Arc::new(Service::new()),
        })
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }
}

impl RestApiCapability for Calculator {
    fn name(&self) -> &'static str {
        "calculator"
    }

    fn register_rest(&self, router: Router) -> Result<Router> {
        tracing::info!("Registering calculator REST routes");
        Ok(routes::register_routes(
            router,
            &self.config.base_path,
            self.service(),
        ))
    }
}
