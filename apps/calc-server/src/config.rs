//! Application configuration
//!
//! Layered: 1) defaults -> 2) YAML (if provided) -> 3) env (`APP__*`) -> 4) CLI overrides.

use std::path::Path;

use anyhow::{Context, Result};
use api_gateway::{ApiGateway, ApiGatewayConfig};
use calculator::CalculatorConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logging::LoggingConfig;

/// Prefix of environment variables that override configuration keys.
/// Nesting uses `__`, e.g. `APP__API_GATEWAY__BIND_ADDR`.
pub const ENV_PREFIX: &str = "APP__";

/// CLI arguments that flow into the config merge.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub port: Option<u16>,
    pub verbose: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub api_gateway: ApiGatewayConfig,
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load defaults, then the YAML file if given, then `APP__*` env overrides.
    ///
    /// # Errors
    /// Returns an error if the YAML or an env override cannot be parsed into the config.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)
            .extract()
            .with_context(|| match path {
                Some(p) => format!("failed to load configuration from {}", p.display()),
                None => "failed to load configuration".to_owned(),
            })
    }

    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(p) = path {
            figment = figment.merge(Yaml::file(p));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(port) = args.port {
            let bind = &self.api_gateway.bind_addr;
            let host = bind.rsplit_once(':').map_or(bind.as_str(), |(host, _)| host);
            self.api_gateway.bind_addr = format!("{host}:{port}");
        }
    }

    /// Check everything that would otherwise only fail at server start.
    ///
    /// # Errors
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<()> {
        let gateway = ApiGateway::new(self.api_gateway.clone());
        gateway.bind_addr()?;
        gateway.static_dir()?;
        api_gateway::cors::build_cors_layer(&self.api_gateway)?;
        self.calculator.validate()?;
        let directive = self.logging.directive(0);
        EnvFilter::try_new(directive).with_context(|| format!("invalid log level: {directive}"))?;
        Ok(())
    }

    /// Render the effective configuration as YAML.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).map_err(|e| anyhow::anyhow!("failed to render YAML: {e}"))
    }
}
