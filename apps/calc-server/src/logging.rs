//! Tracing subscriber setup
//!
//! Filter precedence: `RUST_LOG` > `-v` count > `logging.console_level`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_console_level")]
    pub console_level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_console_level() -> String {
    "info".to_owned()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: default_console_level(),
            format: LogFormat::default(),
        }
    }
}

fn level_name(level: LevelFilter) -> &'static str {
    match level.into_level() {
        Some(Level::TRACE) => "trace",
        Some(Level::DEBUG) => "debug",
        Some(Level::INFO) => "info",
        Some(Level::WARN) => "warn",
        Some(Level::ERROR) => "error",
        None => "off",
    }
}

impl LoggingConfig {
    /// Directive used when `RUST_LOG` is not set.
    ///
    /// `-v` only ever raises verbosity: a plain `console_level` that is
    /// already more verbose than the flag wins.
    #[must_use]
    pub fn directive(&self, verbose: u8) -> &str {
        let flag = match verbose {
            0 => return self.console_level.as_str(),
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        match self.console_level.parse::<LevelFilter>() {
            Ok(configured) if configured > flag => self.console_level.as_str(),
            _ => level_name(flag),
        }
    }

    /// Build the filter, honoring `RUST_LOG` first.
    ///
    /// # Errors
    /// Returns an error if the configured level is not a valid filter directive.
    pub fn env_filter(&self, verbose: u8) -> Result<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        let directive = self.directive(verbose);
        EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log level: {directive}"))
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for `check` and `--print-config` output.
///
/// # Errors
/// Returns an error if the filter is invalid or a subscriber is already installed.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) -> Result<()> {
    let filter = cfg.env_filter(verbose)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match cfg.format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().with_writer(std::io::stderr).json())
            .try_init(),
    };
    installed.context("failed to install tracing subscriber")
}
