//! Tracing subscriber setup.

use scenewright_error::{ConfigError, ScenewrightResult};
use std::env;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info", "debug")
    pub log_level: String,
    /// Emit JSON lines instead of human-readable text
    pub json_logs: bool,
    /// Use `log_level` even when `RUST_LOG` is set
    pub force_level: bool,
}

impl LoggingConfig {
    /// Configuration at `log_level`, with text output.
    pub fn new(log_level: impl Into<String>) -> Self {
        Self {
            log_level: log_level.into(),
            json_logs: false,
            force_level: false,
        }
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// Make `log_level` win over `RUST_LOG`.
    pub fn with_forced_level(mut self, forced: bool) -> Self {
        self.force_level = forced;
        self
    }

    /// Filter directive to install, given the value of `RUST_LOG`.
    fn directive(&self, rust_log: Option<String>) -> String {
        match rust_log {
            Some(directive) if !self.force_level && !directive.trim().is_empty() => directive,
            _ => self.log_level.clone(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new("info")
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over [`LoggingConfig::log_level`] unless the
/// level is forced. An unparseable `RUST_LOG` falls back to the configured
/// level. Logs go to stderr so stdout stays free for the transcript.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the filter directive is invalid or a global
/// subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> ScenewrightResult<()> {
    let env_filter = EnvFilter::try_new(config.directive(env::var("RUST_LOG").ok()))
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| ConfigError::new(format!("Invalid log filter: {}", e)))?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to install subscriber: {}", e)))?;

    Ok(())
}
