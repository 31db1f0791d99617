//! Connection settings for the chat-completions service.
//!
//! Settings are layered:
//! - Bundled defaults (include_str! from scenewright.toml)
//! - User overrides (~/.config/scenewright/scenewright.toml, then ./scenewright.toml)
//! - Environment variables, highest precedence
//!
//! The model identifier is not validated here. A missing or wrong model
//! surfaces as an error from the service itself.

use config::{Config, File, FileFormat};
use scenewright_error::{ConfigError, ScenewrightError, ScenewrightResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Environment variable holding the model identifier.
pub const ENV_MODEL: &str = "LLM_MODEL";
/// Environment variable holding the service base URL.
pub const ENV_BASE_URL: &str = "LLM_BASE_URL";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "LLM_API_KEY";
/// Fallback environment variable for the API key.
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

const DEFAULT_CONFIG: &str = include_str!("../../../scenewright.toml");

/// Configuration for an OpenAI-compatible completion service.
///
/// # Example
///
/// ```toml
/// [client]
/// base_url = "https://api.groq.com/openai/v1"
/// model = "llama-3.3-70b-versatile"
/// timeout_secs = 60
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API, without the `/chat/completions` suffix
    pub base_url: String,
    /// Model identifier sent with every request
    #[serde(default)]
    pub model: String,
    /// Bearer token, if the service needs one
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    120
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    client: ClientConfig,
}

impl ClientConfig {
    /// Create a configuration for a base URL and model.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Bundled defaults with environment overrides, ignoring config files.
    ///
    /// Reads:
    /// - `LLM_MODEL`
    /// - `LLM_BASE_URL`
    /// - `LLM_API_KEY`, falling back to `OPENAI_API_KEY`
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled defaults cannot be parsed.
    #[instrument]
    pub fn from_env() -> ScenewrightResult<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Bundled defaults with overrides read through `lookup` instead of the
    /// process environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenewright_models::{ClientConfig, ENV_MODEL};
    ///
    /// let config = ClientConfig::from_env_with(|key| {
    ///     (key == ENV_MODEL).then(|| "gpt-4o-mini".to_string())
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.model, "gpt-4o-mini");
    /// assert_eq!(config.base_url, "https://api.openai.com/v1");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled defaults cannot be parsed.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> ScenewrightResult<Self> {
        let bundled = Self::from_toml_str(DEFAULT_CONFIG)?;
        Ok(bundled.with_overrides(lookup))
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled default.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed.
    #[instrument]
    pub fn load() -> ScenewrightResult<Self> {
        debug!("Loading client configuration");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let home_config = config_dir.join("scenewright/scenewright.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("scenewright").required(false));

        let config = Self::deserialize_from(builder.build())?;
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Bundled defaults overlaid with one specific file, without environment
    /// overrides. Unlike [`load`](Self::load), the file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ScenewrightResult<Self> {
        debug!("Loading client configuration from file");
        Self::deserialize_from(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref()))
                .build(),
        )
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration.
    pub fn from_toml_str(toml: &str) -> ScenewrightResult<Self> {
        Self::deserialize_from(
            Config::builder()
                .add_source(File::from_str(toml, FileFormat::Toml))
                .build(),
        )
    }

    /// Apply environment-style overrides from `lookup`.
    ///
    /// Empty values are treated as unset.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(model) = lookup(ENV_MODEL) {
            self.model = model;
        }
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(api_key) = lookup(ENV_API_KEY).or_else(|| lookup(ENV_OPENAI_API_KEY)) {
            self.api_key = Some(api_key);
        }
        self
    }

    /// Full URL of the chat-completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn deserialize_from(built: Result<Config, config::ConfigError>) -> ScenewrightResult<Self> {
        built
            .map_err(|e| {
                ScenewrightError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize::<ConfigFile>()
            .map(|file| file.client)
            .map_err(|e| {
                ScenewrightError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
