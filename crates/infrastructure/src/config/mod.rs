//! Endpoint configuration.
//!
//! Settings are read from a YAML file in the platform config directory:
//! - Linux: ~/.config/registrar-rpc/endpoint.yaml
//! - macOS: ~/Library/Application Support/registrar-rpc/endpoint.yaml
//! - Windows: %APPDATA%/registrar-rpc/endpoint.yaml
//!
//! Environment variables override the file, and callers may override both
//! before the settings are validated into an [`EndpointConfig`].

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use registrar_domain::{DomainError, EndpointConfig, LoginToken, Value};
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Environment variable overriding the endpoint URL.
pub const URL_ENV: &str = "REGISTRAR_RPC_URL";

/// Environment variable overriding the timeout, in milliseconds.
pub const TIMEOUT_ENV: &str = "REGISTRAR_RPC_TIMEOUT_MS";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The settings file is not valid YAML for these settings.
    #[error("invalid settings in {path}: {source}")]
    Yaml {
        /// File that failed.
        path: PathBuf,
        /// Parser error.
        source: serde_yaml::Error,
    },

    /// An environment override could not be parsed.
    #[error("invalid {name}={value:?}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
    },

    /// No endpoint URL was configured anywhere.
    #[error("no endpoint URL configured (set `url` in the settings file or {URL_ENV})")]
    MissingUrl,

    /// The login token could not be converted to a call argument.
    #[error("invalid login value: {0}")]
    Login(#[from] serde_json::Error),

    /// The settings do not describe a valid endpoint.
    #[error(transparent)]
    Endpoint(#[from] DomainError),
}

/// Endpoint settings as written in the settings file.
///
/// Every field is optional in the file; validation happens in
/// [`EndpointSettings::to_endpoint`].
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EndpointSettings {
    /// Endpoint URL.
    pub url: Option<String>,
    /// Whole-call timeout in milliseconds.
    pub timeout_ms: Option<u64>,
    /// User-Agent header.
    pub user_agent: Option<String>,
    /// Skip TLS certificate verification.
    pub accept_invalid_certs: bool,
    /// Extra HTTP headers.
    pub headers: BTreeMap<String, String>,
    /// Opaque login token sent as the first argument of registrar calls.
    pub login: Option<serde_yaml::Value>,
}

impl fmt::Debug for EndpointSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointSettings")
            .field("url", &self.url)
            .field("timeout_ms", &self.timeout_ms)
            .field("user_agent", &self.user_agent)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("login", &self.login.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl EndpointSettings {
    /// Returns the default settings file path, if a config directory exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("registrar-rpc").join("endpoint.yaml"))
    }

    /// Parses settings from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid settings YAML.
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads settings from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let settings = Self::from_yaml(&content, path)?;
        tracing::debug!(path = %path.display(), "loaded endpoint settings");
        Ok(settings)
    }

    /// Loads settings from the default path.
    ///
    /// Returns default settings if there is no config directory or the file
    /// doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_default() -> Result<Self, ConfigError> {
        let Some(path) = Self::default_path() else {
            return Ok(Self::default());
        };

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(Self::default());
        }

        Self::load(&path).await
    }

    /// Applies overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    /// Applies overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed.
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.url = Some(url);
        }
        if let Some(value) = lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            let millis = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnv {
                    name: TIMEOUT_ENV,
                    value,
                })?;
            self.timeout_ms = Some(millis);
        }
        Ok(self)
    }

    /// Replaces the URL and timeout where an override is given.
    #[must_use]
    pub fn with_overrides(mut self, url: Option<String>, timeout_ms: Option<u64>) -> Self {
        if url.is_some() {
            self.url = url;
        }
        if timeout_ms.is_some() {
            self.timeout_ms = timeout_ms;
        }
        self
    }

    /// Validates the settings into an endpoint configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is missing or any value is invalid.
    pub fn to_endpoint(&self) -> Result<EndpointConfig, ConfigError> {
        let url = self.url.as_deref().ok_or(ConfigError::MissingUrl)?;

        let mut builder = EndpointConfig::builder(url)
            .accept_invalid_certs(self.accept_invalid_certs);
        if let Some(millis) = self.timeout_ms {
            builder = builder.timeout(Duration::from_millis(millis));
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }

        Ok(builder.build()?)
    }

    /// Returns the configured login token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML value has no call-argument equivalent.
    pub fn login_token(&self) -> Result<Option<LoginToken>, ConfigError> {
        self.login
            .as_ref()
            .map(|yaml| {
                let json = serde_json::to_value(yaml)?;
                Ok(LoginToken::new(Value::from(json)))
            })
            .transpose()
    }
}
