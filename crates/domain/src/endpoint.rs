//! Endpoint configuration.
//!
//! An [`EndpointConfig`] is validated once when it is built and never changes
//! afterwards; the client owns it for its whole lifetime.

use std::collections::BTreeMap;
use std::time::Duration;

use url::Url;

use crate::error::{DomainError, DomainResult};

/// Timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("registrar-rpc/", env!("CARGO_PKG_VERSION"));

/// Transport-level knobs that do not change the call contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportOptions {
    user_agent: String,
    accept_invalid_certs: bool,
    headers: BTreeMap<String, String>,
}

impl TransportOptions {
    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns true if TLS certificate verification is disabled.
    #[must_use]
    pub const fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    /// Returns extra headers sent with every call.
    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            accept_invalid_certs: false,
            headers: BTreeMap::new(),
        }
    }
}

/// Where and how to reach the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    url: Url,
    timeout: Duration,
    transport: TransportOptions,
}

impl EndpointConfig {
    /// Creates a configuration with default timeout and transport options.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEndpoint` if the URL is not an absolute
    /// `http` or `https` URL.
    pub fn new(url: &str) -> DomainResult<Self> {
        Self::builder(url).build()
    }

    /// Starts building a configuration for `url`.
    #[must_use]
    pub fn builder(url: impl Into<String>) -> EndpointConfigBuilder {
        EndpointConfigBuilder {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
            transport: TransportOptions::default(),
        }
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the upper bound on one call.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the transport options.
    #[must_use]
    pub const fn transport(&self) -> &TransportOptions {
        &self.transport
    }
}

/// Builder for [`EndpointConfig`].
#[derive(Debug, Clone)]
pub struct EndpointConfigBuilder {
    url: String,
    timeout: Duration,
    transport: TransportOptions,
}

impl EndpointConfigBuilder {
    /// Sets the call timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.transport.user_agent = user_agent.into();
        self
    }

    /// Disables TLS certificate verification.
    #[must_use]
    pub const fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.transport.accept_invalid_certs = accept;
        self
    }

    /// Adds a header sent with every call.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.transport.headers.insert(name.into(), value.into());
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidEndpoint` if the URL is empty, malformed, or not http(s)
    /// - `InvalidTimeout` if the timeout is zero
    /// - `InvalidHeader` if a header name is blank or a value contains a line break
    pub fn build(self) -> DomainResult<EndpointConfig> {
        let raw = self.url.trim();
        if raw.is_empty() {
            return Err(DomainError::InvalidEndpoint("URL is required".to_owned()));
        }

        let url = Url::parse(raw).map_err(|e| DomainError::InvalidEndpoint(format!("{e}: {raw}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DomainError::InvalidEndpoint(
                "URL must start with http:// or https://".to_owned(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(DomainError::InvalidTimeout(
                "timeout must be greater than zero".to_owned(),
            ));
        }

        for (name, value) in &self.transport.headers {
            if name.trim().is_empty() {
                return Err(DomainError::InvalidHeader {
                    name: name.clone(),
                    reason: "name is blank".to_owned(),
                });
            }
            if value.contains(['\r', '\n']) {
                return Err(DomainError::InvalidHeader {
                    name: name.clone(),
                    reason: "value contains a line break".to_owned(),
                });
            }
        }

        Ok(EndpointConfig {
            url,
            timeout: self.timeout,
            transport: self.transport,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EndpointConfig::new("https://api.registrar.example/rpc").unwrap();
        assert_eq!(config.url().as_str(), "https://api.registrar.example/rpc");
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert!(config.transport().user_agent().starts_with("registrar-rpc/"));
        assert!(!config.transport().accept_invalid_certs());
        assert!(config.transport().headers().is_empty());
    }

    #[test]
    fn test_builder_options() {
        let config = EndpointConfig::builder("http://localhost:8080/xmlrpc")
            .timeout(Duration::from_secs(2))
            .user_agent("reseller-panel/2.0")
            .header("X-Reseller", "42")
            .accept_invalid_certs(true)
            .build()
            .unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(2));
        assert_eq!(config.transport().user_agent(), "reseller-panel/2.0");
        assert_eq!(config.transport().headers().get("X-Reseller").map(String::as_str), Some("42"));
        assert!(config.transport().accept_invalid_certs());
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(EndpointConfig::new(""), Err(DomainError::InvalidEndpoint(_))));
        assert!(matches!(
            EndpointConfig::new("not a url"),
            Err(DomainError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            EndpointConfig::new("ftp://registrar.example/rpc"),
            Err(DomainError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let result = EndpointConfig::builder("https://registrar.example")
            .timeout(Duration::ZERO)
            .build();
        assert!(matches!(result, Err(DomainError::InvalidTimeout(_))));
    }

    #[test]
    fn test_rejects_header_injection() {
        let result = EndpointConfig::builder("https://registrar.example")
            .header("X-Note", "a\r\nHost: evil")
            .build();
        assert!(matches!(result, Err(DomainError::InvalidHeader { .. })));
    }
}
