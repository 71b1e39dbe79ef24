//! RPC transport implementation using reqwest.
//!
//! This adapter implements the `RpcTransport` port: it POSTs encoded calls to
//! the configured endpoint and hands back the raw response body.

use std::error::Error as _;
use std::future::Future;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use registrar_application::ports::{RpcTransport, TransportError};
use registrar_domain::EndpointConfig;

/// Maximum number of redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// HTTP transport bound to one endpoint.
///
/// Wraps a `reqwest::Client` configured from the endpoint's transport
/// options. The client keeps its own connection pool, so one transport
/// should be shared by all calls to the same endpoint.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    url: Url,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a transport for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured header is not a valid HTTP header or
    /// the TLS backend cannot be initialised.
    pub fn new(endpoint: &EndpointConfig) -> Result<Self, TransportError> {
        let options = endpoint.transport();

        let mut headers = HeaderMap::new();
        for (name, value) in options.headers() {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| TransportError::Other(format!("invalid header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| TransportError::Other(format!("invalid value for {name}: {e}")))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .user_agent(options.user_agent())
            .default_headers(headers)
            .danger_accept_invalid_certs(options.accept_invalid_certs())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(endpoint.timeout())
            .build()
            .map_err(|e| TransportError::Tls(e.to_string()))?;

        Ok(Self::with_client(client, endpoint))
    }

    /// Creates a transport with a custom reqwest client.
    #[must_use]
    pub fn with_client(client: Client, endpoint: &EndpointConfig) -> Self {
        Self {
            client,
            url: endpoint.url().clone(),
            timeout: endpoint.timeout(),
        }
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(&self, error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout {
                timeout_ms: self.timeout_ms(),
            };
        }

        let message = error_chain(error);
        let host = self.url.host_str().unwrap_or("unknown").to_owned();

        if error.is_connect() {
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") || lower.contains("lookup") {
                return TransportError::DnsError { host, message };
            }
            if lower.contains("refused") {
                return TransportError::ConnectionRefused {
                    host,
                    port: self.url.port_or_known_default().unwrap_or(80),
                };
            }
            if lower.contains("certificate") || lower.contains("tls") {
                return TransportError::Tls(message);
            }
            return TransportError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return TransportError::Other(format!("too many redirects (max {MAX_REDIRECTS})"));
        }

        TransportError::Other(message)
    }
}

/// Joins an error with all of its sources.
///
/// reqwest keeps the useful detail ("connection refused", resolver output)
/// in the source chain rather than its own message.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl RpcTransport for ReqwestTransport {
    fn send(
        &self,
        content_type: &'static str,
        payload: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send {
        async move {
            tracing::debug!(url = %self.url, bytes = payload.len(), "sending call");

            let response = self
                .client
                .post(self.url.clone())
                .header(CONTENT_TYPE, content_type)
                .body(payload)
                .send()
                .await
                .map_err(|e| self.map_error(&e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(TransportError::HttpStatus {
                    status: status.as_u16(),
                });
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| match self.map_error(&e) {
                    TransportError::Other(message) => {
                        TransportError::Other(format!("failed to read body: {message}"))
                    }
                    other => other,
                })?;

            tracing::debug!(status = status.as_u16(), bytes = body.len(), "response received");
            Ok(body.to_vec())
        }
    }
}
