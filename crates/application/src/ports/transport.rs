//! RPC transport port

use std::future::Future;

use registrar_domain::Fault;
use thiserror::Error;

/// Errors raised while moving bytes to and from the endpoint.
///
/// None of these carry business meaning; they all become transport faults.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The endpoint did not answer within the configured timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Timeout that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// The endpoint host name could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Resolver message.
        message: String,
    },

    /// The endpoint actively refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Host that refused.
        host: String,
        /// Port that refused.
        port: u16,
    },

    /// The connection could not be established for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// TLS negotiation failed.
    #[error("TLS error: {0}")]
    Tls(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("endpoint returned HTTP {status}")]
    HttpStatus {
        /// Status code received.
        status: u16,
    },

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Converts this error into a transport fault.
    #[must_use]
    pub fn to_fault(&self) -> Fault {
        Fault::transport(self.to_string())
    }
}

impl From<TransportError> for Fault {
    fn from(error: TransportError) -> Self {
        error.to_fault()
    }
}

/// Port for delivering an encoded call to the endpoint.
///
/// Implementations are bound to one endpoint when constructed. They do not
/// retry; a failed exchange is reported once.
pub trait RpcTransport: Send + Sync {
    /// Sends `payload` and returns the raw response body.
    ///
    /// # Arguments
    ///
    /// * `content_type` - MIME type of the payload
    /// * `payload` - Encoded call
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be reached, does not answer
    /// in time, or answers with a non-success status.
    fn send(
        &self,
        content_type: &'static str,
        payload: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;
}
