//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The procedure name is empty or blank.
    #[error("invalid procedure name: {0:?}")]
    InvalidProcedureName(String),

    /// The endpoint URL is malformed or uses an unsupported scheme.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The configured timeout cannot be used.
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),

    /// The TLD is not sold by the registrar.
    #[error("unsupported TLD: {0}")]
    UnsupportedTld(String),

    /// The product action is not one of register, transfer or renewal.
    #[error("unknown product action: {0}")]
    UnknownProductAction(String),

    /// A transport header name or value is not valid.
    #[error("invalid header {name:?}: {reason}")]
    InvalidHeader {
        /// Header name as supplied.
        name: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
