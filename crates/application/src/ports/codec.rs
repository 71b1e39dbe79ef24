//! Wire codec port

use registrar_domain::{CallRequest, CallResponse, Fault};
use thiserror::Error;

/// Errors raised while encoding a call or decoding a response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The call could not be encoded.
    #[error("failed to encode call: {0}")]
    Encode(String),

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl CodecError {
    /// Converts this error into a protocol fault.
    #[must_use]
    pub fn to_fault(&self) -> Fault {
        Fault::protocol(self.to_string())
    }
}

impl From<CodecError> for Fault {
    fn from(error: CodecError) -> Self {
        error.to_fault()
    }
}

/// Port for the wire format of calls and responses.
pub trait WireCodec: Send + Sync {
    /// MIME type of encoded calls.
    fn content_type(&self) -> &'static str;

    /// Encodes a call.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Encode` if an argument cannot be represented.
    fn encode_call(&self, request: &CallRequest) -> Result<Vec<u8>, CodecError>;

    /// Decodes a response body.
    ///
    /// Returns either a success or a fault declared by the remote service;
    /// it never produces transport or protocol faults itself.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Decode` if the body is malformed.
    fn decode_response(&self, body: &[u8]) -> Result<CallResponse, CodecError>;
}
