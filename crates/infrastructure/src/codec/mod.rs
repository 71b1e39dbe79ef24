//! XML-RPC wire codec.

mod decode;
mod encode;

use registrar_application::ports::{CodecError, WireCodec};
use registrar_domain::{CallRequest, CallResponse};

pub use encode::encode_value;

/// MIME type of XML-RPC documents.
pub const XML_CONTENT_TYPE: &str = "text/xml";

/// Implements the `WireCodec` port for XML-RPC.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlRpcCodec;

impl WireCodec for XmlRpcCodec {
    fn content_type(&self) -> &'static str {
        XML_CONTENT_TYPE
    }

    fn encode_call(&self, request: &CallRequest) -> Result<Vec<u8>, CodecError> {
        encode::encode_call(request).map(String::into_bytes)
    }

    fn decode_response(&self, body: &[u8]) -> Result<CallResponse, CodecError> {
        decode::decode_response(body)
    }
}
