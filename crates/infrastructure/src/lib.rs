//! Registrar Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer: the XML-RPC wire codec, the reqwest
//! HTTP transport, and endpoint configuration loading.

use std::sync::Arc;

use registrar_application::{RpcClient, TransportError};
use registrar_domain::EndpointConfig;

pub mod adapters;
pub mod codec;
pub mod config;
pub mod serialization;

pub use adapters::ReqwestTransport;
pub use codec::{XML_CONTENT_TYPE, XmlRpcCodec};
pub use config::{ConfigError, EndpointSettings, TIMEOUT_ENV, URL_ENV};
pub use serialization::{SerializationError, parse_argument, to_json_stable};

/// RPC client speaking XML-RPC over HTTP.
pub type XmlRpcClient = RpcClient<ReqwestTransport, XmlRpcCodec>;

/// Creates an XML-RPC client for `endpoint`.
///
/// # Errors
///
/// Returns an error if the HTTP transport cannot be built.
pub fn xml_rpc_client(endpoint: EndpointConfig) -> Result<XmlRpcClient, TransportError> {
    let transport = ReqwestTransport::new(&endpoint)?;
    Ok(RpcClient::new(endpoint, Arc::new(transport), XmlRpcCodec))
}
