//! Registrar Domain - Core call types
//!
//! This crate defines the domain model for the registrar RPC client:
//! structured values, call requests and responses, endpoint configuration
//! and the typed records of the registrar's procedures.
//! All types here are pure Rust with no I/O dependencies.

pub mod call;
pub mod endpoint;
pub mod error;
pub mod registrar;
pub mod response;
pub mod value;

pub use call::{CallRequest, ProcedureName};
pub use endpoint::{DEFAULT_TIMEOUT, EndpointConfig, EndpointConfigBuilder, TransportOptions};
pub use error::{DomainError, DomainResult};
pub use registrar::LoginToken;
pub use response::{
    CLIENT_ACTOR, CallResponse, Fault, FaultKind, PROTOCOL_ACTOR, TRANSPORT_ACTOR,
};
pub use value::{Struct, Value, WIRE_DATETIME_FORMAT};
