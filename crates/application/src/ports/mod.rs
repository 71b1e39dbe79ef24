//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod codec;
mod invoker;
mod transport;

pub use codec::{CodecError, WireCodec};
pub use invoker::ProcedureInvoker;
pub use transport::{RpcTransport, TransportError};
