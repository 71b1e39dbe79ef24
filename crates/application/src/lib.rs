//! Registrar Application - RPC client, ports and workflows
//!
//! This crate defines the application layer with:
//! - Port traits (transport, wire codec, procedure invoker)
//! - The `RpcClient` that turns every call into a `CallResponse`
//! - The typed `Registrar` facade and multi-call workflows

pub mod client;
pub mod error;
pub mod ports;
pub mod registrar;
pub mod use_cases;

pub use client::RpcClient;
pub use error::{WorkflowError, WorkflowResult};
pub use ports::{CodecError, ProcedureInvoker, RpcTransport, TransportError, WireCodec};
pub use registrar::{Registrar, ResponseDetails};
pub use use_cases::{
    PRICE_LIST_YEARS, PriceList, PriceQuote, RegisterSubMember, RegisterSubMemberInput,
    RegisterSubMemberOutput, TransferDomainInput, TransferDomainOutput, TransferDomainWithContacts,
};
