//! Procedure invoker port

use std::sync::Arc;

use async_trait::async_trait;
use registrar_domain::{CallRequest, CallResponse};

/// Anything that can carry out a remote call.
///
/// The RPC client implements this; the registrar facade and its workflows
/// depend only on this trait.
#[async_trait]
pub trait ProcedureInvoker: Send + Sync {
    /// Performs one call and returns its outcome.
    async fn call(&self, request: &CallRequest) -> CallResponse;
}

#[async_trait]
impl<T: ProcedureInvoker + ?Sized> ProcedureInvoker for Arc<T> {
    async fn call(&self, request: &CallRequest) -> CallResponse {
        (**self).call(request).await
    }
}
