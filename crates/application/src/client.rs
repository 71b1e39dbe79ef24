//! RPC client
//!
//! The one operation every registrar call goes through: encode a procedure
//! call, send it to the endpoint, and decode whatever comes back into a
//! [`CallResponse`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::join_all;
use registrar_domain::{
    CallRequest, CallResponse, EndpointConfig, Fault, FaultKind, ProcedureName, Value,
};

use crate::ports::{ProcedureInvoker, RpcTransport, TransportError, WireCodec};

/// Client bound to a single endpoint.
///
/// The client holds no per-call state; one instance may serve any number of
/// concurrent callers through `&self`.
///
/// # Example
///
/// ```ignore
/// let client = RpcClient::new(endpoint, Arc::new(transport), XmlRpcCodec);
///
/// match client.invoke("domain_check", vec![login, names]).await {
///     CallResponse::Success { result } => println!("{result:?}"),
///     CallResponse::Fault(fault) => eprintln!("{}", fault.display_message()),
/// }
/// ```
pub struct RpcClient<T: RpcTransport, C: WireCodec> {
    endpoint: EndpointConfig,
    transport: Arc<T>,
    codec: C,
}

impl<T: RpcTransport, C: WireCodec> RpcClient<T, C> {
    /// Creates a client for `endpoint` using the given transport and codec.
    pub const fn new(endpoint: EndpointConfig, transport: Arc<T>, codec: C) -> Self {
        Self {
            endpoint,
            transport,
            codec,
        }
    }

    /// Returns the endpoint this client talks to.
    pub const fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    /// Invokes `procedure` with positional `arguments`.
    ///
    /// A blank procedure name is rejected locally with a request fault and
    /// nothing is sent.
    pub async fn invoke(&self, procedure: &str, arguments: Vec<Value>) -> CallResponse {
        match ProcedureName::new(procedure) {
            Ok(name) => self.call(&CallRequest::new(name, arguments)).await,
            Err(_) => {
                tracing::warn!("rejected call with blank procedure name");
                Fault::request("procedure name is required").into()
            }
        }
    }

    /// Performs a pre-built call.
    ///
    /// The whole exchange is bounded by the endpoint timeout.
    #[tracing::instrument(
        name = "rpc_call",
        skip_all,
        fields(procedure = %request.procedure(), args = request.arguments().len())
    )]
    pub async fn call(&self, request: &CallRequest) -> CallResponse {
        let timeout = self.endpoint.timeout();
        let response = tokio::time::timeout(timeout, self.exchange(request))
            .await
            .unwrap_or_else(|_| {
                Fault::from(TransportError::Timeout {
                    timeout_ms: millis(timeout),
                })
                .into()
            });
        log_outcome(&response);
        response
    }

    /// Performs several calls concurrently.
    ///
    /// Responses come back in request order. A fault in one call does not
    /// cancel the others.
    pub async fn invoke_all<I>(&self, requests: I) -> Vec<CallResponse>
    where
        I: IntoIterator<Item = CallRequest>,
    {
        join_all(
            requests
                .into_iter()
                .map(|request| async move { self.call(&request).await }),
        )
        .await
    }

    async fn exchange(&self, request: &CallRequest) -> CallResponse {
        let payload = match self.codec.encode_call(request) {
            Ok(payload) => payload,
            Err(e) => return e.to_fault().into(),
        };

        let body = match self.transport.send(self.codec.content_type(), payload).await {
            Ok(body) => body,
            Err(e) => return e.to_fault().into(),
        };

        self.codec
            .decode_response(&body)
            .unwrap_or_else(|e| e.to_fault().into())
    }
}

#[async_trait]
impl<T: RpcTransport, C: WireCodec> ProcedureInvoker for RpcClient<T, C> {
    async fn call(&self, request: &CallRequest) -> CallResponse {
        Self::call(self, request).await
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn log_outcome(response: &CallResponse) {
    let CallResponse::Fault(fault) = response else {
        tracing::debug!("call succeeded");
        return;
    };
    match fault.kind {
        FaultKind::Business => {
            tracing::debug!(actor = %fault.actor, message = %fault.message, "remote fault");
        }
        FaultKind::Transport | FaultKind::Request => {
            tracing::warn!(actor = %fault.actor, message = %fault.message, "call failed");
        }
        FaultKind::Protocol => {
            tracing::error!(message = %fault.message, "undecodable exchange");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::ports::CodecError;
    use pretty_assertions::assert_eq;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// How a stub transport answers.
    enum Reply {
        Fixed(Result<Vec<u8>, TransportError>),
        /// Builds the body from the encoded procedure name.
        Routed(fn(&str) -> String),
        Silent,
    }

    /// Transport returning a canned or routed reply, or never answering.
    struct StubTransport {
        reply: Reply,
        sent: AtomicUsize,
    }

    impl StubTransport {
        fn with(reply: Reply) -> Self {
            Self {
                reply,
                sent: AtomicUsize::new(0),
            }
        }

        fn replying(body: &str) -> Self {
            Self::with(Reply::Fixed(Ok(body.as_bytes().to_vec())))
        }

        fn failing(error: TransportError) -> Self {
            Self::with(Reply::Fixed(Err(error)))
        }

        fn routed(route: fn(&str) -> String) -> Self {
            Self::with(Reply::Routed(route))
        }

        fn silent() -> Self {
            Self::with(Reply::Silent)
        }

        fn sent(&self) -> usize {
            self.sent.load(Ordering::SeqCst)
        }
    }

    impl RpcTransport for StubTransport {
        fn send(
            &self,
            _content_type: &'static str,
            payload: Vec<u8>,
        ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send {
            self.sent.fetch_add(1, Ordering::SeqCst);
            let reply = match &self.reply {
                Reply::Fixed(reply) => Some(reply.clone()),
                Reply::Routed(route) => {
                    Some(Ok(route(&String::from_utf8_lossy(&payload)).into_bytes()))
                }
                Reply::Silent => None,
            };
            async move {
                match reply {
                    Some(reply) => reply,
                    None => std::future::pending().await,
                }
            }
        }
    }

    /// Line codec: `ok:<text>` or `fault:<actor>:<message>`.
    struct LineCodec;

    impl WireCodec for LineCodec {
        fn content_type(&self) -> &'static str {
            "text/plain"
        }

        fn encode_call(&self, request: &CallRequest) -> Result<Vec<u8>, CodecError> {
            if request.arguments().iter().any(Value::is_nil) {
                return Err(CodecError::Encode("nil argument".to_owned()));
            }
            Ok(request.procedure().as_str().as_bytes().to_vec())
        }

        fn decode_response(&self, body: &[u8]) -> Result<CallResponse, CodecError> {
            let text = std::str::from_utf8(body).map_err(|e| CodecError::Decode(e.to_string()))?;
            if let Some(result) = text.strip_prefix("ok:") {
                return Ok(CallResponse::success(Value::from(result)));
            }
            if let Some(fault) = text.strip_prefix("fault:")
                && let Some((actor, message)) = fault.split_once(':')
            {
                return Ok(Fault::business(actor, message).into());
            }
            Err(CodecError::Decode(format!("unexpected body {text:?}")))
        }
    }

    fn client(transport: StubTransport) -> (RpcClient<StubTransport, LineCodec>, Arc<StubTransport>) {
        client_with_timeout(transport, Duration::from_secs(30))
    }

    fn client_with_timeout(
        transport: StubTransport,
        timeout: Duration,
    ) -> (RpcClient<StubTransport, LineCodec>, Arc<StubTransport>) {
        let endpoint = EndpointConfig::builder("http://registrar.test/xmlrpc")
            .timeout(timeout)
            .build()
            .expect("valid endpoint");
        let transport = Arc::new(transport);
        (RpcClient::new(endpoint, Arc::clone(&transport), LineCodec), transport)
    }

    #[tokio::test]
    async fn test_invoke_success() {
        let (client, transport) = client(StubTransport::replying("ok:Not Registered"));

        let response = client.invoke("domain_check", vec![Value::from("login")]).await;

        assert_eq!(response, CallResponse::success(Value::from("Not Registered")));
        assert_eq!(transport.sent(), 1);
    }

    #[tokio::test]
    async fn test_remote_fault_is_kept_verbatim() {
        let (client, _) = client(StubTransport::replying("fault:auth:invalid session"));

        let response = client.invoke("member_update_password", vec![]).await;

        assert_eq!(
            response,
            CallResponse::Fault(Fault::business("auth", "invalid session"))
        );
    }

    #[tokio::test]
    async fn test_blank_procedure_is_never_sent() {
        let (client, transport) = client(StubTransport::replying("ok:unused"));

        for name in ["", "   "] {
            let response = client.invoke(name, vec![]).await;
            let fault = response.fault().expect("fault");
            assert_eq!(fault.kind, FaultKind::Request);
            assert_eq!(fault.actor, "client");
            assert_eq!(fault.message, "procedure name is required");
        }
        assert_eq!(transport.sent(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_transport_fault() {
        let (client, _) = client(StubTransport::failing(TransportError::ConnectionRefused {
            host: "registrar.test".to_owned(),
            port: 80,
        }));

        let response = client.invoke("domain_check", vec![]).await;

        let fault = response.fault().expect("fault");
        assert_eq!(fault.kind, FaultKind::Transport);
        assert_eq!(fault.actor, "transport");
        assert!(fault.message.contains("refused"));
    }

    #[tokio::test]
    async fn test_undecodable_body_becomes_protocol_fault() {
        let (client, _) = client(StubTransport::replying("<html>502</html>"));

        let response = client.invoke("domain_check", vec![]).await;

        let fault = response.fault().expect("fault");
        assert_eq!(fault.kind, FaultKind::Protocol);
        assert_eq!(fault.actor, "protocol");
    }

    #[tokio::test]
    async fn test_unencodable_call_is_not_sent() {
        let (client, transport) = client(StubTransport::replying("ok:unused"));

        let response = client.invoke("domain_check", vec![Value::Nil]).await;

        assert_eq!(response.fault().map(|f| f.kind), Some(FaultKind::Protocol));
        assert_eq!(transport.sent(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_silent_endpoint_times_out() {
        let (client, _) = client_with_timeout(StubTransport::silent(), Duration::from_secs(2));
        let started = tokio::time::Instant::now();

        let response = client.invoke("domain_check", vec![]).await;

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(2));
        assert!(elapsed < Duration::from_secs(3));
        let fault = response.fault().expect("fault");
        assert_eq!(fault.actor, "transport");
        assert_eq!(fault.message, "request timed out after 2000 ms");
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let (client, transport) = client(StubTransport::replying("ok:same"));

        let first = client.invoke("domain_check", vec![Value::from("a")]).await;
        let second = client.invoke("domain_check", vec![Value::from("a")]).await;

        assert_eq!(first, second);
        assert_eq!(transport.sent(), 2);
    }

    #[tokio::test]
    async fn test_invoke_all_keeps_order_and_isolates_faults() {
        let (client, transport) = client(StubTransport::routed(|procedure| {
            if procedure == "domain_transfer" {
                "fault:registry:transfer locked".to_owned()
            } else {
                format!("ok:{procedure}")
            }
        }));
        let requests = ["domain_check", "domain_transfer", "member_show_details"]
            .into_iter()
            .map(|name| CallRequest::named(ProcedureName::new(name).expect("name")));

        let responses = client.invoke_all(requests).await;

        assert_eq!(
            responses,
            vec![
                CallResponse::success(Value::from("domain_check")),
                CallResponse::Fault(Fault::business("registry", "transfer locked")),
                CallResponse::success(Value::from("member_show_details")),
            ]
        );
        assert_eq!(transport.sent(), 3);
    }

    #[tokio::test]
    async fn test_client_is_a_procedure_invoker() {
        let (client, _) = client(StubTransport::replying("ok:via trait"));
        let invoker: Arc<dyn ProcedureInvoker> = Arc::new(client);

        let request = CallRequest::named(ProcedureName::from_static("domain_check"));
        let response = invoker.call(&request).await;

        assert_eq!(response.result(), Some(&Value::from("via trait")));
    }
}
