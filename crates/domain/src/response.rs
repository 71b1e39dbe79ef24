//! Call response types.
//!
//! Every call resolves to exactly one [`CallResponse`]: a success carrying the
//! decoded result, or a [`Fault`] describing who rejected the call and why.
//! Callers branch on it with a single `match` instead of inspecting fields.

use serde::Serialize;

use crate::value::Value;

/// Actor reported on faults raised by the transport (connect, timeout, HTTP status).
pub const TRANSPORT_ACTOR: &str = "transport";

/// Actor reported on faults raised while encoding or decoding a payload.
pub const PROTOCOL_ACTOR: &str = "protocol";

/// Actor reported on faults raised locally before anything is sent.
pub const CLIENT_ACTOR: &str = "client";

/// Where a fault originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// The remote service rejected the request.
    Business,
    /// The endpoint could not be reached or did not answer in time.
    Transport,
    /// The payload could not be encoded or the response could not be decoded.
    Protocol,
    /// The request was invalid and was never sent.
    Request,
}

impl FaultKind {
    /// Returns a short human-readable title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Business => "Request Rejected",
            Self::Transport => "Service Unavailable",
            Self::Protocol => "Unexpected Response",
            Self::Request => "Invalid Request",
        }
    }

    /// Returns user-facing suggestions for this kind of fault.
    #[must_use]
    pub const fn suggestions(&self) -> &[&'static str] {
        match self {
            Self::Business => &["Review the values submitted and try again"],
            Self::Transport => &[
                "Check that the endpoint URL is correct",
                "Verify your network connection",
                "Try increasing the timeout value",
            ],
            Self::Protocol => &[
                "The service may be running an incompatible version",
                "Check that the endpoint URL points at the RPC service",
            ],
            Self::Request => &["Check the procedure name and arguments"],
        }
    }
}

/// A structured error: who rejected the call and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fault {
    /// Origin category.
    pub kind: FaultKind,
    /// Origin of the fault as reported (remote actor or a reserved local actor).
    pub actor: String,
    /// Description of the fault.
    pub message: String,
}

impl Fault {
    /// Creates a fault declared by the remote service.
    #[must_use]
    pub fn business(actor: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::Business,
            actor: actor.into(),
            message: message.into(),
        }
    }

    /// Creates a transport fault.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::Transport,
            actor: TRANSPORT_ACTOR.to_owned(),
            message: message.into(),
        }
    }

    /// Creates a protocol fault.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::Protocol,
            actor: PROTOCOL_ACTOR.to_owned(),
            message: message.into(),
        }
    }

    /// Creates a fault for a request rejected before sending.
    #[must_use]
    pub fn request(message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::Request,
            actor: CLIENT_ACTOR.to_owned(),
            message: message.into(),
        }
    }

    /// Returns true if the remote service declared this fault.
    #[must_use]
    pub const fn is_business(&self) -> bool {
        matches!(self.kind, FaultKind::Business)
    }

    /// Returns the text to show an end user.
    ///
    /// Business faults are shown verbatim. Transport and protocol faults
    /// are reduced to a generic message; their detail belongs in logs.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self.kind {
            FaultKind::Business => format!("{}: {}", self.actor, self.message),
            FaultKind::Transport => "service unavailable".to_owned(),
            FaultKind::Protocol => "unexpected response from service".to_owned(),
            FaultKind::Request => self.message.clone(),
        }
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} fault from {}: {}", self.kind.title(), self.actor, self.message)
    }
}

impl std::error::Error for Fault {}

/// Outcome of one remote call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CallResponse {
    /// The call succeeded.
    Success {
        /// Decoded result payload.
        result: Value,
    },
    /// The call failed.
    Fault(Fault),
}

impl CallResponse {
    /// Creates a success response.
    #[must_use]
    pub const fn success(result: Value) -> Self {
        Self::Success { result }
    }

    /// Returns true if the call succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns true if the call failed.
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }

    /// Returns the result payload if the call succeeded.
    #[must_use]
    pub const fn result(&self) -> Option<&Value> {
        match self {
            Self::Success { result } => Some(result),
            Self::Fault(_) => None,
        }
    }

    /// Returns the fault if the call failed.
    #[must_use]
    pub const fn fault(&self) -> Option<&Fault> {
        match self {
            Self::Success { .. } => None,
            Self::Fault(fault) => Some(fault),
        }
    }

    /// Converts into a standard `Result` for use with `?`.
    ///
    /// # Errors
    ///
    /// Returns the [`Fault`] if the call failed.
    pub fn into_result(self) -> Result<Value, Fault> {
        match self {
            Self::Success { result } => Ok(result),
            Self::Fault(fault) => Err(fault),
        }
    }
}

impl From<Fault> for CallResponse {
    fn from(fault: Fault) -> Self {
        Self::Fault(fault)
    }
}

impl From<Result<Value, Fault>> for CallResponse {
    fn from(result: Result<Value, Fault>) -> Self {
        match result {
            Ok(result) => Self::Success { result },
            Err(fault) => Self::Fault(fault),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reserved_actors() {
        assert_eq!(Fault::transport("refused").actor, "transport");
        assert_eq!(Fault::protocol("bad xml").actor, "protocol");
        assert_eq!(Fault::request("blank").actor, "client");
        assert!(Fault::business("auth", "invalid session").is_business());
    }

    #[test]
    fn test_business_fault_is_displayed_verbatim() {
        let fault = Fault::business("auth", "invalid session");
        assert_eq!(fault.display_message(), "auth: invalid session");
    }

    #[test]
    fn test_transport_fault_is_generic_for_users() {
        let fault = Fault::transport("connection refused: 127.0.0.1:9");
        assert_eq!(fault.display_message(), "service unavailable");
        assert!(fault.to_string().contains("connection refused"));
        assert!(!fault.kind.suggestions().is_empty());
    }

    #[test]
    fn test_exactly_one_variant() {
        let ok = CallResponse::success(Value::from("done"));
        assert!(ok.is_success());
        assert!(ok.fault().is_none());
        assert_eq!(ok.result(), Some(&Value::from("done")));

        let failed = CallResponse::from(Fault::business("registry", "duplicate"));
        assert!(failed.is_fault());
        assert!(failed.result().is_none());
        assert_eq!(
            failed.into_result(),
            Err(Fault::business("registry", "duplicate"))
        );
    }

    #[test]
    fn test_serializes_with_status_tag() {
        let fault = CallResponse::from(Fault::business("auth", "invalid session"));
        let json = serde_json::to_value(&fault).ok();
        assert_eq!(
            json,
            Some(serde_json::json!({
                "status": "fault",
                "kind": "business",
                "actor": "auth",
                "message": "invalid session"
            }))
        );

        let ok = serde_json::to_value(CallResponse::success(Value::Int(1))).ok();
        assert_eq!(ok, Some(serde_json::json!({"status": "success", "result": 1})));
    }
}
