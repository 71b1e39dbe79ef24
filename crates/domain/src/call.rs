//! Call request types.

use std::borrow::Cow;
use std::fmt;

use crate::error::{DomainError, DomainResult};
use crate::value::Value;

/// Name of a remote procedure.
///
/// Names are opaque to the client; the only rule is that they are not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProcedureName(Cow<'static, str>);

impl ProcedureName {
    /// Creates a procedure name from runtime input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidProcedureName` if the name is blank.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidProcedureName(name));
        }
        Ok(Self(Cow::Owned(name)))
    }

    /// Creates a procedure name from a literal.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if `name` is empty.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        assert!(!name.is_empty(), "procedure name must not be empty");
        Self(Cow::Borrowed(name))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProcedureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProcedureName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single remote call: procedure name plus positional arguments.
///
/// By convention the first argument is the caller's login token; the
/// request never inspects it.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRequest {
    procedure: ProcedureName,
    arguments: Vec<Value>,
}

impl CallRequest {
    /// Creates a request with the given arguments.
    #[must_use]
    pub const fn new(procedure: ProcedureName, arguments: Vec<Value>) -> Self {
        Self {
            procedure,
            arguments,
        }
    }

    /// Creates a request with no arguments yet.
    #[must_use]
    pub const fn named(procedure: ProcedureName) -> Self {
        Self::new(procedure, Vec::new())
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.arguments.push(value.into());
        self
    }

    /// Returns the procedure name.
    #[must_use]
    pub const fn procedure(&self) -> &ProcedureName {
        &self.procedure
    }

    /// Returns the positional arguments.
    #[must_use]
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    /// Consumes the request, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> (ProcedureName, Vec<Value>) {
        (self.procedure, self.arguments)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    const DOMAIN_CHECK: ProcedureName = ProcedureName::from_static("domain_check");

    #[test]
    fn test_blank_names_rejected() {
        assert!(matches!(
            ProcedureName::new(""),
            Err(DomainError::InvalidProcedureName(_))
        ));
        assert!(ProcedureName::new("  \t").is_err());
        assert_eq!(ProcedureName::new("member_show_details").unwrap().as_str(), "member_show_details");
    }

    #[test]
    fn test_static_and_owned_names_compare_equal() {
        let owned = ProcedureName::new("domain_check").unwrap();
        assert_eq!(owned, DOMAIN_CHECK);
        assert_eq!(DOMAIN_CHECK.to_string(), "domain_check");
    }

    #[test]
    fn test_arguments_keep_order() {
        let request = CallRequest::named(DOMAIN_CHECK)
            .arg("token")
            .arg(vec![Value::structure([("domain_name", "example.com")])]);
        assert_eq!(request.arguments().len(), 2);
        assert_eq!(request.arguments()[0], Value::from("token"));
        assert_eq!(
            request.arguments()[1].pointer("/0/domain_name"),
            Some(&Value::from("example.com"))
        );
    }
}
