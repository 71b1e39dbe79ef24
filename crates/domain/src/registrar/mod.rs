//! Typed records for the registrar's remote procedures.
//!
//! The registrar API takes loosely-typed associative arrays. These records
//! name every field once and convert into the exact [`Value`] shapes the
//! service expects, so call sites never assemble member maps by hand.

mod contact;
mod domain;
mod member;
mod product;
pub mod procedures;

use std::fmt;

pub use contact::{ContactDetails, ContactInfo, ContactSet, ContactType};
pub use domain::{DomainCheck, NameserverChange, Nameservers, TransferRequest};
pub use member::{DomainListQuery, MemberProfile};
pub use product::{ProductAction, ProductType, Tld};

use crate::value::Value;

/// Opaque credential sent as the first argument of every registrar call.
///
/// The token is forwarded untouched; its contents never appear in `Debug`
/// output or logs.
#[derive(Clone, PartialEq)]
pub struct LoginToken(Value);

impl LoginToken {
    /// Wraps a credential value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the credential as a call argument.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Debug for LoginToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LoginToken(<redacted>)")
    }
}

impl From<Value> for LoginToken {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Builds the `[{domain_name, ...}]` list most domain procedures take.
pub(crate) fn single_detail_list<const N: usize>(
    domain_name: &str,
    members: [(&str, Value); N],
) -> Value {
    let mut record = crate::value::Struct::new();
    record.insert("domain_name".to_owned(), Value::from(domain_name));
    for (name, value) in members {
        record.insert(name.to_owned(), value);
    }
    Value::Array(vec![Value::Struct(record)])
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_login_token_is_redacted() {
        let token = LoginToken::new(Value::structure([("login", "reseller"), ("password", "s3cret")]));
        let shown = format!("{token:?}");
        assert!(!shown.contains("s3cret"));
        assert_eq!(token.as_value().get("login"), Some(&Value::from("reseller")));
    }

    #[test]
    fn test_single_detail_list_shape() {
        let list = single_detail_list("example.com", [("domain_auto_renewal", Value::from("Y"))]);
        assert_eq!(list.pointer("/0/domain_name"), Some(&Value::from("example.com")));
        assert_eq!(list.pointer("/0/domain_auto_renewal"), Some(&Value::from("Y")));
        assert!(list.at(1).is_none());
    }
}
