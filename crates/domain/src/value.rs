//! Structured values carried in call arguments and results.
//!
//! [`Value`] is the single data model shared by callers, the wire codec and
//! the typed registrar records. It mirrors the scalar and compound types an
//! XML-RPC peer can exchange, without tying the domain to any wire format.

use std::collections::BTreeMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDateTime;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Ordered member map of a [`Value::Struct`].
pub type Struct = BTreeMap<String, Value>;

/// Timestamp layout used by `dateTime.iso8601` values on the wire.
pub const WIRE_DATETIME_FORMAT: &str = "%Y%m%dT%H:%M:%S";

/// Timestamp layout used when a value is rendered as JSON.
const JSON_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A structured argument or result value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Nil,
    /// Boolean flag.
    Boolean(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Double(f64),
    /// Text.
    String(String),
    /// Timestamp without zone information.
    DateTime(NaiveDateTime),
    /// Opaque binary payload.
    Base64(Vec<u8>),
    /// Ordered sequence.
    Array(Vec<Value>),
    /// Named members.
    Struct(Struct),
}

impl Value {
    /// Builds a [`Value::Struct`] from `(name, value)` pairs.
    ///
    /// Later pairs replace earlier ones with the same name.
    #[must_use]
    pub fn structure<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Struct(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds a [`Value::Base64`] payload.
    #[must_use]
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Self::Base64(data.into())
    }

    /// Looks up a struct member by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Struct(members) => members.get(key),
            _ => None,
        }
    }

    /// Looks up an array element by position.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Self> {
        match self {
            Self::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Navigates nested structs and arrays with a `/`-separated path.
    ///
    /// Segments name struct members or array indices, so
    /// `"/details/0/domain_name"` reads the `domain_name` member of the
    /// first element of `details`. The empty path returns `self`.
    #[must_use]
    pub fn pointer(&self, pointer: &str) -> Option<&Self> {
        if pointer.is_empty() {
            return Some(self);
        }
        let rest = pointer.strip_prefix('/')?;
        rest.split('/').try_fold(self, |current, segment| match current {
            Self::Struct(members) => members.get(segment),
            Self::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Returns the text if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an int.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the number as a float if this is a double or an int.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the flag if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the timestamp if this is a date-time.
    #[must_use]
    pub const fn as_datetime(&self) -> Option<&NaiveDateTime> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Returns the payload if this is binary data.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Base64(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the elements if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the members if this is a struct.
    #[must_use]
    pub const fn as_struct(&self) -> Option<&Struct> {
        match self {
            Self::Struct(members) => Some(members),
            _ => None,
        }
    }

    /// Returns true for [`Value::Nil`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the wire type tag of this value.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Boolean(_) => "boolean",
            Self::Int(_) => "int",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::DateTime(_) => "dateTime.iso8601",
            Self::Base64(_) => "base64",
            Self::Array(_) => "array",
            Self::Struct(_) => "struct",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<Struct> for Value {
    fn from(value: Struct) -> Self {
        Self::Struct(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Nil,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => n.as_i64().map_or_else(
                || Self::Double(n.as_f64().unwrap_or_default()),
                Self::Int,
            ),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(members) => Self::Struct(
                members
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Nil => serializer.serialize_unit(),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Double(d) => serializer.serialize_f64(*d),
            Self::String(s) => serializer.serialize_str(s),
            Self::DateTime(dt) => {
                serializer.collect_str(&dt.format(JSON_DATETIME_FORMAT))
            }
            Self::Base64(data) => serializer.serialize_str(&STANDARD.encode(data)),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Struct(members) => {
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (k, v) in members {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn check_result() -> Value {
        Value::structure([
            ("number_of_records", Value::from(1)),
            (
                "details",
                Value::from(vec![Value::structure([
                    ("domain_name", "example.com"),
                    ("details", "Not Registered"),
                ])]),
            ),
        ])
    }

    #[test]
    fn test_pointer_walks_structs_and_arrays() {
        let result = check_result();
        assert_eq!(
            result.pointer("/details/0/details").and_then(Value::as_str),
            Some("Not Registered")
        );
        assert_eq!(
            result.pointer("/number_of_records").and_then(Value::as_i64),
            Some(1)
        );
        assert_eq!(result.pointer(""), Some(&result));
    }

    #[test]
    fn test_pointer_misses() {
        let result = check_result();
        assert!(result.pointer("/details/1").is_none());
        assert!(result.pointer("/details/x").is_none());
        assert!(result.pointer("details").is_none());
        assert!(result.pointer("/number_of_records/0").is_none());
    }

    #[test]
    fn test_get_and_at() {
        let result = check_result();
        let details = result.get("details").unwrap();
        assert_eq!(details.at(0).and_then(|d| d.get("domain_name")), Some(&Value::from("example.com")));
        assert!(Value::Nil.get("details").is_none());
        assert!(Value::from("x").at(0).is_none());
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({
            "domain_name": "example.com",
            "years": 2,
            "price": 9.5,
            "locked": false,
            "dns": ["ns1.example.com", null]
        });
        let value = Value::from(json);
        assert_eq!(value.get("years"), Some(&Value::Int(2)));
        assert_eq!(value.get("price"), Some(&Value::Double(9.5)));
        assert_eq!(value.get("locked"), Some(&Value::Boolean(false)));
        assert_eq!(value.pointer("/dns/1"), Some(&Value::Nil));
    }

    #[test]
    fn test_serialize_to_json() {
        let when = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let value = Value::structure([
            ("when", Value::from(when)),
            ("blob", Value::bytes(b"hi".to_vec())),
            ("none", Value::Nil),
        ]);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"when": "2024-03-01T12:30:00", "blob": "aGk=", "none": null})
        );
    }

    #[test]
    fn test_option_and_type_names() {
        assert!(Value::from(None::<String>).is_nil());
        assert_eq!(Value::from(Some("x")).type_name(), "string");
        assert_eq!(Value::from(3_i64).type_name(), "int");
        assert_eq!(Value::from(vec![1, 2]).type_name(), "array");
        assert_eq!(Value::Int(4).as_f64(), Some(4.0));
    }
}
