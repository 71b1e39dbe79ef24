//! JSON helpers for rendering responses and reading arguments.

use registrar_domain::Value;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("invalid JSON {input:?}: {source}")]
    Deserialize {
        /// Text that failed to parse.
        input: String,
        /// Parser error.
        source: serde_json::Error,
    },

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to deterministic JSON.
///
/// Output format:
/// - 2-space indentation
/// - Trailing newline
/// - Struct members in name order (`Value::Struct` is a `BTreeMap`)
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Parses one JSON document into a call argument.
///
/// `"abc"` becomes a string, `12` an int, `{"a": [1]}` a struct holding an
/// array, and `null` a nil.
///
/// # Errors
///
/// Returns an error if `input` is not valid JSON.
pub fn parse_argument(input: &str) -> Result<Value, SerializationError> {
    serde_json::from_str::<serde_json::Value>(input)
        .map(Value::from)
        .map_err(|source| SerializationError::Deserialize {
            input: input.to_owned(),
            source,
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use registrar_domain::{CallResponse, Fault};

    #[test]
    fn test_stable_output_format() {
        let response = CallResponse::success(Value::structure([
            ("zone", Value::from("com")),
            ("details", Value::from("Not Registered")),
        ]));

        let json = to_json_stable(&response).expect("serializable");

        assert_eq!(
            json,
            "{\n  \"status\": \"success\",\n  \"result\": {\n    \"details\": \"Not Registered\",\n    \"zone\": \"com\"\n  }\n}\n"
        );
    }

    #[test]
    fn test_fault_rendering() {
        let json = to_json_stable(&CallResponse::from(Fault::business("auth", "invalid session")))
            .expect("serializable");
        assert!(json.contains("\"actor\": \"auth\""));
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!(parse_argument("\"alice\"").ok(), Some(Value::from("alice")));
        assert_eq!(parse_argument("7").ok(), Some(Value::Int(7)));
        assert_eq!(parse_argument("null").ok(), Some(Value::Nil));
        assert_eq!(
            parse_argument(r#"[{"domain_name": "example.com"}]"#).ok(),
            Some(Value::Array(vec![Value::structure([(
                "domain_name",
                "example.com"
            )])]))
        );
    }

    #[test]
    fn test_bare_word_is_not_json() {
        let error = parse_argument("alice").expect_err("not JSON");
        assert!(error.to_string().contains("\"alice\""));
    }
}
