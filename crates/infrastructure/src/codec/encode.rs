//! XML-RPC call encoding.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use quick_xml::escape::escape;
use registrar_application::ports::CodecError;
use registrar_domain::{CallRequest, Value, WIRE_DATETIME_FORMAT};

/// Encodes a `<methodCall>` document.
pub fn encode_call(request: &CallRequest) -> Result<String, CodecError> {
    let mut out = String::with_capacity(256);
    out.push_str(r#"<?xml version="1.0"?>"#);
    out.push_str("<methodCall><methodName>");
    out.push_str(&escape(request.procedure().as_str()));
    out.push_str("</methodName><params>");
    for argument in request.arguments() {
        out.push_str("<param>");
        encode_value(argument, &mut out)?;
        out.push_str("</param>");
    }
    out.push_str("</params></methodCall>");
    Ok(out)
}

/// Appends `<value>…</value>` for `value`.
pub fn encode_value(value: &Value, out: &mut String) -> Result<(), CodecError> {
    out.push_str("<value>");
    match value {
        Value::Nil => out.push_str("<nil/>"),
        Value::Boolean(flag) => {
            out.push_str(if *flag {
                "<boolean>1</boolean>"
            } else {
                "<boolean>0</boolean>"
            });
        }
        Value::Int(number) => {
            let tag = if i32::try_from(*number).is_ok() { "int" } else { "i8" };
            out.push_str(&format!("<{tag}>{number}</{tag}>"));
        }
        Value::Double(number) => {
            if !number.is_finite() {
                return Err(CodecError::Encode(format!(
                    "{number} cannot be sent as a double"
                )));
            }
            out.push_str(&format!("<double>{number}</double>"));
        }
        Value::String(text) => {
            out.push_str("<string>");
            out.push_str(&escape(text.as_str()));
            out.push_str("</string>");
        }
        Value::DateTime(at) => {
            out.push_str("<dateTime.iso8601>");
            out.push_str(&at.format(WIRE_DATETIME_FORMAT).to_string());
            out.push_str("</dateTime.iso8601>");
        }
        Value::Base64(bytes) => {
            out.push_str("<base64>");
            out.push_str(&STANDARD.encode(bytes));
            out.push_str("</base64>");
        }
        Value::Array(items) => {
            out.push_str("<array><data>");
            for item in items {
                encode_value(item, out)?;
            }
            out.push_str("</data></array>");
        }
        Value::Struct(members) => {
            out.push_str("<struct>");
            for (name, member) in members {
                out.push_str("<member><name>");
                out.push_str(&escape(name.as_str()));
                out.push_str("</name>");
                encode_value(member, out)?;
                out.push_str("</member>");
            }
            out.push_str("</struct>");
        }
    }
    out.push_str("</value>");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use registrar_domain::ProcedureName;

    fn encoded(value: &Value) -> String {
        let mut out = String::new();
        encode_value(value, &mut out).expect("encodable");
        out
    }

    #[test]
    fn test_encode_call_document() {
        let request = CallRequest::named(ProcedureName::from_static("member_show_details"))
            .arg("login")
            .arg("alice");

        let xml = encode_call(&request).expect("encodable");

        assert_eq!(
            xml,
            "<?xml version=\"1.0\"?><methodCall><methodName>member_show_details</methodName>\
             <params><param><value><string>login</string></value></param>\
             <param><value><string>alice</string></value></param></params></methodCall>"
        );
    }

    #[test]
    fn test_encode_scalars() {
        assert_eq!(encoded(&Value::Nil), "<value><nil/></value>");
        assert_eq!(encoded(&Value::Boolean(true)), "<value><boolean>1</boolean></value>");
        assert_eq!(encoded(&Value::Int(-7)), "<value><int>-7</int></value>");
        assert_eq!(encoded(&Value::Int(1 << 40)), "<value><i8>1099511627776</i8></value>");
        assert_eq!(encoded(&Value::Double(2.5)), "<value><double>2.5</double></value>");
        assert_eq!(encoded(&Value::bytes(*b"hi")), "<value><base64>aGk=</base64></value>");
    }

    #[test]
    fn test_encode_escapes_text() {
        assert_eq!(
            encoded(&Value::from("Smith & Sons <Ltd>")),
            "<value><string>Smith &amp; Sons &lt;Ltd&gt;</string></value>"
        );
    }

    #[test]
    fn test_encode_datetime() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(7, 5, 0))
            .expect("valid date");
        assert_eq!(
            encoded(&Value::DateTime(at)),
            "<value><dateTime.iso8601>20240309T07:05:00</dateTime.iso8601></value>"
        );
    }

    #[test]
    fn test_encode_detail_list() {
        let list = Value::Array(vec![Value::structure([("domain_name", "example.com")])]);
        assert_eq!(
            encoded(&list),
            "<value><array><data><value><struct><member><name>domain_name</name>\
             <value><string>example.com</string></value></member></struct></value>\
             </data></array></value>"
        );
    }

    #[test]
    fn test_non_finite_double_is_rejected() {
        let mut out = String::new();
        let result = encode_value(&Value::Double(f64::NAN), &mut out);
        assert!(matches!(result, Err(CodecError::Encode(_))));
    }
}
