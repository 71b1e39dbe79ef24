//! XML-RPC response decoding.
//!
//! The body is first read into a small element tree, then interpreted. Any
//! structural surprise is reported as `CodecError::Decode`; nothing here
//! panics on remote input.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDateTime;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use registrar_application::ports::CodecError;
use registrar_domain::{CallResponse, Fault, Struct, Value, WIRE_DATETIME_FORMAT};

/// Alternative timestamp layout some servers emit.
const DASHED_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Deepest element nesting accepted in a response body.
///
/// Decoding recurses once per level, so deeper documents are rejected while
/// the tree is still being read.
pub const MAX_DEPTH: usize = 256;

type DecodeResult<T> = Result<T, CodecError>;

fn decode_error(message: impl Into<String>) -> CodecError {
    CodecError::Decode(message.into())
}

fn check_depth(open: usize) -> DecodeResult<()> {
    if open >= MAX_DEPTH {
        return Err(decode_error(format!("nesting exceeds {MAX_DEPTH} levels")));
    }
    Ok(())
}

/// A parsed XML element: local name, child elements and character data.
#[derive(Debug, Default)]
struct Element {
    name: String,
    children: Vec<Element>,
    text: String,
}

impl Element {
    fn new(start: &BytesStart<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            ..Self::default()
        }
    }

    fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    fn require(&self, name: &str) -> DecodeResult<&Self> {
        self.child(name)
            .ok_or_else(|| decode_error(format!("<{}> has no <{name}>", self.name)))
    }

    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> {
        self.children.iter().filter(move |child| child.name == name)
    }
}

/// Reads `body` into an element tree rooted at the document element.
fn parse_tree(body: &[u8]) -> DecodeResult<Element> {
    let mut reader = Reader::from_reader(body);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| decode_error(format!("malformed XML at byte {}: {e}", reader.buffer_position())))?;
        match event {
            Event::Start(start) => {
                if root.is_some() {
                    return Err(decode_error("content after document element"));
                }
                check_depth(stack.len())?;
                stack.push(Element::new(&start));
            }
            Event::Empty(start) => {
                check_depth(stack.len())?;
                let element = Element::new(&start);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None if root.is_none() => root = Some(element),
                    None => return Err(decode_error("content after document element")),
                }
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| decode_error("unbalanced closing tag"))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| decode_error(format!("bad character data: {e}")))?;
                match stack.last_mut() {
                    Some(current) => current.text.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => return Err(decode_error("text outside document element")),
                }
            }
            Event::CData(data) => {
                let data = std::str::from_utf8(&data)
                    .map_err(|e| decode_error(format!("bad CDATA: {e}")))?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(data);
                }
            }
            Event::Eof => break,
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
        }
    }

    if !stack.is_empty() {
        return Err(decode_error("unexpected end of document"));
    }
    root.ok_or_else(|| decode_error("empty document"))
}

/// Decodes a `<methodResponse>` document.
pub fn decode_response(body: &[u8]) -> DecodeResult<CallResponse> {
    let root = parse_tree(body)?;
    if root.name != "methodResponse" {
        return Err(decode_error(format!(
            "expected <methodResponse>, found <{}>",
            root.name
        )));
    }

    if let Some(params) = root.child("params") {
        let result = match params.child("param") {
            Some(param) => decode_value(param.require("value")?)?,
            None => Value::Nil,
        };
        return Ok(CallResponse::success(result));
    }

    if let Some(fault) = root.child("fault") {
        let descriptor = decode_value(fault.require("value")?)?;
        return decode_fault(&descriptor).map(CallResponse::Fault);
    }

    Err(decode_error("<methodResponse> has neither <params> nor <fault>"))
}

/// Extracts actor and message from a fault descriptor.
fn decode_fault(descriptor: &Value) -> DecodeResult<Fault> {
    let members = descriptor
        .as_struct()
        .ok_or_else(|| decode_error(format!("fault is a {}, not a struct", descriptor.type_name())))?;

    let actor = ["faultactor", "faultCode"]
        .iter()
        .find_map(|key| members.get(*key))
        .map(scalar_text)
        .unwrap_or_default();
    let message = ["faultstring", "faultString"]
        .iter()
        .find_map(|key| members.get(*key))
        .map(scalar_text)
        .ok_or_else(|| decode_error("fault has no faultstring"))?;

    Ok(Fault::business(actor, message))
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Int(number) => number.to_string(),
        Value::Double(number) => number.to_string(),
        Value::Boolean(flag) => flag.to_string(),
        Value::Nil => String::new(),
        other => format!("<{}>", other.type_name()),
    }
}

/// Decodes the content of a `<value>` element.
fn decode_value(value: &Element) -> DecodeResult<Value> {
    let typed = match value.children.as_slice() {
        [] => return Ok(Value::String(value.text.clone())),
        [typed] => typed,
        _ => return Err(decode_error("<value> holds more than one element")),
    };
    let text = typed.text.as_str();

    match typed.name.as_str() {
        "i4" | "int" | "i8" => text
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|e| decode_error(format!("bad <{}> {text:?}: {e}", typed.name))),
        "boolean" => match text.trim() {
            "1" => Ok(Value::Boolean(true)),
            "0" => Ok(Value::Boolean(false)),
            other => Err(decode_error(format!("bad <boolean> {other:?}"))),
        },
        "string" => Ok(Value::String(text.to_owned())),
        "double" => text
            .trim()
            .parse::<f64>()
            .map(Value::Double)
            .map_err(|e| decode_error(format!("bad <double> {text:?}: {e}"))),
        "dateTime.iso8601" => {
            let text = text.trim();
            NaiveDateTime::parse_from_str(text, WIRE_DATETIME_FORMAT)
                .or_else(|_| NaiveDateTime::parse_from_str(text, DASHED_DATETIME_FORMAT))
                .map(Value::DateTime)
                .map_err(|e| decode_error(format!("bad <dateTime.iso8601> {text:?}: {e}")))
        }
        "base64" => {
            let compact: String = text.split_whitespace().collect();
            STANDARD
                .decode(compact)
                .map(Value::Base64)
                .map_err(|e| decode_error(format!("bad <base64>: {e}")))
        }
        "nil" => Ok(Value::Nil),
        "array" => typed
            .require("data")?
            .children_named("value")
            .map(decode_value)
            .collect::<DecodeResult<Vec<_>>>()
            .map(Value::Array),
        "struct" => typed
            .children_named("member")
            .map(decode_member)
            .collect::<DecodeResult<Struct>>()
            .map(Value::Struct),
        other => Err(decode_error(format!("unknown value type <{other}>"))),
    }
}

fn decode_member(member: &Element) -> DecodeResult<(String, Value)> {
    let name = member.require("name")?.text.clone();
    let value = decode_value(member.require("value")?)?;
    Ok((name, value))
}
