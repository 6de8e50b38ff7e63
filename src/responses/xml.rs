//! Lossless conversion of XML response bodies into JSON-like value trees.
//!
//! The service's XML format mirrors its JSON format structurally: a root
//! element whose children are the `result` and `apiversion` fields. The
//! conversion folds an element tree into a [`serde_json::Value`] map so the
//! decoder can read both formats identically:
//!
//! - child elements become map keys; repeated names collect into arrays,
//! - attributes become `@name` keys,
//! - text-only elements become strings,
//! - mixed content keeps its text under a `#text` key.

use crate::config::ResponseFormat;
use crate::responses::DecodeError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

/// Parses an XML document and returns the value tree of its root element.
pub(crate) fn document_to_value(text: &str) -> Result<Value, DecodeError> {
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Start(start) => return element_to_value(&mut reader, &start),
            Event::Empty(start) => {
                return Ok(Value::Object(attributes_to_value(&start)?.unwrap_or_default()))
            }
            Event::Eof => {
                return Err(DecodeError::Malformed {
                    format: ResponseFormat::Xml,
                    reason: "document has no root element".to_string(),
                })
            }
            // declarations, comments, processing instructions
            _ => {}
        }
    }
}

/// Consumes events up to the matching end tag and folds them into a value.
fn element_to_value(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart<'_>,
) -> Result<Value, DecodeError> {
    let mut map = attributes_to_value(start)?.unwrap_or_default();
    let mut text = String::new();

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Start(child) => {
                let name = element_name(&child);
                let value = element_to_value(reader, &child)?;
                insert_child(&mut map, name, value);
            }
            Event::Empty(child) => {
                let name = element_name(&child);
                let value = attributes_to_value(&child)?
                    .map_or_else(|| Value::String(String::new()), Value::Object);
                insert_child(&mut map, name, value);
            }
            Event::Text(t) => {
                text.push_str(&t.unescape().map_err(malformed)?);
            }
            Event::CData(data) => {
                text.push_str(&String::from_utf8_lossy(&data.into_inner()));
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(DecodeError::Malformed {
                    format: ResponseFormat::Xml,
                    reason: "unexpected end of document".to_string(),
                })
            }
            _ => {}
        }
    }

    if map.is_empty() {
        return Ok(Value::String(text));
    }
    if !text.is_empty() {
        map.insert("#text".to_string(), Value::String(text));
    }
    Ok(Value::Object(map))
}

/// Groups a child under its element name, collecting repeats into arrays.
fn insert_child(map: &mut Map<String, Value>, name: String, value: Value) {
    match map.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(name, value);
        }
    }
}

/// Returns the element's attributes as a map of `@name` keys, or `None`
/// when the element has no attributes.
fn attributes_to_value(start: &BytesStart<'_>) -> Result<Option<Map<String, Value>>, DecodeError> {
    let mut map = Map::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(malformed)?;
        let key = format!("@{}", String::from_utf8_lossy(attribute.key.as_ref()));
        let value = attribute.unescape_value().map_err(malformed)?.into_owned();
        map.insert(key, Value::String(value));
    }
    Ok(if map.is_empty() { None } else { Some(map) })
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

fn malformed(error: impl std::fmt::Display) -> DecodeError {
    DecodeError::Malformed {
        format: ResponseFormat::Xml,
        reason: error.to_string(),
    }
}
