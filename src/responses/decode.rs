//! Decoding of raw response bodies into envelopes.
//!
//! The decoder is format-aware but kind-agnostic: it parses the body per
//! the declared [`ResponseFormat`], requires a usable `result` field, reads
//! the shared `apiversion` number, and stamps the envelope with the
//! [`ResponseKind`] the caller requested. Status-code interpretation is not
//! its business; a [`DecodeError`] hands control to the classifier.

use crate::config::ResponseFormat;
use crate::responses::{xml, Envelope, ResponseKind};
use serde_json::Value;
use thiserror::Error;

/// Error produced when a response body cannot be decoded into an envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The body could not be parsed in the declared format.
    #[error("malformed {format} response body: {reason}")]
    Malformed {
        /// The format the body was declared to be in.
        format: ResponseFormat,
        /// The parser's description of the failure.
        reason: String,
    },

    /// The body parsed, but carries no usable `result` field.
    #[error("response body has no `result` field")]
    MissingResult,
}

/// Decodes a raw response body into an [`Envelope`].
///
/// JSON mode parses the body as a map; XML mode first normalizes the
/// element tree into the same map shape. Either way, success
/// requires a non-null `result` field. `apiversion` is read as a number,
/// tolerating the numeric strings the XML normalization produces.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] when the body cannot be parsed, and
/// [`DecodeError::MissingResult`] when the parsed body has no usable
/// `result` field.
pub fn decode(
    body: &str,
    format: ResponseFormat,
    kind: ResponseKind,
) -> Result<Envelope, DecodeError> {
    let document = match format {
        ResponseFormat::Json => {
            serde_json::from_str::<Value>(body).map_err(|e| DecodeError::Malformed {
                format,
                reason: e.to_string(),
            })?
        }
        ResponseFormat::Xml => xml::document_to_value(body)?,
    };

    let map = document.as_object().ok_or(DecodeError::MissingResult)?;
    let result = match map.get("result") {
        None | Some(Value::Null) => return Err(DecodeError::MissingResult),
        Some(value) => value.clone(),
    };
    let api_version = map.get("apiversion").and_then(version_number);

    Ok(Envelope::new(kind, api_version, result))
}

/// Reads `apiversion` as a number or a numeric string.
fn version_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_round_trip_preserves_result_and_version() {
        let body = r#"{"apiversion": 3, "result": [{"brand_id": 7, "brand_name": "Acme"}]}"#;
        let envelope = decode(body, ResponseFormat::Json, ResponseKind::Brands).unwrap();

        assert_eq!(envelope.kind(), ResponseKind::Brands);
        assert_eq!(envelope.api_version(), Some(3));
        assert_eq!(
            envelope.result(),
            &json!([{"brand_id": 7, "brand_name": "Acme"}])
        );
    }

    #[test]
    fn test_json_empty_result_array_is_valid() {
        let body = r#"{"apiversion": 3, "result": []}"#;
        let envelope = decode(body, ResponseFormat::Json, ResponseKind::Products).unwrap();
        assert!(envelope.is_empty());
    }

    #[test]
    fn test_json_missing_result_key_fails() {
        let body = r#"{"apiversion": 3}"#;
        let result = decode(body, ResponseFormat::Json, ResponseKind::Brands);
        assert_eq!(result, Err(DecodeError::MissingResult));
    }

    #[test]
    fn test_json_null_result_fails() {
        let body = r#"{"apiversion": 3, "result": null}"#;
        let result = decode(body, ResponseFormat::Json, ResponseKind::Brands);
        assert_eq!(result, Err(DecodeError::MissingResult));
    }

    #[test]
    fn test_json_non_object_body_fails() {
        let result = decode("[1, 2, 3]", ResponseFormat::Json, ResponseKind::Brands);
        assert_eq!(result, Err(DecodeError::MissingResult));
    }

    #[test]
    fn test_json_malformed_body_fails() {
        let result = decode("{not json", ResponseFormat::Json, ResponseKind::Brands);
        assert!(matches!(
            result,
            Err(DecodeError::Malformed {
                format: ResponseFormat::Json,
                ..
            })
        ));
    }

    #[test]
    fn test_xml_body_decodes_like_json() {
        let body = "<response>\
                    <apiversion>3</apiversion>\
                    <result><good><good_id>17</good_id></good></result>\
                    </response>";
        let envelope = decode(body, ResponseFormat::Xml, ResponseKind::Products).unwrap();

        assert_eq!(envelope.api_version(), Some(3));
        assert_eq!(envelope.result()["good"]["good_id"], json!("17"));
    }

    #[test]
    fn test_xml_missing_result_fails() {
        let body = "<response><apiversion>3</apiversion></response>";
        let result = decode(body, ResponseFormat::Xml, ResponseKind::Products);
        assert_eq!(result, Err(DecodeError::MissingResult));
    }

    #[test]
    fn test_xml_malformed_body_fails() {
        let result = decode("<response>", ResponseFormat::Xml, ResponseKind::Products);
        assert!(matches!(
            result,
            Err(DecodeError::Malformed {
                format: ResponseFormat::Xml,
                ..
            })
        ));
    }

    #[test]
    fn test_version_number_tolerates_strings() {
        assert_eq!(version_number(&json!(3)), Some(3));
        assert_eq!(version_number(&json!("3")), Some(3));
        assert_eq!(version_number(&json!(" 3 ")), Some(3));
        assert_eq!(version_number(&json!("three")), None);
        assert_eq!(version_number(&json!([3])), None);
    }
}
