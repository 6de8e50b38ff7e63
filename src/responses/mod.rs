//! Response envelope types for the National Catalog API.
//!
//! Every successful call produces an [`Envelope`]: the operation-specific
//! `result` payload plus the shared `apiversion` number, tagged with the
//! [`ResponseKind`] the caller asked for. Envelopes are immutable once
//! decoded.
//!
//! The decoder in [`decode`] handles both response formats the service
//! speaks (JSON and XML) and normalizes them into the same envelope shape.

mod decode;
mod xml;

pub use decode::{decode, DecodeError};

use serde_json::Value;
use std::fmt;

/// The closed set of response kinds, one per operation family.
///
/// The remote service tags nothing in the body; the caller knows which
/// operation it invoked, and the kind travels with the envelope so that
/// downstream code can interpret the `result` payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    /// Attribute schema listing.
    Attributes,
    /// Brand listing.
    Brands,
    /// Category tree listing.
    Categories,
    /// Location listing.
    Locations,
    /// Party listing.
    Parties,
    /// Product card lookup results.
    Products,
    /// Per-good ETag listing for a party.
    EtagsList,
    /// Free-text search suggestions.
    Suggestions,
    /// Review submission acknowledgement.
    AddReview,
    /// Feed submission acknowledgement (carries the feed id).
    Feed,
    /// Feed processing status.
    FeedStatus,
}

impl ResponseKind {
    /// Returns a short lowercase name for logging and diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attributes => "attributes",
            Self::Brands => "brands",
            Self::Categories => "categories",
            Self::Locations => "locations",
            Self::Parties => "parties",
            Self::Products => "products",
            Self::EtagsList => "etags-list",
            Self::Suggestions => "suggestions",
            Self::AddReview => "add-review",
            Self::Feed => "feed",
            Self::FeedStatus => "feed-status",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded response: the `result` payload plus the API version reported
/// by the service.
///
/// A call either returns exactly one envelope or fails with exactly one
/// error; partial results never surface. The one wrinkle is 404, where the
/// error carries an *empty* envelope of the requested kind so callers can
/// treat "not found" as an empty collection.
#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
    kind: ResponseKind,
    api_version: Option<i64>,
    result: Value,
}

impl Envelope {
    pub(crate) const fn new(kind: ResponseKind, api_version: Option<i64>, result: Value) -> Self {
        Self {
            kind,
            api_version,
            result,
        }
    }

    /// Creates a well-formed envelope with an empty result.
    ///
    /// Used for the 404 case, where the service reports "data not found"
    /// but the caller may still want an empty collection of the requested
    /// kind.
    #[must_use]
    pub const fn empty(kind: ResponseKind) -> Self {
        Self {
            kind,
            api_version: None,
            result: Value::Array(Vec::new()),
        }
    }

    /// Returns the response kind this envelope was decoded for.
    #[must_use]
    pub const fn kind(&self) -> ResponseKind {
        self.kind
    }

    /// Returns the `apiversion` reported by the service, when present.
    #[must_use]
    pub const fn api_version(&self) -> Option<i64> {
        self.api_version
    }

    /// Returns the raw `result` payload.
    #[must_use]
    pub const fn result(&self) -> &Value {
        &self.result
    }

    /// Returns the result as a slice of records.
    ///
    /// Most operations return an array of records; for the ones that do
    /// not (for example feed submission), this returns an empty slice.
    #[must_use]
    pub fn records(&self) -> &[Value] {
        self.result.as_array().map_or(&[], Vec::as_slice)
    }

    /// Returns `true` when the result payload carries no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.result {
            Value::Null => true,
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::String(s) => s.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }

    /// Returns the feed identifier from a feed submission acknowledgement.
    ///
    /// The service reports the id either as a `feed_id` field of the result
    /// record or as a bare number.
    #[must_use]
    pub fn feed_id(&self) -> Option<i64> {
        match &self.result {
            Value::Object(map) => map.get("feed_id").and_then(Value::as_i64),
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_envelope_has_no_records() {
        let envelope = Envelope::empty(ResponseKind::Brands);
        assert_eq!(envelope.kind(), ResponseKind::Brands);
        assert!(envelope.is_empty());
        assert!(envelope.records().is_empty());
        assert!(envelope.api_version().is_none());
    }

    #[test]
    fn test_records_returns_array_items() {
        let envelope = Envelope::new(
            ResponseKind::Brands,
            Some(3),
            json!([{"brand_id": 1}, {"brand_id": 2}]),
        );
        assert_eq!(envelope.records().len(), 2);
        assert!(!envelope.is_empty());
    }

    #[test]
    fn test_feed_id_from_object_result() {
        let envelope = Envelope::new(ResponseKind::Feed, Some(3), json!({"feed_id": 4242}));
        assert_eq!(envelope.feed_id(), Some(4242));
    }

    #[test]
    fn test_feed_id_from_bare_number() {
        let envelope = Envelope::new(ResponseKind::Feed, Some(3), json!(4242));
        assert_eq!(envelope.feed_id(), Some(4242));
    }

    #[test]
    fn test_feed_id_absent_for_array_result() {
        let envelope = Envelope::new(ResponseKind::Feed, Some(3), json!([]));
        assert_eq!(envelope.feed_id(), None);
    }

    #[test]
    fn test_kind_names_are_stable() {
        assert_eq!(ResponseKind::EtagsList.to_string(), "etags-list");
        assert_eq!(ResponseKind::FeedStatus.to_string(), "feed-status");
    }
}
