//! Request types for the National Catalog API.
//!
//! This module provides the [`ApiRequest`] type and its builder. A request
//! names one of the fixed remote [`Operation`]s and carries either an
//! ordered parameter list (catalog operations, sent form-encoded) or a raw
//! feed payload (bulk submission, sent as the request body).

use std::fmt;

/// The closed set of remote operations.
///
/// Each variant maps to a fixed segment appended to the versioned base
/// path. The remote protocol uses POST for every operation, including
/// reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
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
    /// Product card lookup.
    Products,
    /// Per-good ETag listing.
    EtagsList,
    /// Free-text search suggestions.
    Suggestions,
    /// Review submission.
    AddReview,
    /// Bulk feed submission.
    Feed,
    /// Feed processing status.
    FeedStatus,
}

impl Operation {
    /// Returns the wire name appended to the versioned base path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attributes => "attributes",
            Self::Brands => "brands",
            Self::Categories => "categories",
            Self::Locations => "locations",
            Self::Parties => "parties",
            Self::Products => "product",
            Self::EtagsList => "etagslist",
            Self::Suggestions => "suggestions",
            Self::AddReview => "addreview",
            Self::Feed => "feed",
            Self::FeedStatus => "feed-status",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The payload of an outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestPayload {
    /// Form-encoded parameters, in insertion order. Authentication fields
    /// are merged in by the HTTP client at send time.
    Params(Vec<(String, String)>),
    /// Raw feed content. Authentication fields and the target party id
    /// travel in the query string; the content becomes the request body
    /// verbatim.
    Raw {
        /// The feed document, JSON or XML.
        content: String,
        /// The party the feed applies to.
        party_id: i64,
    },
}

/// A request to be sent to the National Catalog API.
///
/// Use [`ApiRequest::builder`] for catalog operations and
/// [`ApiRequest::feed`] for bulk feed submission.
///
/// # Example
///
/// ```rust
/// use national_catalog_api::clients::{ApiRequest, Operation};
///
/// let request = ApiRequest::builder(Operation::Products)
///     .param("gtin", "04600000000001")
///     .etag("1f80c-27e-53da")
///     .build();
///
/// assert_eq!(request.operation, Operation::Products);
/// assert!(request.is_conditional());
/// ```
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// The remote operation this request targets.
    pub operation: Operation,
    /// The request payload.
    pub payload: RequestPayload,
    /// Conditional-fetch validator. Sent as a quoted `If-None-Match`
    /// header; the value stored here is unquoted.
    pub etag: Option<String>,
}

impl ApiRequest {
    /// Creates a new builder for a catalog operation.
    #[must_use]
    pub fn builder(operation: Operation) -> ApiRequestBuilder {
        ApiRequestBuilder::new(operation)
    }

    /// Creates a bulk feed submission request.
    #[must_use]
    pub fn feed(content: impl Into<String>, party_id: i64) -> Self {
        Self {
            operation: Operation::Feed,
            payload: RequestPayload::Raw {
                content: content.into(),
                party_id,
            },
            etag: None,
        }
    }

    /// Returns `true` when the request carries a conditional-fetch validator.
    #[must_use]
    pub const fn is_conditional(&self) -> bool {
        self.etag.is_some()
    }
}

/// Builder for [`ApiRequest`] instances targeting catalog operations.
#[derive(Debug)]
pub struct ApiRequestBuilder {
    operation: Operation,
    params: Vec<(String, String)>,
    etag: Option<String>,
}

impl ApiRequestBuilder {
    fn new(operation: Operation) -> Self {
        Self {
            operation,
            params: Vec::new(),
            etag: None,
        }
    }

    /// Appends an operation parameter. Parameters keep insertion order.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Sets the conditional-fetch validator (unquoted).
    #[must_use]
    pub fn etag(mut self, etag: impl Into<String>) -> Self {
        self.etag = Some(etag.into());
        self
    }

    /// Builds the [`ApiRequest`].
    #[must_use]
    pub fn build(self) -> ApiRequest {
        ApiRequest {
            operation: self.operation,
            payload: RequestPayload::Params(self.params),
            etag: self.etag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_wire_names() {
        assert_eq!(Operation::Attributes.as_str(), "attributes");
        assert_eq!(Operation::Brands.as_str(), "brands");
        assert_eq!(Operation::Categories.as_str(), "categories");
        assert_eq!(Operation::Locations.as_str(), "locations");
        assert_eq!(Operation::Parties.as_str(), "parties");
        assert_eq!(Operation::Products.as_str(), "product");
        assert_eq!(Operation::EtagsList.as_str(), "etagslist");
        assert_eq!(Operation::Suggestions.as_str(), "suggestions");
        assert_eq!(Operation::AddReview.as_str(), "addreview");
        assert_eq!(Operation::Feed.as_str(), "feed");
        assert_eq!(Operation::FeedStatus.as_str(), "feed-status");
    }

    #[test]
    fn test_builder_keeps_parameter_order() {
        let request = ApiRequest::builder(Operation::Products)
            .param("ltin", "123")
            .param("party_id", 77)
            .build();

        match request.payload {
            RequestPayload::Params(params) => {
                assert_eq!(
                    params,
                    vec![
                        ("ltin".to_string(), "123".to_string()),
                        ("party_id".to_string(), "77".to_string()),
                    ]
                );
            }
            RequestPayload::Raw { .. } => panic!("expected form parameters"),
        }
    }

    #[test]
    fn test_builder_without_etag_is_unconditional() {
        let request = ApiRequest::builder(Operation::Brands).build();
        assert!(!request.is_conditional());
    }

    #[test]
    fn test_feed_request_carries_raw_payload() {
        let request = ApiRequest::feed(r#"[{"good_id": 1}]"#, 42);
        assert_eq!(request.operation, Operation::Feed);
        assert!(!request.is_conditional());
        match request.payload {
            RequestPayload::Raw { content, party_id } => {
                assert_eq!(content, r#"[{"good_id": 1}]"#);
                assert_eq!(party_id, 42);
            }
            RequestPayload::Params(_) => panic!("expected raw payload"),
        }
    }
}
