//! Response metadata types for the National Catalog API.
//!
//! This module provides [`RawResponse`] (the undecoded wire response) and
//! [`ResponseMeta`] (the typed per-call header snapshot). Every call
//! returns a fresh `ResponseMeta` alongside its result, so a client
//! instance carries no per-call mutable state.

use std::collections::HashMap;
use std::fmt;

/// Rate-limit usage parsed from the `API-Usage-Limit` header.
///
/// The header value has the form `"<used>/<limit>"`. Malformed values are
/// kept raw: without a `/`, [`ApiUsage::limit`] returns the whole value and
/// [`ApiUsage::current_count`] returns `None`.
///
/// # Example
///
/// ```rust
/// use national_catalog_api::ApiUsage;
///
/// let usage = ApiUsage::new("42/500");
/// assert_eq!(usage.current_count(), Some(42));
/// assert_eq!(usage.limit(), "500");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUsage {
    raw: String,
}

impl ApiUsage {
    /// Wraps a raw `API-Usage-Limit` header value.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Returns the number of requests used in the current window.
    #[must_use]
    pub fn current_count(&self) -> Option<u64> {
        self.raw
            .split_once('/')
            .and_then(|(used, _)| used.trim().parse().ok())
    }

    /// Returns the request limit, or the raw header value when the header
    /// does not follow the `used/limit` form.
    #[must_use]
    pub fn limit(&self) -> &str {
        self.raw.split_once('/').map_or(self.raw.as_str(), |(_, limit)| limit)
    }

    /// Returns the raw header value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ApiUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// An undecoded response from the service: status code, headers, and body
/// text, exactly as received.
#[derive(Clone, Debug)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, keyed by lowercase name. Only the first value of
    /// a repeated header is kept.
    pub headers: HashMap<String, String>,
    /// The response body text.
    pub body: String,
}

impl RawResponse {
    /// Creates a raw response from its parts.
    #[must_use]
    pub const fn new(status: u16, headers: HashMap<String, String>, body: String) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns a header value by its lowercase name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// The observed response headers of one call, in typed form.
///
/// Captured fresh from every raw response; never retained across calls.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseMeta {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The `ETag` validator, unquoted, when the service sent one.
    pub etag: Option<String>,
    /// Rate-limit usage from the `API-Usage-Limit` header.
    pub usage: Option<ApiUsage>,
    /// Seconds to wait before retrying, from the `Retry-After` header.
    /// Advisory only; this client never retries on its own.
    pub retry_after: Option<f64>,
}

impl ResponseMeta {
    /// Extracts the typed header snapshot from a raw response.
    #[must_use]
    pub fn from_response(raw: &RawResponse) -> Self {
        let etag = raw.header("etag").map(|value| {
            value
                .trim_matches(|c: char| c.is_whitespace() || c == '"' || c == '\'')
                .to_string()
        });
        let usage = raw.header("api-usage-limit").map(ApiUsage::new);
        let retry_after = raw
            .header("retry-after")
            .and_then(|value| value.trim().parse::<f64>().ok());

        Self {
            status: raw.status,
            etag,
            usage,
            retry_after,
        }
    }

    /// Returns the number of requests used in the current window.
    #[must_use]
    pub fn current_usage_count(&self) -> Option<u64> {
        self.usage.as_ref().and_then(ApiUsage::current_count)
    }

    /// Returns the request limit, or the raw `API-Usage-Limit` value when
    /// it does not follow the `used/limit` form.
    #[must_use]
    pub fn usage_limit(&self) -> Option<&str> {
        self.usage.as_ref().map(ApiUsage::limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_with_header(name: &str, value: &str) -> RawResponse {
        let mut headers = HashMap::new();
        headers.insert(name.to_string(), value.to_string());
        RawResponse::new(200, headers, String::new())
    }

    #[test]
    fn test_api_usage_parses_used_and_limit() {
        let usage = ApiUsage::new("42/500");
        assert_eq!(usage.current_count(), Some(42));
        assert_eq!(usage.limit(), "500");
    }

    #[test]
    fn test_api_usage_without_slash_keeps_raw_limit() {
        let usage = ApiUsage::new("unlimited");
        assert_eq!(usage.current_count(), None);
        assert_eq!(usage.limit(), "unlimited");
    }

    #[test]
    fn test_api_usage_with_garbage_count() {
        let usage = ApiUsage::new("abc/500");
        assert_eq!(usage.current_count(), None);
        assert_eq!(usage.limit(), "500");
    }

    #[test]
    fn test_meta_unquotes_etag() {
        let raw = raw_with_header("etag", "\"1f80c-27e-53da\"");
        let meta = ResponseMeta::from_response(&raw);
        assert_eq!(meta.etag.as_deref(), Some("1f80c-27e-53da"));
    }

    #[test]
    fn test_meta_reads_usage_header() {
        let raw = raw_with_header("api-usage-limit", "42/500");
        let meta = ResponseMeta::from_response(&raw);
        assert_eq!(meta.current_usage_count(), Some(42));
        assert_eq!(meta.usage_limit(), Some("500"));
    }

    #[test]
    fn test_meta_usage_fallback_without_slash() {
        let raw = raw_with_header("api-usage-limit", "500");
        let meta = ResponseMeta::from_response(&raw);
        assert_eq!(meta.current_usage_count(), None);
        assert_eq!(meta.usage_limit(), Some("500"));
    }

    #[test]
    fn test_meta_parses_retry_after_seconds() {
        let raw = raw_with_header("retry-after", "2.5");
        let meta = ResponseMeta::from_response(&raw);
        assert!((meta.retry_after.unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_meta_defaults_when_headers_absent() {
        let raw = RawResponse::new(200, HashMap::new(), String::new());
        let meta = ResponseMeta::from_response(&raw);
        assert_eq!(meta.status, 200);
        assert!(meta.etag.is_none());
        assert!(meta.usage.is_none());
        assert!(meta.retry_after.is_none());
    }
}
