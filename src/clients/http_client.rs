//! The HTTP wire layer for National Catalog API communication.
//!
//! [`HttpClient`] turns an [`ApiRequest`] into an authenticated POST:
//! it merges the `format`/`apikey`/`supplier_key` authentication fields,
//! builds the versioned URL, attaches the conditional-fetch header when a
//! validator is supplied, and captures the raw status/headers/body for the
//! decode and classification stages.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, CONTENT_TYPE, IF_NONE_MATCH, USER_AGENT};

use crate::clients::http_request::{ApiRequest, Operation, RequestPayload};
use crate::clients::http_response::RawResponse;
use crate::config::CatalogConfig;

/// Version segment of the remote path scheme.
pub const API_VERSION: &str = "v3";

/// Library version from Cargo.toml.
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Low-level HTTP client for the National Catalog API.
///
/// The remote protocol uses POST for every operation. Catalog operations
/// send a form-encoded parameter map; feed submission sends the feed
/// content as the raw body with the authentication fields in the query
/// string.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`; calls take `&self` and share no mutable
/// state, so one instance can serve concurrent logical sessions.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Credentials, endpoint, and format selector.
    config: CatalogConfig,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Returns the active configuration for mutation.
    pub fn config_mut(&mut self) -> &mut CatalogConfig {
        &mut self.config
    }

    /// Returns the full URL for an operation:
    /// `{endpoint}/v3/{operation-name}`.
    #[must_use]
    pub fn url_for(&self, operation: Operation) -> String {
        format!(
            "{}/{API_VERSION}/{operation}",
            self.config.endpoint().as_str().trim_end_matches('/')
        )
    }

    /// Sends a request and captures the raw response.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`reqwest::Error`] on network or connection
    /// failure. Non-success status codes are not errors at this layer;
    /// they are classified downstream.
    pub async fn send(&self, request: &ApiRequest) -> Result<RawResponse, reqwest::Error> {
        let url = self.url_for(request.operation);
        tracing::debug!(operation = %request.operation, %url, "sending catalog request");

        let mut builder = match &request.payload {
            RequestPayload::Params(params) => {
                let form = self.merge_auth_params(params);
                self.client.post(&url).form(&form)
            }
            RequestPayload::Raw { content, party_id } => {
                // The content type is decided by the payload itself, not a
                // declared parameter: a leading '<' means XML.
                let content_type = if content.starts_with('<') {
                    "application/xml"
                } else {
                    "application/json"
                };
                self.client
                    .post(&url)
                    .query(&self.feed_query(*party_id))
                    .header(CONTENT_TYPE, content_type)
                    .body(content.clone())
            }
        };

        builder = builder.header(USER_AGENT, user_agent());
        if let Some(etag) = &request.etag {
            builder = builder.header(IF_NONE_MATCH, format!("\"{etag}\""));
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = parse_response_headers(response.headers());
        let body = response.text().await.unwrap_or_default();

        if status == 429 {
            tracing::warn!(operation = %request.operation, "request limit reached");
        }
        tracing::debug!(operation = %request.operation, status, "received catalog response");

        Ok(RawResponse::new(status, headers, body))
    }

    /// Prepends the authentication fields to the operation parameters.
    ///
    /// `format` and `apikey` are always present; `supplier_key` only when
    /// configured. An empty supplier key field is never sent.
    fn merge_auth_params(&self, params: &[(String, String)]) -> Vec<(String, String)> {
        let mut merged = Vec::with_capacity(params.len() + 3);
        merged.push((
            "format".to_string(),
            self.config.format().as_str().to_string(),
        ));
        merged.push((
            "apikey".to_string(),
            self.config.api_key().as_ref().to_string(),
        ));
        if let Some(supplier_key) = self.config.supplier_key() {
            merged.push(("supplier_key".to_string(), supplier_key.as_ref().to_string()));
        }
        merged.extend_from_slice(params);
        merged
    }

    /// Query-string parameters for feed submission, where the body carries
    /// the feed content instead of a form.
    fn feed_query(&self, party_id: i64) -> Vec<(String, String)> {
        let mut query = vec![(
            "apikey".to_string(),
            self.config.api_key().as_ref().to_string(),
        )];
        if let Some(supplier_key) = self.config.supplier_key() {
            query.push(("supplier_key".to_string(), supplier_key.as_ref().to_string()));
        }
        query.push(("party_id".to_string(), party_id.to_string()));
        query.push((
            "format".to_string(),
            self.config.format().as_str().to_string(),
        ));
        query
    }
}

/// Builds the User-Agent header value.
fn user_agent() -> String {
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    format!("National Catalog API Library v{LIB_VERSION} | Rust {rust_version}")
}

/// Flattens response headers into a lowercase-keyed map, keeping the first
/// value of any repeated header.
fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut result = HashMap::new();
    for (name, value) in headers {
        result
            .entry(name.as_str().to_string())
            .or_insert_with(|| value.to_str().unwrap_or_default().to_string());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, CatalogConfig, EndpointUrl, ResponseFormat, SupplierKey};

    fn test_config() -> CatalogConfig {
        CatalogConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .endpoint(EndpointUrl::new("https://catalog.example.com"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_url_construction_appends_version_and_operation() {
        let client = HttpClient::new(test_config());
        assert_eq!(
            client.url_for(Operation::Brands),
            "https://catalog.example.com/v3/brands"
        );
        assert_eq!(
            client.url_for(Operation::FeedStatus),
            "https://catalog.example.com/v3/feed-status"
        );
    }

    #[test]
    fn test_url_construction_tolerates_trailing_slash() {
        let mut config = test_config();
        config.set_endpoint(EndpointUrl::new("https://catalog.example.com/"));
        let client = HttpClient::new(config);
        assert_eq!(
            client.url_for(Operation::Products),
            "https://catalog.example.com/v3/product"
        );
    }

    #[test]
    fn test_auth_params_always_lead_with_format_and_apikey() {
        let client = HttpClient::new(test_config());
        let merged = client.merge_auth_params(&[("q".to_string(), "milk".to_string())]);
        assert_eq!(
            merged,
            vec![
                ("format".to_string(), "json".to_string()),
                ("apikey".to_string(), "test-key".to_string()),
                ("q".to_string(), "milk".to_string()),
            ]
        );
    }

    #[test]
    fn test_auth_params_include_supplier_key_when_configured() {
        let mut config = test_config();
        config.set_credentials(
            ApiKey::new("test-key").unwrap(),
            Some(SupplierKey::new("sup-key").unwrap()),
        );
        let client = HttpClient::new(config);
        let merged = client.merge_auth_params(&[]);
        assert!(merged.contains(&("supplier_key".to_string(), "sup-key".to_string())));
    }

    #[test]
    fn test_auth_params_follow_format_selector() {
        let mut config = test_config();
        config.set_format(ResponseFormat::Xml);
        let client = HttpClient::new(config);
        let merged = client.merge_auth_params(&[]);
        assert_eq!(merged[0], ("format".to_string(), "xml".to_string()));
    }

    #[test]
    fn test_feed_query_orders_auth_then_party_then_format() {
        let client = HttpClient::new(test_config());
        let query = client.feed_query(77);
        assert_eq!(
            query,
            vec![
                ("apikey".to_string(), "test-key".to_string()),
                ("party_id".to_string(), "77".to_string()),
                ("format".to_string(), "json".to_string()),
            ]
        );
    }

    #[test]
    fn test_user_agent_identifies_library() {
        let agent = user_agent();
        assert!(agent.contains("National Catalog API Library v"));
        assert!(agent.contains("Rust"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
