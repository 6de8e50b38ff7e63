//! Configuration types for the National Catalog API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`CatalogConfig`]: The configuration struct holding credentials and endpoint
//! - [`CatalogConfigBuilder`]: A builder for constructing [`CatalogConfig`] instances
//! - [`ApiKey`]: A validated API key newtype
//! - [`SupplierKey`]: A validated supplier key newtype with masked debug output
//! - [`EndpointUrl`]: The base endpoint URL, host-canonicalized to ASCII
//! - [`ResponseFormat`]: The response body format requested from the service
//!
//! # Example
//!
//! ```rust
//! use national_catalog_api::{ApiKey, CatalogConfig, ResponseFormat};
//!
//! let config = CatalogConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .format(ResponseFormat::Json)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, EndpointUrl, SupplierKey};

use crate::error::ConfigError;
use std::fmt;

/// Production endpoint of the National Catalog service.
///
/// The host is internationalized; [`EndpointUrl`] canonicalizes it to its
/// ASCII transport form.
pub const DEFAULT_API_URL: &str = "https://апи.национальный-каталог.рф";

/// The response body format requested from the service via the `format`
/// wire parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    /// JSON response bodies (the default).
    #[default]
    Json,
    /// XML response bodies.
    Xml,
}

impl ResponseFormat {
    /// Returns the wire value for the `format` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for the National Catalog API client.
///
/// Holds the API key (required), the optional supplier key, the endpoint
/// URL, and the response format selector. Constructed once via
/// [`CatalogConfig::builder`] or [`CatalogConfig::new`]; the owning client
/// exposes explicit mutators for re-authentication and endpoint changes.
///
/// # Example
///
/// ```rust
/// use national_catalog_api::{ApiKey, CatalogConfig, SupplierKey};
///
/// let config = CatalogConfig::builder()
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .supplier_key(SupplierKey::new("my-supplier-key").unwrap())
///     .build()
///     .unwrap();
///
/// assert!(config.supplier_key().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    api_key: ApiKey,
    supplier_key: Option<SupplierKey>,
    endpoint: EndpointUrl,
    format: ResponseFormat,
}

impl CatalogConfig {
    /// Creates a configuration with the given API key and all defaults:
    /// no supplier key, production endpoint, JSON responses.
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            supplier_key: None,
            endpoint: EndpointUrl::default(),
            format: ResponseFormat::default(),
        }
    }

    /// Creates a new builder for constructing a `CatalogConfig`.
    #[must_use]
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the supplier key, if configured.
    #[must_use]
    pub const fn supplier_key(&self) -> Option<&SupplierKey> {
        self.supplier_key.as_ref()
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the response format selector.
    #[must_use]
    pub const fn format(&self) -> ResponseFormat {
        self.format
    }

    /// Replaces the credentials.
    pub fn set_credentials(&mut self, api_key: ApiKey, supplier_key: Option<SupplierKey>) {
        self.api_key = api_key;
        self.supplier_key = supplier_key;
    }

    /// Replaces the endpoint URL.
    pub fn set_endpoint(&mut self, endpoint: EndpointUrl) {
        self.endpoint = endpoint;
    }

    /// Replaces the response format selector.
    pub fn set_format(&mut self, format: ResponseFormat) {
        self.format = format;
    }
}

/// Builder for constructing [`CatalogConfig`] instances.
#[derive(Debug, Default)]
pub struct CatalogConfigBuilder {
    api_key: Option<ApiKey>,
    supplier_key: Option<SupplierKey>,
    endpoint: Option<EndpointUrl>,
    format: ResponseFormat,
}

impl CatalogConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the supplier key.
    #[must_use]
    pub fn supplier_key(mut self, supplier_key: SupplierKey) -> Self {
        self.supplier_key = Some(supplier_key);
        self
    }

    /// Sets the endpoint URL. Defaults to the production endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the response format. Defaults to [`ResponseFormat::Json`].
    #[must_use]
    pub const fn format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if no API key was set.
    pub fn build(self) -> Result<CatalogConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(CatalogConfig {
            api_key,
            supplier_key: self.supplier_key,
            endpoint: self.endpoint.unwrap_or_default(),
            format: self.format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = CatalogConfig::builder().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = CatalogConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.format(), ResponseFormat::Json);
        assert!(config.supplier_key().is_none());
        assert_eq!(config.endpoint(), &EndpointUrl::default());
    }

    #[test]
    fn test_new_matches_builder_defaults() {
        let config = CatalogConfig::new(ApiKey::new("key").unwrap());
        assert_eq!(config.api_key().as_ref(), "key");
        assert_eq!(config.format(), ResponseFormat::Json);
        assert!(config.supplier_key().is_none());
    }

    #[test]
    fn test_format_wire_values() {
        assert_eq!(ResponseFormat::Json.as_str(), "json");
        assert_eq!(ResponseFormat::Xml.as_str(), "xml");
    }

    #[test]
    fn test_set_credentials_replaces_both_keys() {
        let mut config = CatalogConfig::new(ApiKey::new("old").unwrap());
        config.set_credentials(
            ApiKey::new("new").unwrap(),
            Some(SupplierKey::new("sup").unwrap()),
        );
        assert_eq!(config.api_key().as_ref(), "new");
        assert_eq!(config.supplier_key().map(AsRef::as_ref), Some("sup"));

        config.set_credentials(ApiKey::new("newer").unwrap(), None);
        assert!(config.supplier_key().is_none());
    }
}
