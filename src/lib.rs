//! # National Catalog API Rust client
//!
//! A Rust client for the National Catalog product API, covering the full
//! request/response lifecycle: authenticated wire requests, conditional
//! fetches via ETags, rate-limit header surfacing, and normalization of
//! JSON and XML response bodies into one typed envelope/error contract.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`CatalogConfig`] and [`CatalogConfigBuilder`]
//! - Validated newtypes for credentials and the endpoint URL, with
//!   internationalized hosts canonicalized to their ASCII transport form
//! - A [`CatalogClient`] facade with one method per remote operation
//! - A closed [`RemoteErrorKind`] taxonomy, interpreted in exactly one place
//! - A [`feed::Feed`]/[`feed::Entry`] builder for bulk catalog updates with
//!   deterministic serialization
//!
//! ## Quick Start
//!
//! ```rust
//! use national_catalog_api::{ApiKey, CatalogConfig, SupplierKey};
//!
//! let config = CatalogConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .supplier_key(SupplierKey::new("your-supplier-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making calls
//!
//! ```rust,ignore
//! use national_catalog_api::{ApiKey, CatalogClient, RemoteErrorKind, ApiError};
//!
//! let client = CatalogClient::with_api_key(ApiKey::new("your-api-key")?);
//!
//! // Simple read
//! let brands = client.brands(None).await?;
//! for record in brands.envelope.records() {
//!     println!("{record}");
//! }
//!
//! // Product lookup by GTIN with a conditional-fetch validator
//! let products = client.products_by_gtin("04600000000001", None).await?;
//! let etag = products.meta.etag.clone();
//! match client.products_by_gtin("04600000000001", etag.as_deref()).await {
//!     Err(ApiError::Remote(e)) if e.kind == RemoteErrorKind::NotModified => {
//!         // cached copy is current
//!     }
//!     other => { /* fresh data or a real failure */ }
//! }
//! ```
//!
//! ## Submitting a feed
//!
//! ```rust,ignore
//! use national_catalog_api::feed::{Entry, Feed, IdentifierLevel, IdentifierType, PhotoType};
//!
//! let mut entry = Entry::new();
//! entry.set_good_name("Sparkling water 0.5L");
//! entry.add_identified_by(
//!     IdentifierType::Gtin, "04600000000001", None,
//!     IdentifierLevel::TradeUnit, 1, None,
//! );
//! entry.add_image(PhotoType::Default, "https://img.example/1.jpg", None, None);
//!
//! let mut feed = Feed::new(1234);
//! feed.push(entry);
//!
//! let accepted = client.post_feed(&feed).await?;
//! let feed_id = accepted.envelope.feed_id().expect("submission returns a feed id");
//! let status = client.feed_status(feed_id).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No per-call instance state**: observed headers are returned with
//!   each call, so one client serves concurrent logical sessions
//! - **Fail-fast validation**: configuration newtypes validate on construction
//! - **No hidden retries**: 429/503 surface the Retry-After hint and leave
//!   retry policy to the caller
//! - **Async-first**: designed for use with the Tokio runtime

pub mod catalog;
pub mod clients;
pub mod config;
pub mod error;
pub mod feed;
pub mod responses;

// Re-export the primary types at the crate root for convenience
pub use catalog::{AttributeType, CatalogClient, CatalogResponse, Review, SocialType};
pub use clients::{
    ApiError, ApiRequest, ApiRequestBuilder, ApiUsage, Operation, RawResponse, RemoteError,
    RemoteErrorKind, ResponseMeta,
};
pub use config::{
    ApiKey, CatalogConfig, CatalogConfigBuilder, EndpointUrl, ResponseFormat, SupplierKey,
    DEFAULT_API_URL,
};
pub use error::ConfigError;
pub use feed::{Entry, Feed};
pub use responses::{decode, DecodeError, Envelope, ResponseKind};
