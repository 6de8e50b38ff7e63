//! Wire-layer types for National Catalog API communication.
//!
//! This module provides the foundational request/response layer used by
//! the [`crate::catalog::CatalogClient`] facade:
//!
//! - [`HttpClient`]: the authenticated POST transport
//! - [`ApiRequest`] / [`Operation`]: a typed request to a fixed remote operation
//! - [`RawResponse`]: the undecoded wire response
//! - [`ResponseMeta`] / [`ApiUsage`]: the typed per-call header snapshot
//! - [`ApiError`] / [`RemoteError`] / [`RemoteErrorKind`]: the call-time
//!   error taxonomy, with status codes interpreted in exactly one place
//!
//! # Rate limiting
//!
//! 429 and 503 handling is advisory only: the Retry-After hint is surfaced
//! through [`ResponseMeta`], and any retry policy is the caller's
//! responsibility. There is no retry loop in this crate.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiError, RemoteError, RemoteErrorKind};
pub use http_client::{HttpClient, API_VERSION, LIB_VERSION};
pub use http_request::{ApiRequest, ApiRequestBuilder, Operation, RequestPayload};
pub use http_response::{ApiUsage, RawResponse, ResponseMeta};
