//! Call-time error types for the National Catalog API client.
//!
//! The taxonomy is deliberately small: a call either fails below the HTTP
//! layer ([`ApiError::Transport`]), fails to decode a 200 body
//! ([`ApiError::Decode`]), or is rejected by the service with a status
//! code ([`ApiError::Remote`]). Status codes are interpreted in exactly
//! one place, [`RemoteErrorKind::from_status`].
//!
//! # Example
//!
//! ```rust,ignore
//! use national_catalog_api::{ApiError, RemoteErrorKind};
//!
//! match client.brands(None).await {
//!     Ok(response) => println!("{} brands", response.envelope.records().len()),
//!     Err(ApiError::Remote(e)) if e.kind == RemoteErrorKind::NotFound => {
//!         // 404 still carries a usable empty envelope
//!         let empty = e.envelope.unwrap();
//!         assert!(empty.is_empty());
//!     }
//!     Err(ApiError::Remote(e)) if e.kind == RemoteErrorKind::RateLimited => {
//!         eprintln!("throttled, retry after {:?}s", e.meta.retry_after);
//!     }
//!     Err(other) => eprintln!("{other}"),
//! }
//! ```

use crate::clients::http_response::ResponseMeta;
use crate::responses::{DecodeError, Envelope};
use std::fmt;
use thiserror::Error;

/// The closed set of remote error kinds, one per status code the service
/// documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RemoteErrorKind {
    /// 400: the request was malformed.
    RequestError,
    /// 304: the resource matches the supplied validator; the caller
    /// already holds the current copy.
    NotModified,
    /// 401: the API key was missing or rejected.
    NotAuthorized,
    /// 403: the key is valid but not allowed to perform the operation.
    NoAccess,
    /// 404: no data matched the request. The error carries an empty
    /// envelope of the requested kind.
    NotFound,
    /// 413: the submitted payload is too large.
    PayloadTooLarge,
    /// 429: the request limit was reached.
    RateLimited,
    /// 500: the service failed internally.
    ServerError,
    /// 501: the operation does not exist.
    MethodNotFound,
    /// 503: the service is temporarily unavailable.
    ServiceUnavailable,
    /// Any status outside the documented set.
    Unknown,
}

impl RemoteErrorKind {
    /// Maps a status code to its error kind.
    ///
    /// 200 is never classified; callers route it to the decoder instead.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            304 => Self::NotModified,
            400 => Self::RequestError,
            401 => Self::NotAuthorized,
            403 => Self::NoAccess,
            404 => Self::NotFound,
            413 => Self::PayloadTooLarge,
            429 => Self::RateLimited,
            500 => Self::ServerError,
            501 => Self::MethodNotFound,
            503 => Self::ServiceUnavailable,
            _ => Self::Unknown,
        }
    }

    /// Returns the human-readable message for this kind.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::RequestError => "request error",
            Self::NotModified => "not modified",
            Self::NotAuthorized => "not authorized",
            Self::NoAccess => "no access",
            Self::NotFound => "data not found",
            Self::PayloadTooLarge => "request entity too large",
            Self::RateLimited => "request limit reached",
            Self::ServerError => "internal server error",
            Self::MethodNotFound => "method not found",
            Self::ServiceUnavailable => "service not available",
            Self::Unknown => "unknown error",
        }
    }
}

/// Error returned when the service rejects a call with a non-success
/// status code.
#[derive(Clone, Debug)]
pub struct RemoteError {
    /// What the status code means.
    pub kind: RemoteErrorKind,
    /// The observed response headers of the failed call, including the
    /// status code and any Retry-After hint.
    pub meta: ResponseMeta,
    /// Present only for [`RemoteErrorKind::NotFound`]: a well-formed empty
    /// envelope of the requested kind, so callers can treat "not found" as
    /// an empty collection.
    pub envelope: Option<Envelope>,
}

impl RemoteError {
    /// Returns the HTTP status code of the failed call.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.meta.status
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RemoteErrorKind::Unknown => write!(f, "error ({})", self.meta.status),
            kind => write!(f, "error ({}): {}", self.meta.status, kind.message()),
        }
    }
}

impl std::error::Error for RemoteError {}

/// Unified error type for all API calls.
///
/// Every public operation either returns a fully populated envelope or
/// fails with exactly one of these variants.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or connection failure below the HTTP layer.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 200 response whose body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The service rejected the call with a status code.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// A feed document could not be serialized for submission.
    #[error("failed to serialize feed document: {0}")]
    FeedSerialize(#[from] serde_json::Error),
}
