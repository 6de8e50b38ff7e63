//! The client facade: one method per remote operation.
//!
//! [`CatalogClient`] composes the wire layer, the decoder, and the status
//! classifier into typed operation calls. Every call returns a
//! [`CatalogResponse`] carrying the decoded envelope and the observed
//! response headers of that call, or fails with a single [`ApiError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use national_catalog_api::{ApiKey, CatalogClient, CatalogConfig};
//!
//! let config = CatalogConfig::builder()
//!     .api_key(ApiKey::new("your-api-key")?)
//!     .build()?;
//! let client = CatalogClient::new(config);
//!
//! let brands = client.brands(None).await?;
//! println!("api v{:?}: {} brands", brands.envelope.api_version(), brands.envelope.records().len());
//!
//! // Conditional re-fetch using the validator from the first call:
//! if let Some(etag) = &brands.meta.etag {
//!     match client.brands(Some(etag)).await {
//!         Err(e) => eprintln!("{e}"), // 304 surfaces as "error (304): not modified"
//!         Ok(fresh) => println!("changed: {} brands", fresh.envelope.records().len()),
//!     }
//! }
//! ```

mod params;

pub use params::{AttributeType, Review, SocialType};

use params::ReviewTarget;

use crate::clients::{
    ApiError, ApiRequest, ApiRequestBuilder, HttpClient, Operation, RawResponse, RemoteError,
    RemoteErrorKind, ResponseMeta,
};
use crate::config::{ApiKey, CatalogConfig, EndpointUrl, ResponseFormat, SupplierKey};
use crate::feed::Feed;
use crate::responses::{decode, Envelope, ResponseKind};

/// The outcome of a successful call: the decoded envelope plus the
/// observed response headers of exactly this call.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogResponse {
    /// The decoded response envelope.
    pub envelope: Envelope,
    /// The typed per-call header snapshot (status, ETag, usage,
    /// Retry-After).
    pub meta: ResponseMeta,
}

/// Client for the National Catalog API.
///
/// Call methods take `&self` and keep no per-call state on the instance,
/// so a single client can serve concurrent logical sessions. The explicit
/// mutators ([`auth`](Self::auth), [`set_endpoint`](Self::set_endpoint),
/// [`set_format`](Self::set_format)) take `&mut self` and are meant for
/// reconfiguration between call batches.
#[derive(Debug)]
pub struct CatalogClient {
    http: HttpClient,
}

impl CatalogClient {
    /// Creates a client from a configuration.
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// Creates a client with default configuration for the given API key:
    /// production endpoint, JSON responses, no supplier key.
    #[must_use]
    pub fn with_api_key(api_key: ApiKey) -> Self {
        Self::new(CatalogConfig::new(api_key))
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        self.http.config()
    }

    /// Replaces the credentials.
    pub fn auth(&mut self, api_key: ApiKey, supplier_key: Option<SupplierKey>) {
        self.http.config_mut().set_credentials(api_key, supplier_key);
    }

    /// Replaces the endpoint URL.
    pub fn set_endpoint(&mut self, endpoint: EndpointUrl) {
        self.http.config_mut().set_endpoint(endpoint);
    }

    /// Replaces the response format selector.
    pub fn set_format(&mut self, format: ResponseFormat) {
        self.http.config_mut().set_format(format);
    }

    // === Read operations ===

    /// Returns the list of brands.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, decode failure, or a
    /// non-success status.
    pub async fn brands(&self, etag: Option<&str>) -> Result<CatalogResponse, ApiError> {
        let request = conditional(ApiRequest::builder(Operation::Brands), etag);
        self.call(request, ResponseKind::Brands).await
    }

    /// Returns the category tree.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, decode failure, or a
    /// non-success status.
    pub async fn categories(&self, etag: Option<&str>) -> Result<CatalogResponse, ApiError> {
        let request = conditional(ApiRequest::builder(Operation::Categories), etag);
        self.call(request, ResponseKind::Categories).await
    }

    /// Returns locations, optionally restricted to one party.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, decode failure, or a
    /// non-success status.
    pub async fn locations(
        &self,
        party_id: Option<i64>,
        etag: Option<&str>,
    ) -> Result<CatalogResponse, ApiError> {
        let mut builder = ApiRequest::builder(Operation::Locations);
        if let Some(party_id) = party_id {
            builder = builder.param("party_id", party_id);
        }
        let request = conditional(builder, etag);
        self.call(request, ResponseKind::Locations).await
    }

    /// Returns parties, optionally filtered by role.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, decode failure, or a
    /// non-success status.
    pub async fn parties(&self, role: Option<&str>) -> Result<CatalogResponse, ApiError> {
        let mut builder = ApiRequest::builder(Operation::Parties);
        if let Some(role) = role {
            builder = builder.param("role", role);
        }
        self.call(builder.build(), ResponseKind::Parties).await
    }

    /// Returns search suggestions for a free-text query.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, decode failure, or a
    /// non-success status.
    pub async fn suggestions(&self, query: &str) -> Result<CatalogResponse, ApiError> {
        let request = ApiRequest::builder(Operation::Suggestions)
            .param("q", query)
            .build();
        self.call(request, ResponseKind::Suggestions).await
    }

    /// Returns the attribute schema, optionally filtered by category
    /// and/or attribute type.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, decode failure, or a
    /// non-success status.
    pub async fn attributes(
        &self,
        cat_id: Option<i64>,
        attr_type: Option<AttributeType>,
    ) -> Result<CatalogResponse, ApiError> {
        let mut builder = ApiRequest::builder(Operation::Attributes);
        if let Some(cat_id) = cat_id {
            builder = builder.param("cat_id", cat_id);
        }
        if let Some(attr_type) = attr_type {
            builder = builder.param("attr_type", attr_type.as_str());
        }
        self.call(builder.build(), ResponseKind::Attributes).await
    }

    /// Returns the per-good ETag list for a party.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, decode failure, or a
    /// non-success status.
    pub async fn etags_list(&self, party_id: i64) -> Result<CatalogResponse, ApiError> {
        let request = ApiRequest::builder(Operation::EtagsList)
            .param("party_id", party_id)
            .build();
        self.call(request, ResponseKind::EtagsList).await
    }

    // === Product lookups: four entry points, one response kind ===

    /// Looks up a product card by its catalog good id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, decode failure, or a
    /// non-success status.
    pub async fn product_by_id(
        &self,
        good_id: i64,
        etag: Option<&str>,
    ) -> Result<CatalogResponse, ApiError> {
        let builder = ApiRequest::builder(Operation::Products).param("good_id", good_id);
        self.product_lookup(builder, etag).await
    }

    /// Looks up product cards by global trade item number.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, decode failure, or a
    /// non-success status.
    pub async fn products_by_gtin(
        &self,
        gtin: &str,
        etag: Option<&str>,
    ) -> Result<CatalogResponse, ApiError> {
        let builder = ApiRequest::builder(Operation::Products).param("gtin", gtin);
        self.product_lookup(builder, etag).await
    }

    /// Looks up product cards by local trade item number within a party.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, decode failure, or a
    /// non-success status.
    pub async fn products_by_ltin(
        &self,
        ltin: &str,
        party_id: i64,
        etag: Option<&str>,
    ) -> Result<CatalogResponse, ApiError> {
        let builder = ApiRequest::builder(Operation::Products)
            .param("ltin", ltin)
            .param("party_id", party_id);
        self.product_lookup(builder, etag).await
    }

    /// Looks up product cards by SKU within a party.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, decode failure, or a
    /// non-success status.
    pub async fn products_by_sku(
        &self,
        sku: &str,
        party_id: i64,
        etag: Option<&str>,
    ) -> Result<CatalogResponse, ApiError> {
        let builder = ApiRequest::builder(Operation::Products)
            .param("sku", sku)
            .param("party_id", party_id);
        self.product_lookup(builder, etag).await
    }

    async fn product_lookup(
        &self,
        builder: ApiRequestBuilder,
        etag: Option<&str>,
    ) -> Result<CatalogResponse, ApiError> {
        let request = conditional(builder, etag);
        self.call(request, ResponseKind::Products).await
    }

    // === Review submission: four entry points, one wire operation ===

    /// Submits a reply to an existing review.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, decode failure, or a
    /// non-success status.
    pub async fn add_reply_to_review(
        &self,
        review_parent_id: i64,
        review: &Review,
    ) -> Result<CatalogResponse, ApiError> {
        self.add_review(ReviewTarget::ReplyTo(review_parent_id), review)
            .await
    }

    /// Submits a review of a party.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, decode failure, or a
    /// non-success status.
    pub async fn add_review_to_party(
        &self,
        party_id: i64,
        review: &Review,
    ) -> Result<CatalogResponse, ApiError> {
        self.add_review(ReviewTarget::Party(party_id), review).await
    }

    /// Submits a review of a brand.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, decode failure, or a
    /// non-success status.
    pub async fn add_review_to_brand(
        &self,
        brand_id: i64,
        review: &Review,
    ) -> Result<CatalogResponse, ApiError> {
        self.add_review(ReviewTarget::Brand(brand_id), review).await
    }

    /// Submits a review of a good.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, decode failure, or a
    /// non-success status.
    pub async fn add_review_to_good(
        &self,
        good_id: i64,
        review: &Review,
    ) -> Result<CatalogResponse, ApiError> {
        self.add_review(ReviewTarget::Good(good_id), review).await
    }

    async fn add_review(
        &self,
        target: ReviewTarget,
        review: &Review,
    ) -> Result<CatalogResponse, ApiError> {
        let (key, id) = target.param();
        let request = ApiRequest::builder(Operation::AddReview)
            .param(key, id)
            .param("review_text", &review.text)
            .param("social_type", review.social_type.as_str())
            .param("social_id", &review.social_id)
            .param("review_author", &review.author)
            .param("review_rating", review.rating)
            .build();
        self.call(request, ResponseKind::AddReview).await
    }

    // === Feed submission and status ===

    /// Submits a feed document.
    ///
    /// The feed is serialized to its canonical JSON body; its party id
    /// travels in the submission query string.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::FeedSerialize`] if the document cannot be
    /// serialized, and the usual call errors otherwise.
    pub async fn post_feed(&self, feed: &Feed) -> Result<CatalogResponse, ApiError> {
        let content = feed.to_json()?;
        self.post_feed_raw(content, feed.party_id()).await
    }

    /// Submits pre-built feed content (JSON or XML) for a party.
    ///
    /// The content type sent is decided by the payload's first character:
    /// `<` means XML, anything else JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, decode failure, or a
    /// non-success status.
    pub async fn post_feed_raw(
        &self,
        content: impl Into<String>,
        party_id: i64,
    ) -> Result<CatalogResponse, ApiError> {
        let request = ApiRequest::feed(content, party_id);
        self.call(request, ResponseKind::Feed).await
    }

    /// Returns the processing status of a submitted feed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, decode failure, or a
    /// non-success status.
    pub async fn feed_status(&self, feed_id: i64) -> Result<CatalogResponse, ApiError> {
        let request = ApiRequest::builder(Operation::FeedStatus)
            .param("feed_id", feed_id)
            .build();
        self.call(request, ResponseKind::FeedStatus).await
    }

    // === Escape hatch ===

    /// Sends a request and returns the undecoded wire response.
    ///
    /// Useful for operations or parameters this facade does not model.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] on network failure. Status codes
    /// are not interpreted.
    pub async fn raw_response(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        Ok(self.http.send(request).await?)
    }

    // === Orchestration ===

    async fn call(
        &self,
        request: ApiRequest,
        kind: ResponseKind,
    ) -> Result<CatalogResponse, ApiError> {
        let raw = self.http.send(&request).await?;
        finish(&raw, self.http.config().format(), kind)
    }
}

/// Turns a raw response into the call outcome.
///
/// A 200 goes to the decoder; a decode failure there stands on its own.
/// Everything else is classified, with 404 additionally carrying a
/// well-formed empty envelope of the requested kind.
fn finish(
    raw: &RawResponse,
    format: ResponseFormat,
    kind: ResponseKind,
) -> Result<CatalogResponse, ApiError> {
    let meta = ResponseMeta::from_response(raw);

    if raw.status == 200 {
        let envelope = decode(&raw.body, format, kind)?;
        return Ok(CatalogResponse { envelope, meta });
    }

    let error_kind = RemoteErrorKind::from_status(raw.status);
    let envelope =
        (error_kind == RemoteErrorKind::NotFound).then(|| Envelope::empty(kind));
    Err(RemoteError {
        kind: error_kind,
        meta,
        envelope,
    }
    .into())
}

/// Applies a conditional-fetch validator to a request builder.
fn conditional(builder: ApiRequestBuilder, etag: Option<&str>) -> ApiRequest {
    match etag {
        Some(etag) => builder.etag(etag).build(),
        None => builder.build(),
    }
}
