//! Typed parameter vocabulary for the operation catalog.

use std::fmt;

/// Attribute filter for the attributes listing operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeType {
    /// All attributes.
    All,
    /// Mandatory attributes only.
    Mandatory,
    /// Recommended attributes only.
    Recommend,
    /// Optional attributes only.
    Optional,
}

impl AttributeType {
    /// Returns the wire value for the `attr_type` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "a",
            Self::Mandatory => "m",
            Self::Recommend => "r",
            Self::Optional => "o",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Social network a review author is identified through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialType {
    /// Google Plus.
    GooglePlus,
    /// Facebook.
    Facebook,
    /// Twitter.
    Twitter,
    /// VK.
    Vk,
}

impl SocialType {
    /// Returns the wire value for the `social_type` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GooglePlus => "gp",
            Self::Facebook => "fb",
            Self::Twitter => "tw",
            Self::Vk => "vk",
        }
    }
}

impl fmt::Display for SocialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A review to be submitted.
///
/// The review itself is target-agnostic; the facade methods attach it to a
/// parent review, party, brand, or good.
#[derive(Clone, Debug, PartialEq)]
pub struct Review {
    /// The review message.
    pub text: String,
    /// Social network the author is identified through.
    pub social_type: SocialType,
    /// The author's id in that social network.
    pub social_id: String,
    /// The author's display name.
    pub author: String,
    /// The rating given.
    pub rating: f64,
}

impl Review {
    /// Creates a review.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        social_type: SocialType,
        social_id: impl Into<String>,
        author: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            text: text.into(),
            social_type,
            social_id: social_id.into(),
            author: author.into(),
            rating,
        }
    }
}

/// What a review attaches to. Review submission is one wire operation;
/// only the populated foreign-key field differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ReviewTarget {
    /// Reply to an existing review.
    ReplyTo(i64),
    /// Review of a party.
    Party(i64),
    /// Review of a brand.
    Brand(i64),
    /// Review of a good.
    Good(i64),
}

impl ReviewTarget {
    /// Returns the foreign-key parameter this target populates.
    pub(crate) const fn param(self) -> (&'static str, i64) {
        match self {
            Self::ReplyTo(id) => ("review_parent_id", id),
            Self::Party(id) => ("party_id", id),
            Self::Brand(id) => ("brand_id", id),
            Self::Good(id) => ("good_id", id),
        }
    }
}
