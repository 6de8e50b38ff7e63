//! Bulk feed documents.
//!
//! A [`Feed`] is an ordered list of [`Entry`] item updates targeting one
//! party. It is submitted in a single request and processed asynchronously
//! by the service; processing progress is polled via the feed-status
//! operation using the feed id returned on submission.
//!
//! Serialization is deterministic: the canonical JSON body is the entry
//! array in insertion order, with each entry's keys in a fixed order. The
//! target party id is not part of the body; it travels in the submission
//! query string.

mod entry;

pub use entry::{
    AttrValue, CategoryRef, Entry, EntryImage, Identifier, IdentifierLevel, IdentifierType,
    PhotoType,
};

use serde::Serialize;

/// A bulk feed: item updates for one party, in submission order.
///
/// # Example
///
/// ```rust
/// use national_catalog_api::feed::{Entry, Feed};
///
/// let mut entry = Entry::new();
/// entry.set_good_name("Sparkling water 0.5L");
///
/// let mut feed = Feed::new(1234);
/// feed.push(entry);
///
/// let body = feed.to_json().unwrap();
/// assert!(body.starts_with('['));
/// ```
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Feed {
    #[serde(skip)]
    party_id: i64,
    entries: Vec<Entry>,
}

impl Feed {
    /// Creates an empty feed targeting the given party.
    #[must_use]
    pub const fn new(party_id: i64) -> Self {
        Self {
            party_id,
            entries: Vec::new(),
        }
    }

    /// Returns the party this feed applies to.
    #[must_use]
    pub const fn party_id(&self) -> i64 {
        self.party_id
    }

    /// Appends an entry. Entries are submitted in insertion order.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Returns the accumulated entries.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns `true` when the feed has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Serializes the feed to its canonical JSON body.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if serialization
    /// fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feed_serializes_as_entry_array() {
        let mut first = Entry::new();
        first.set_good_id(1);
        let mut second = Entry::new();
        second.set_good_id(2);

        let mut feed = Feed::new(77);
        feed.push(first);
        feed.push(second);

        let value: serde_json::Value = serde_json::from_str(&feed.to_json().unwrap()).unwrap();
        assert_eq!(value, json!([{"good_id": 1}, {"good_id": 2}]));
    }

    #[test]
    fn test_party_id_stays_out_of_the_body() {
        let feed = Feed::new(77);
        assert_eq!(feed.party_id(), 77);
        assert_eq!(feed.to_json().unwrap(), "[]");
    }

    #[test]
    fn test_empty_and_len() {
        let mut feed = Feed::new(1);
        assert!(feed.is_empty());
        feed.push(Entry::new());
        assert!(!feed.is_empty());
        assert_eq!(feed.len(), 1);
    }
}
