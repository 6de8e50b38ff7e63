//! A single catalog item update inside a feed.
//!
//! An [`Entry`] accumulates changes for one good: identifier declarations,
//! attribute value assignments, image assignments, and category
//! add/remove markers, plus a handful of scalar identity fields. Each
//! group is append-only and keeps insertion order; the remote service
//! applies changes in the order they appear.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Identifier scheme of a product declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentifierType {
    /// Global trade item number.
    Gtin,
    /// Stock-keeping unit, scoped to a party.
    Sku,
}

impl IdentifierType {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gtin => "gtin",
            Self::Sku => "sku",
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Packaging level an identifier applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentifierLevel {
    /// A single sellable unit (the default).
    TradeUnit,
    /// A box of trade units.
    Box,
    /// A layer of boxes.
    Layer,
    /// A full pallet.
    Pallet,
    /// A metro unit.
    MetroUnit,
    /// A display pack.
    ShowPack,
    /// An inner pack.
    InnerPack,
}

impl IdentifierLevel {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TradeUnit => "trade-unit",
            Self::Box => "box",
            Self::Layer => "layer",
            Self::Pallet => "pallet",
            Self::MetroUnit => "metro-unit",
            Self::ShowPack => "show-pack",
            Self::InnerPack => "inner-pack",
        }
    }
}

impl fmt::Display for IdentifierLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Photo slot of an image assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhotoType {
    /// The default product photo.
    Default,
    /// Facing shot.
    Facing,
    /// Left-of-facing shot.
    Lof,
    /// Back shot.
    Back,
    /// Right-of-facing shot.
    Rof,
    /// Top shot.
    Top,
    /// Bottom shot.
    Bottom,
    /// Photographed in packaging.
    InPackaging,
    /// Photographed out of packaging.
    OutOfPackaging,
    /// Inner pack shot.
    InnerPack,
    /// Text/ingredients close-up.
    Text,
    /// 3D sweep imagery.
    ThreeDs,
    /// Marketing imagery.
    Marketing,
    /// E-commerce imagery.
    Ecommerce,
    /// Unclassified.
    Undef,
    /// Cubi scan imagery.
    Cubi,
}

impl PhotoType {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Facing => "facing",
            Self::Lof => "7",
            Self::Back => "13",
            Self::Rof => "19",
            Self::Top => "si1",
            Self::Bottom => "si2",
            Self::InPackaging => "si3",
            Self::OutOfPackaging => "si4",
            Self::InnerPack => "si5",
            Self::Text => "text",
            Self::ThreeDs => "3ds",
            Self::Marketing => "marketing",
            Self::Ecommerce => "ecommerce",
            Self::Undef => "undef",
            Self::Cubi => "cubi",
        }
    }
}

impl fmt::Display for PhotoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attribute value assignment, added or updated.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AttrValue {
    /// Existing value id; present only for updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_value_id: Option<i64>,
    /// The attribute being assigned.
    pub attr_id: i64,
    /// The assigned value.
    pub attr_value: Value,
    /// Value type discriminator, when the attribute requires one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_value_type: Option<String>,
    /// Scopes the assignment to a specific barcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
}

/// One image assignment.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct EntryImage {
    /// The photo slot being filled.
    pub photo_type: String,
    /// Where the image can be fetched from.
    pub photo_url: String,
    /// Scopes the image to a location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    /// Scopes the image to a specific barcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
}

/// One category marker. Removal is a marker with the deletion flag set.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CategoryRef {
    /// The category being added or removed.
    pub cat_id: i64,
    /// Set to `1` when the category is being removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<u8>,
}

/// One identifier declaration.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Identifier {
    /// The identifier scheme.
    #[serde(rename = "type")]
    pub id_type: String,
    /// The identifier value.
    pub value: String,
    /// How many trade units this level contains.
    pub multiplier: u32,
    /// The packaging level.
    pub level: String,
    /// Owning party, required for party-scoped schemes such as SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_id: Option<i64>,
    /// Unit of measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// One catalog item update.
///
/// Groups are append-only and keep insertion order. The entry serializes
/// in full at submission time: scalar fields first, then the four object
/// groups, each under its fixed key.
///
/// # Example
///
/// ```rust
/// use national_catalog_api::feed::{Entry, IdentifierLevel, IdentifierType, PhotoType};
///
/// let mut entry = Entry::new();
/// entry.set_good_name("Sparkling water 0.5L");
/// entry.add_identified_by(
///     IdentifierType::Gtin,
///     "04600000000001",
///     None,
///     IdentifierLevel::TradeUnit,
///     1,
///     None,
/// );
/// entry.add_image(PhotoType::Default, "https://img.example/1.jpg", None, None);
///
/// let json = serde_json::to_value(&entry).unwrap();
/// assert_eq!(json["identified_by"][0]["type"], "gtin");
/// ```
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct Entry {
    /// Caller-assigned correlation id, echoed back in feed processing
    /// reports.
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    internal_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    good_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    good_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ntin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location_id: Option<i64>,
    #[serde(rename = "good_attrs", skip_serializing_if = "Vec::is_empty")]
    attrs: Vec<AttrValue>,
    #[serde(rename = "good_images", skip_serializing_if = "Vec::is_empty")]
    images: Vec<EntryImage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    categories: Vec<CategoryRef>,
    #[serde(rename = "identified_by", skip_serializing_if = "Vec::is_empty")]
    identifiers: Vec<Identifier>,
}

impl Entry {
    /// Creates an empty entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the caller-assigned correlation id (string or number).
    pub fn set_internal_id(&mut self, id: impl Into<Value>) {
        self.internal_id = Some(id.into());
    }

    /// Sets the good id of an existing catalog record.
    pub fn set_good_id(&mut self, good_id: i64) {
        self.good_id = Some(good_id);
    }

    /// Sets the good name.
    pub fn set_good_name(&mut self, good_name: impl Into<String>) {
        self.good_name = Some(good_name.into());
    }

    /// Sets the national catalog identifier.
    pub fn set_ntin(&mut self, ntin: impl Into<String>) {
        self.ntin = Some(ntin.into());
    }

    /// Sets the location id.
    pub fn set_location_id(&mut self, location_id: i64) {
        self.location_id = Some(location_id);
    }

    /// Appends a category assignment.
    pub fn add_category(&mut self, cat_id: i64) {
        self.categories.push(CategoryRef {
            cat_id,
            delete: None,
        });
    }

    /// Appends a category removal marker.
    pub fn delete_category(&mut self, cat_id: i64) {
        self.categories.push(CategoryRef {
            cat_id,
            delete: Some(1),
        });
    }

    /// Appends an identifier declaration.
    pub fn add_identified_by(
        &mut self,
        id_type: IdentifierType,
        value: impl Into<String>,
        party_id: Option<i64>,
        level: IdentifierLevel,
        multiplier: u32,
        unit: Option<&str>,
    ) {
        self.identifiers.push(Identifier {
            id_type: id_type.as_str().to_string(),
            value: value.into(),
            multiplier,
            level: level.as_str().to_string(),
            party_id,
            unit: unit.map(str::to_string),
        });
    }

    /// Appends an attribute value assignment, optionally typed and
    /// optionally scoped to a barcode.
    pub fn add_attr(
        &mut self,
        attr_id: i64,
        attr_value: impl Into<Value>,
        attr_value_type: Option<&str>,
        gtin: Option<&str>,
    ) {
        self.attrs.push(AttrValue {
            attr_value_id: None,
            attr_id,
            attr_value: attr_value.into(),
            attr_value_type: attr_value_type.map(str::to_string),
            gtin: gtin.map(str::to_string),
        });
    }

    /// Appends an update of an existing attribute value.
    pub fn update_attr(
        &mut self,
        attr_value_id: i64,
        attr_id: i64,
        attr_value: impl Into<Value>,
        attr_value_type: Option<&str>,
        gtin: Option<&str>,
    ) {
        self.attrs.push(AttrValue {
            attr_value_id: Some(attr_value_id),
            attr_id,
            attr_value: attr_value.into(),
            attr_value_type: attr_value_type.map(str::to_string),
            gtin: gtin.map(str::to_string),
        });
    }

    /// Appends an image assignment, optionally scoped to a barcode and/or
    /// location.
    pub fn add_image(
        &mut self,
        photo_type: PhotoType,
        photo_url: impl Into<String>,
        gtin: Option<&str>,
        location_id: Option<i64>,
    ) {
        self.images.push(EntryImage {
            photo_type: photo_type.as_str().to_string(),
            photo_url: photo_url.into(),
            location_id,
            gtin: gtin.map(str::to_string),
        });
    }

    /// Returns the accumulated attribute assignments, in insertion order.
    #[must_use]
    pub fn attrs(&self) -> &[AttrValue] {
        &self.attrs
    }

    /// Returns the accumulated image assignments, in insertion order.
    #[must_use]
    pub fn images(&self) -> &[EntryImage] {
        &self.images
    }

    /// Returns the accumulated category markers, in insertion order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryRef] {
        &self.categories
    }

    /// Returns the accumulated identifier declarations, in insertion order.
    #[must_use]
    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }
}
