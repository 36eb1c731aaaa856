//! Inventory item entity - One piece of jewelry held in stock
//!
//! The record is a flat bag of free-text fields. Numeric-looking fields
//! (`weight`, `cost`, `tagPrice`) are kept as the exact text the operator
//! typed; nothing is parsed, clamped or required.

use serde::{Deserialize, Serialize};

use crate::ItemId;

/// The seven-field payload persisted for every inventory record.
///
/// # Simple Data Struct
///
/// Any combination of values is valid, including all-empty. Missing keys in
/// incoming data deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemData {
    pub name: String,
    pub sku: String,
    /// Weight in grams
    pub weight: String,
    /// Purity grade, e.g. "14K"
    pub karat: String,
    /// Purchase cost
    pub cost: String,
    /// Retail price on the tag
    pub tag_price: String,
    pub notes: String,
}

impl ItemData {
    /// Read one field by name.
    pub fn get(&self, field: ItemField) -> &str {
        match field {
            ItemField::Name => &self.name,
            ItemField::Sku => &self.sku,
            ItemField::Weight => &self.weight,
            ItemField::Karat => &self.karat,
            ItemField::Cost => &self.cost,
            ItemField::TagPrice => &self.tag_price,
            ItemField::Notes => &self.notes,
        }
    }

    /// Overwrite one field. No validation is applied.
    pub fn set(&mut self, field: ItemField, value: impl Into<String>) {
        let slot = match field {
            ItemField::Name => &mut self.name,
            ItemField::Sku => &mut self.sku,
            ItemField::Weight => &mut self.weight,
            ItemField::Karat => &mut self.karat,
            ItemField::Cost => &mut self.cost,
            ItemField::TagPrice => &mut self.tag_price,
            ItemField::Notes => &mut self.notes,
        };
        *slot = value.into();
    }

    /// Iterate `(field, value)` pairs in form order.
    pub fn fields(&self) -> impl Iterator<Item = (ItemField, &str)> + '_ {
        ItemField::ALL.iter().map(move |f| (*f, self.get(*f)))
    }

    pub fn is_empty(&self) -> bool {
        self.fields().all(|(_, v)| v.is_empty())
    }
}

/// A persisted record: the store-assigned id plus its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    #[serde(flatten)]
    pub data: ItemData,
}

impl InventoryItem {
    pub fn new(id: ItemId, data: ItemData) -> Self {
        Self { id, data }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn sku(&self) -> &str {
        &self.data.sku
    }
}

/// The editable fields of an [`ItemData`], in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Name,
    Sku,
    Weight,
    Karat,
    Cost,
    TagPrice,
    Notes,
}

impl ItemField {
    pub const ALL: [ItemField; 7] = [
        Self::Name,
        Self::Sku,
        Self::Weight,
        Self::Karat,
        Self::Cost,
        Self::TagPrice,
        Self::Notes,
    ];

    /// Key used on the wire and in the document store.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Sku => "sku",
            Self::Weight => "weight",
            Self::Karat => "karat",
            Self::Cost => "cost",
            Self::TagPrice => "tagPrice",
            Self::Notes => "notes",
        }
    }

    /// Placeholder shown in the empty form input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Item Name",
            Self::Sku => "Item ID / SKU",
            Self::Weight => "Weight (grams)",
            Self::Karat => "Karat",
            Self::Cost => "Purchase Cost ($)",
            Self::TagPrice => "Tag Price ($)",
            Self::Notes => "Notes / Description",
        }
    }

    /// Whether the form renders a numeric input. This is an input hint only.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Weight | Self::Cost | Self::TagPrice)
    }

    /// Free-form multi-line field
    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Notes)
    }
}

impl std::fmt::Display for ItemField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl std::str::FromStr for ItemField {
    type Err = crate::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.wire_name() == s)
            .ok_or_else(|| crate::DomainError::parse(format!("Unknown item field: {}", s)))
    }
}
