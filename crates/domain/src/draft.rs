//! Form draft - the not-yet-persisted record being edited
//!
//! The draft holds the seven field values plus an optional edit target. The
//! edit target decides whether a submit creates a new record or overwrites an
//! existing one; see [`SaveMode`].

use crate::{InventoryItem, ItemData, ItemField, ItemId};

/// What a submit of the current draft will do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveMode {
    /// No edit target: the draft becomes a new record.
    Creating,
    /// The draft overwrites the record with this id.
    Editing(ItemId),
}

impl SaveMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

/// In-memory form state.
///
/// All inputs are accepted unconditionally; there is no validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    data: ItemData,
    editing_id: Option<ItemId>,
}

impl ItemDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &ItemData {
        &self.data
    }

    pub fn get(&self, field: ItemField) -> &str {
        self.data.get(field)
    }

    pub fn editing_id(&self) -> Option<&ItemId> {
        self.editing_id.as_ref()
    }

    pub fn mode(&self) -> SaveMode {
        match &self.editing_id {
            Some(id) => SaveMode::Editing(id.clone()),
            None => SaveMode::Creating,
        }
    }

    /// Overwrite one field of the draft.
    pub fn set_field(&mut self, field: ItemField, value: impl Into<String>) {
        self.data.set(field, value);
    }

    /// Copy every field of `item` into the draft and target it for update.
    pub fn start_edit(&mut self, item: &InventoryItem) {
        self.data = item.data.clone();
        self.editing_id = Some(item.id.clone());
    }

    /// Clear all fields and the edit target.
    pub fn reset(&mut self) {
        self.data = ItemData::default();
        self.editing_id = None;
    }
}
