//! Store-assigned identifiers.
//!
//! Unlike locally generated UUID ids, an [`ItemId`] is minted by the document
//! store when a record is created. The only rules enforced here are the ones
//! the store itself imposes on document ids.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Maximum byte length of a document id accepted by the store
const MAX_ID_BYTES: usize = 1500;

/// Identifier of a persisted inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Wrap a store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidId` if the id is empty, contains a `/`,
    /// is one of the reserved names `.` / `..`, or exceeds 1500 bytes.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::invalid_id("Item id cannot be empty"));
        }
        if id.contains('/') {
            return Err(DomainError::invalid_id(format!(
                "Item id cannot contain '/': {}",
                id
            )));
        }
        if id == "." || id == ".." {
            return Err(DomainError::invalid_id(format!("Item id is reserved: {}", id)));
        }
        if id.len() > MAX_ID_BYTES {
            return Err(DomainError::invalid_id(format!(
                "Item id cannot exceed {} bytes",
                MAX_ID_BYTES
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ItemId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> String {
        id.0
    }
}
