//! Gemdesk domain layer.
//!
//! Pure types shared by the admin application: the persisted inventory
//! record, the form draft that edits it, the client-side search rule and the
//! navigation panels. Nothing in here performs I/O.

pub mod draft;
pub mod entities;
pub mod error;
pub mod ids;
pub mod navigation;
pub mod search;

pub use draft::{ItemDraft, SaveMode};
pub use entities::{InventoryItem, ItemData, ItemField};
pub use error::DomainError;
pub use ids::ItemId;
pub use navigation::Panel;
pub use search::{filter_items, matches};
