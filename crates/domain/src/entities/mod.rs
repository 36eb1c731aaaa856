//! Domain entities - Core business objects with identity

mod inventory_item;

pub use inventory_item::{InventoryItem, ItemData, ItemField};
