//! Application layer - use cases sitting between the UI and the store ports

pub mod inventory_admin;
pub mod services;

pub use inventory_admin::{delete, refresh, submit, AdminHandle, FetchTicket, InventoryAdmin};
pub use services::{InventoryService, SaveRequest, INVENTORY_COLLECTION};
