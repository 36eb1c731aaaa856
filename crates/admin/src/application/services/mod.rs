//! Application services

pub mod inventory_service;

pub use inventory_service::{InventoryService, SaveRequest, INVENTORY_COLLECTION};
