//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with the document store without
//! depending on concrete implementations.

pub mod inventory_store_port;

pub use inventory_store_port::{InventoryStorePort, StoreError, StoreOperation};

#[cfg(any(test, feature = "testing"))]
pub use inventory_store_port::MockInventoryStorePort;
