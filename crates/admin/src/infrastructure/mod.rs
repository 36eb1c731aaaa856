//! Infrastructure adapters
//!
//! Concrete implementations of the outbound ports plus configuration.

pub mod config;
pub mod firestore;
pub mod memory_store;

use std::sync::Arc;

use crate::ports::outbound::InventoryStorePort;

use self::config::{AdminConfig, StoreBackend};

/// Build the store adapter selected by `config`.
pub fn create_store(config: &AdminConfig) -> anyhow::Result<Arc<dyn InventoryStorePort>> {
    let store: Arc<dyn InventoryStorePort> = match &config.store {
        StoreBackend::Firestore(firestore) => {
            tracing::info!(
                project = %firestore.project_id,
                database = %firestore.database,
                emulator = firestore.emulator,
                "Using Firestore inventory store"
            );
            Arc::new(firestore::FirestoreStore::new(firestore.clone())?)
        }
        StoreBackend::Memory => {
            tracing::info!("Using in-memory inventory store; records are lost on exit");
            Arc::new(memory_store::MemoryStore::new())
        }
    };
    Ok(store)
}
