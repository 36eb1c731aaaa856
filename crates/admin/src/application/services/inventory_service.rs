//! Inventory Service - Application service for inventory records
//!
//! Binds the store port to the inventory collection. Every failed store call
//! is reported on the developer log before the error is handed back; callers
//! are free to drop the error after that.

use std::sync::Arc;

use gemdesk_domain::{InventoryItem, ItemData, ItemId};

use crate::ports::outbound::{InventoryStorePort, StoreError};

/// Collection every inventory record lives in
pub const INVENTORY_COLLECTION: &str = "inventory";

/// A submit of the draft, resolved to the store call it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    Create(ItemData),
    Update { id: ItemId, data: ItemData },
}

/// Inventory service for managing records in the document store
#[derive(Clone)]
pub struct InventoryService {
    store: Arc<dyn InventoryStorePort>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn InventoryStorePort>) -> Self {
        Self { store }
    }

    /// Create a record and return its store-assigned id
    pub async fn create_item(&self, data: &ItemData) -> Result<ItemId, StoreError> {
        self.store
            .create_record(INVENTORY_COLLECTION, data)
            .await
            .inspect(|id| tracing::debug!(item_id = %id, "Created inventory item"))
            .inspect_err(|e| tracing::error!(error = %e, "Error saving item"))
    }

    /// Fetch the whole collection
    pub async fn list_items(&self) -> Result<Vec<InventoryItem>, StoreError> {
        self.store
            .list_records(INVENTORY_COLLECTION)
            .await
            .inspect(|items| tracing::debug!(count = items.len(), "Fetched inventory"))
            .inspect_err(|e| tracing::error!(error = %e, "Error fetching inventory"))
    }

    /// Overwrite a record with the given fields
    pub async fn update_item(&self, id: &ItemId, data: &ItemData) -> Result<(), StoreError> {
        self.store
            .update_record(INVENTORY_COLLECTION, id, data)
            .await
            .inspect(|_| tracing::debug!(item_id = %id, "Updated inventory item"))
            .inspect_err(|e| tracing::error!(error = %e, item_id = %id, "Error saving item"))
    }

    /// Delete a record by ID
    pub async fn delete_item(&self, id: &ItemId) -> Result<(), StoreError> {
        self.store
            .delete_record(INVENTORY_COLLECTION, id)
            .await
            .inspect(|_| tracing::debug!(item_id = %id, "Deleted inventory item"))
            .inspect_err(|e| tracing::error!(error = %e, item_id = %id, "Error deleting item"))
    }

    /// Run the store call a submit resolved to
    pub async fn save(&self, request: &SaveRequest) -> Result<(), StoreError> {
        match request {
            SaveRequest::Create(data) => self.create_item(data).await.map(|_| ()),
            SaveRequest::Update { id, data } => self.update_item(id, data).await,
        }
    }
}
