//! In-process document store.
//!
//! Behaves like the hosted store for the four calls the admin uses: ids are
//! assigned on create, listing returns the whole collection in insertion
//! order, and update/delete of an unknown id fail. Nothing is persisted.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use gemdesk_domain::{InventoryItem, ItemData, ItemId};
use uuid::Uuid;

use crate::ports::outbound::{InventoryStorePort, StoreError, StoreOperation};

type Collections = HashMap<String, Vec<InventoryItem>>;

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `items` in `collection`
    pub fn with_records(collection: &str, items: Vec<InventoryItem>) -> Self {
        let mut collections = Collections::new();
        collections.insert(collection.to_string(), items);
        Self {
            collections: RwLock::new(collections),
        }
    }

    fn read(&self, operation: StoreOperation) -> Result<RwLockReadGuard<'_, Collections>, StoreError> {
        self.collections
            .read()
            .map_err(|e| StoreError::unavailable(operation, e))
    }

    fn write(
        &self,
        operation: StoreOperation,
    ) -> Result<RwLockWriteGuard<'_, Collections>, StoreError> {
        self.collections
            .write()
            .map_err(|e| StoreError::unavailable(operation, e))
    }

    fn new_id(operation: StoreOperation) -> Result<ItemId, StoreError> {
        ItemId::new(Uuid::new_v4().simple().to_string())
            .map_err(|e| StoreError::malformed(operation, e))
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl InventoryStorePort for MemoryStore {
    async fn create_record(
        &self,
        collection: &str,
        data: &ItemData,
    ) -> Result<ItemId, StoreError> {
        let id = Self::new_id(StoreOperation::Create)?;
        let mut collections = self.write(StoreOperation::Create)?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(InventoryItem::new(id.clone(), data.clone()));
        Ok(id)
    }

    async fn list_records(&self, collection: &str) -> Result<Vec<InventoryItem>, StoreError> {
        let collections = self.read(StoreOperation::List)?;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn update_record(
        &self,
        collection: &str,
        id: &ItemId,
        data: &ItemData,
    ) -> Result<(), StoreError> {
        let mut collections = self.write(StoreOperation::Update)?;
        let record = collections
            .get_mut(collection)
            .and_then(|items| items.iter_mut().find(|item| &item.id == id))
            .ok_or_else(|| StoreError::not_found(StoreOperation::Update, id))?;
        record.data = data.clone();
        Ok(())
    }

    async fn delete_record(&self, collection: &str, id: &ItemId) -> Result<(), StoreError> {
        let mut collections = self.write(StoreOperation::Delete)?;
        let items = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::not_found(StoreOperation::Delete, id))?;
        let position = items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| StoreError::not_found(StoreOperation::Delete, id))?;
        items.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earrings() -> ItemData {
        ItemData {
            name: "Hoop Earrings".into(),
            sku: "E-12".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids_and_lists_in_insertion_order() {
        let store = MemoryStore::new();
        let first = store.create_record("inventory", &earrings()).await.unwrap();
        let second = store.create_record("inventory", &ItemData::default()).await.unwrap();
        assert_ne!(first, second);

        let items = store.list_records("inventory").await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, first);
        assert_eq!(items[0].data, earrings());
        assert_eq!(items[1].id, second);
    }

    #[tokio::test]
    async fn collections_are_isolated() {
        let store = MemoryStore::new();
        store.create_record("inventory", &earrings()).await.unwrap();

        assert!(store.list_records("sales").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let existing = InventoryItem::new(ItemId::new("r1").unwrap(), earrings());
        let store = MemoryStore::with_records("inventory", vec![existing]);

        let replacement = ItemData {
            name: "Hoops".into(),
            ..Default::default()
        };
        store
            .update_record("inventory", &ItemId::new("r1").unwrap(), &replacement)
            .await
            .unwrap();

        let items = store.list_records("inventory").await.unwrap();
        assert_eq!(items[0].data, replacement);
    }

    #[tokio::test]
    async fn update_and_delete_of_unknown_id_fail() {
        let store = MemoryStore::new();
        let ghost = ItemId::new("ghost").unwrap();

        let err = store
            .update_record("inventory", &ghost, &earrings())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.operation(), StoreOperation::Update);

        let err = store.delete_record("inventory", &ghost).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.operation(), StoreOperation::Delete);
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let store = MemoryStore::new();
        let keep = store.create_record("inventory", &earrings()).await.unwrap();
        let gone = store.create_record("inventory", &earrings()).await.unwrap();

        store.delete_record("inventory", &gone).await.unwrap();

        let ids: Vec<_> = store
            .list_records("inventory")
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec![keep]);
    }
}
