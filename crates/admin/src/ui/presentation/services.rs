//! Service providers for the presentation layer
//!
//! The composition root hands a [`Services`] bundle to Dioxus as context.
//! Components reach application services through the hooks below and never
//! see a store adapter type.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::InventoryService;
use crate::ports::outbound::InventoryStorePort;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub inventory: Arc<InventoryService>,
}

impl Services {
    pub fn new(store: Arc<dyn InventoryStorePort>) -> Self {
        Self {
            inventory: Arc::new(InventoryService::new(store)),
        }
    }
}

/// Hook to access the InventoryService from context
pub fn use_inventory_service() -> Arc<InventoryService> {
    let services = use_context::<Services>();
    services.inventory.clone()
}
