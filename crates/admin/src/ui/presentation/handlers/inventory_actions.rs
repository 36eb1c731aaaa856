//! Inventory actions
//!
//! Each action runs on the UI event loop as a spawned task. Store failures
//! are already logged by the service; the UI keeps showing the prior state.

use std::sync::Arc;

use dioxus::prelude::*;
use gemdesk_domain::ItemId;

use crate::application::{self, InventoryAdmin, InventoryService};

/// Fetch the whole collection into the snapshot
pub fn refresh_inventory(mut inventory: Signal<InventoryAdmin>, service: Arc<InventoryService>) {
    spawn(async move {
        application::refresh(&mut inventory, &service).await;
    });
}

/// Create or update from the current draft, then re-fetch
pub fn submit_draft(mut inventory: Signal<InventoryAdmin>, service: Arc<InventoryService>) {
    spawn(async move {
        application::submit(&mut inventory, &service).await;
    });
}

/// Delete one record, then re-fetch
pub fn delete_item(
    mut inventory: Signal<InventoryAdmin>,
    service: Arc<InventoryService>,
    id: ItemId,
) {
    spawn(async move {
        application::delete(&mut inventory, &service, &id).await;
    });
}
