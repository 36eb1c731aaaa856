//! Inventory panel - form, search and table

use dioxus::prelude::*;

use crate::ui::presentation::components::{FormActions, InventoryTable, ItemForm};
use crate::ui::presentation::handlers::refresh_inventory;
use crate::ui::presentation::services::use_inventory_service;
use crate::ui::presentation::state::use_admin_state;

#[component]
pub fn InventoryView() -> Element {
    let state = use_admin_state();
    let service = use_inventory_service();

    // Fetch once per mount
    use_hook(move || refresh_inventory(state.inventory, service));

    let editing = state.inventory.read().mode().is_editing();

    rsx! {
        div {
            class: "inventory-view",
            div {
                class: "view-header",
                h2 {
                    class: "view-title",
                    if editing { "Edit Inventory Item" } else { "Add Inventory Item" }
                }
                p {
                    class: "view-subtitle",
                    "Use the form below to manage your product listings."
                }
            }
            ItemForm {}
            FormActions {}
            InventoryTable {}
        }
    }
}
