//! Inventory Table - the filtered snapshot with per-row actions

use dioxus::prelude::*;
use gemdesk_domain::InventoryItem;

use crate::ui::presentation::handlers::delete_item;
use crate::ui::presentation::helpers::row_cells;
use crate::ui::presentation::services::use_inventory_service;
use crate::ui::presentation::state::use_admin_state;

const COLUMNS: [&str; 7] = ["Item", "SKU", "Weight", "Karat", "Cost", "Tag Price", "Actions"];

#[component]
pub fn InventoryTable() -> Element {
    let state = use_admin_state();
    let service = use_inventory_service();
    let inventory = state.inventory;

    // Clone out of the signal so row handlers can write to it later.
    let rows: Vec<InventoryItem> = inventory
        .read()
        .visible_items()
        .into_iter()
        .cloned()
        .collect();

    let headers = COLUMNS.iter().map(|title| {
        rsx! {
            th { key: "{title}", class: "table-header", "{title}" }
        }
    });

    let body = rows.into_iter().map(|item| {
        let mut inventory = inventory;
        let service = service.clone();
        let key = item.id.to_string();
        let id = item.id.clone();
        let [name, sku, weight, karat, cost, tag_price] = row_cells(&item.data);

        rsx! {
            tr {
                key: "{key}",
                class: "table-row",
                td { class: "cell cell-name", "{name}" }
                td { class: "cell", "{sku}" }
                td { class: "cell", "{weight}" }
                td { class: "cell", "{karat}" }
                td { class: "cell", "{cost}" }
                td { class: "cell", "{tag_price}" }
                td {
                    class: "cell cell-actions",
                    button {
                        class: "row-button row-button-edit",
                        title: "Edit",
                        onclick: move |_| inventory.write().start_edit(&item),
                        "Edit"
                    }
                    button {
                        class: "row-button row-button-delete",
                        title: "Delete",
                        onclick: move |_| delete_item(inventory, service.clone(), id.clone()),
                        "Delete"
                    }
                }
            }
        }
    });

    rsx! {
        div {
            class: "table-wrapper",
            table {
                class: "inventory-table",
                thead {
                    tr { {headers} }
                }
                tbody { {body} }
            }
        }
    }
}
