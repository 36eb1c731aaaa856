//! Item Form - create/edit form for one inventory record
//!
//! Inputs write straight into the draft on every keystroke. There is no
//! validation; numeric fields only get a numeric input hint.

use dioxus::prelude::*;
use gemdesk_domain::ItemField;

use crate::ui::presentation::handlers::submit_draft;
use crate::ui::presentation::services::use_inventory_service;
use crate::ui::presentation::state::use_admin_state;

/// The seven draft inputs
#[component]
pub fn ItemForm() -> Element {
    let state = use_admin_state();
    let inventory = state.inventory;
    let draft = inventory.read().draft().clone();

    let inputs = ItemField::ALL
        .into_iter()
        .filter(|field| !field.is_multiline())
        .map(|field| {
            let mut inventory = inventory;
            let value = draft.get(field).to_string();
            let input_type = if field.is_numeric() { "number" } else { "text" };

            rsx! {
                input {
                    key: "{field}",
                    class: "form-input",
                    r#type: input_type,
                    placeholder: field.placeholder(),
                    value: "{value}",
                    oninput: move |e: FormEvent| inventory.write().set_field(field, e.value()),
                }
            }
        });

    let mut notes_target = inventory;
    let notes = draft.notes.clone();

    rsx! {
        div {
            class: "form-grid",
            {inputs}
        }
        textarea {
            class: "form-input form-notes",
            placeholder: ItemField::Notes.placeholder(),
            value: "{notes}",
            oninput: move |e: FormEvent| notes_target.write().set_field(ItemField::Notes, e.value()),
        }
    }
}

/// Submit / cancel buttons and the search box
#[component]
pub fn FormActions() -> Element {
    let state = use_admin_state();
    let service = use_inventory_service();
    let mut inventory = state.inventory;

    let (editing, saving, search) = {
        let admin = inventory.read();
        (
            admin.mode().is_editing(),
            admin.is_saving(),
            admin.search().to_string(),
        )
    };

    rsx! {
        div {
            class: "form-actions",
            div {
                class: "form-buttons",
                button {
                    class: "primary-button",
                    disabled: saving,
                    onclick: move |_| submit_draft(inventory, service.clone()),
                    if editing { "Update Item" } else { "Add to Inventory" }
                }
                if editing {
                    button {
                        class: "secondary-button",
                        onclick: move |_| inventory.write().reset_draft(),
                        "Cancel"
                    }
                }
            }
            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search by name or SKU...",
                value: "{search}",
                oninput: move |e: FormEvent| inventory.write().set_search(e.value()),
            }
        }
    }
}
