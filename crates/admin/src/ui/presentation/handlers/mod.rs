//! Event handlers that bridge UI events to application workflows

mod inventory_actions;

pub use inventory_actions::{delete_item, refresh_inventory, submit_draft};
