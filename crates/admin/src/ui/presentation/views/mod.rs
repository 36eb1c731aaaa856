//! Top-level views

mod admin_shell;
mod inventory_view;

pub use admin_shell::AdminShell;
pub use inventory_view::InventoryView;
