//! Reusable presentation components

mod inventory_table;
mod item_form;
mod sidebar;

pub use inventory_table::InventoryTable;
pub use item_form::{FormActions, ItemForm};
pub use sidebar::Sidebar;
