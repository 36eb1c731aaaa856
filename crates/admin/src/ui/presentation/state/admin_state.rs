//! Admin state management
//!
//! Wraps the inventory state machine and the selected panel in signals so
//! every component re-renders when either changes.

use dioxus::prelude::*;
use gemdesk_domain::Panel;

use crate::application::{AdminHandle, InventoryAdmin};

/// Shell-wide state provided as Dioxus context
#[derive(Clone, Copy)]
pub struct AdminState {
    /// Draft, snapshot and search text of the inventory panel
    pub inventory: Signal<InventoryAdmin>,
    /// Sidebar selection. Not persisted across reloads.
    pub tab: Signal<Panel>,
}

impl AdminState {
    pub fn new() -> Self {
        Self {
            inventory: Signal::new(InventoryAdmin::new()),
            tab: Signal::new(Panel::default()),
        }
    }
}

impl Default for AdminState {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminHandle for Signal<InventoryAdmin> {
    fn update<R>(&mut self, f: impl FnOnce(&mut InventoryAdmin) -> R) -> R {
        f(&mut *self.write())
    }
}

/// Hook to access the AdminState from context
pub fn use_admin_state() -> AdminState {
    use_context::<AdminState>()
}
