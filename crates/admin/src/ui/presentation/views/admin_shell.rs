//! Admin shell - sidebar plus the selected panel
//!
//! Only the inventory panel has content; selecting any other panel shows an
//! empty main area. The selection lives in memory only.

use dioxus::prelude::*;
use gemdesk_domain::Panel;

use super::InventoryView;
use crate::ui::presentation::components::Sidebar;
use crate::ui::presentation::state::use_admin_state;

#[component]
pub fn AdminShell() -> Element {
    let state = use_admin_state();
    let mut tab = state.tab;
    let active = *tab.read();

    rsx! {
        div {
            class: "admin-shell",
            Sidebar {
                active,
                on_select: move |panel: Panel| tab.set(panel),
            }
            main {
                class: "admin-main",
                if active.has_content() {
                    InventoryView {}
                }
            }
        }
    }
}
