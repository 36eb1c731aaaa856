//! Sidebar - static navigation between panels

use dioxus::prelude::*;
use gemdesk_domain::Panel;

#[component]
pub fn Sidebar(active: Panel, on_select: EventHandler<Panel>) -> Element {
    let buttons = Panel::ALL.into_iter().map(move |panel| {
        let class = if panel == active {
            "nav-button nav-button-active"
        } else {
            "nav-button"
        };
        let key = panel.key();
        let label = panel.label();

        rsx! {
            button {
                key: "{key}",
                class: "{class}",
                onclick: move |_| on_select.call(panel),
                "{label}"
            }
        }
    });

    rsx! {
        aside {
            class: "sidebar",
            h1 { class: "sidebar-title", "💎 Jewelry Admin" }
            nav {
                class: "sidebar-nav",
                {buttons}
            }
        }
    }
}
