use dioxus::prelude::*;

pub mod presentation;

/// Stylesheet bundled into the binary so desktop and web render alike
const ADMIN_CSS: &str = include_str!("../../assets/css/admin.css");

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Must be created inside an active Dioxus runtime.
    use_context_provider(presentation::state::AdminState::new);

    rsx! {
        style { {ADMIN_CSS} }
        presentation::views::AdminShell {}
    }
}
