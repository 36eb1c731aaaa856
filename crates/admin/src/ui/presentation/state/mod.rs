//! Reactive UI state

mod admin_state;

pub use admin_state::{use_admin_state, AdminState};
