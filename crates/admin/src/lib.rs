//! Gemdesk admin crate.
//!
//! This crate contains the inventory admin UI, its application logic, and
//! the document store adapters. Multi-platform support is provided via
//! compile-time `cfg` selection.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::app;
