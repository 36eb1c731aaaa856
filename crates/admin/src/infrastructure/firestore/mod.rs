//! Cloud Firestore adapter
//!
//! Talks to the Firestore REST API (`v1`) directly. Each inventory record is
//! one document in the collection; every field is written as a
//! `stringValue`.

mod client;
pub mod wire;

pub use client::FirestoreStore;
