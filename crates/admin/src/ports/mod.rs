//! Admin port definitions.

pub mod outbound;
