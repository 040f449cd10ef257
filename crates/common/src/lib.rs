//! Shared building blocks for the car-doctor workspace: wire types used by
//! more than one crate and the tracing subscriber setup.

pub mod types;
pub mod utils;
