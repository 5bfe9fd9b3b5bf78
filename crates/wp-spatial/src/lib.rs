//! `wp-spatial` — the topology registry.
//!
//! # Crate layout
//!
//! | Module       | Contents                                       |
//! |--------------|------------------------------------------------|
//! | [`topology`] | `Topology` (id → coordinate), `TopologyBuilder` |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`             |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                       |
//! |-----------|----------------------------------------------|
//! | `fx-hash` | Uses `FxHashMap` for the node id → slot map. |

pub mod error;
pub mod topology;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use topology::{Topology, TopologyBuilder};
