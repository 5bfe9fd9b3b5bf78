//! `wp-core` — foundational types for the waypoint scheduler workspace.
//!
//! Every other `wp-*` crate depends on this one.  It has no `wp-*`
//! dependencies and only optional `serde` externally.
//!
//! # What lives here
//!
//! | Module       | Contents                                     |
//! |--------------|----------------------------------------------|
//! | [`ids`]      | `NodeId`, `AgentId`                          |
//! | [`geo`]      | `Point`                                      |
//! | [`time`]     | `Tick`                                       |
//! | [`config`]   | `SimConfig`, `DirectivePolicy`               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DirectivePolicy, SimConfig};
pub use geo::Point;
pub use ids::{AgentId, NodeId};
pub use time::Tick;
