//! `wp-agent` — agent progression state and halt directives.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`directive`] | `resolve` — free-form instruction → optional halt node   |
//! | [`path`]      | `Path` — shared, non-empty node sequence                 |
//! | [`state`]     | `AgentState`, `AgentStatus`                              |
//! | [`store`]     | `AgentStore` — agents in declaration order + name index  |
//! | [`error`]     | `AgentError`, `DirectiveError`                           |
//!
//! # Progression model
//!
//! An agent starts *at* `path[0]` with `index = 1`, i.e. heading for
//! `path[1]`.  Each successful advance increments `index` by one.  The agent
//! becomes terminal once `index == path.len()` (finished) or once the node at
//! `index` equals its halt node (halted).  Neither state is ever left.

pub mod directive;
pub mod error;
pub mod path;
pub mod state;
pub mod store;


pub use directive::{extract_node_ref, resolve};
pub use error::{AgentError, AgentResult, DirectiveError};
pub use path::Path;
pub use state::{AgentState, AgentStatus};
pub use store::AgentStore;
