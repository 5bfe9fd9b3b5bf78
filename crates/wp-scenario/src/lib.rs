//! `wp-scenario` — setup tables for a simulation run.
//!
//! A scenario is three tables: node coordinates, agent paths, and optional
//! free-form halt instructions.  They are loaded here without validation;
//! [`Scenario::into_builder`] hands them to `wp_sim::SimBuilder`, which
//! validates everything before the first tick.
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`loader`] | CSV readers for the three tables                  |
//! | [`scenario`] | `Scenario`, the reference two-robot scenario    |
//! | [`error`]  | `ScenarioError`, `ScenarioResult<T>`              |

pub mod error;
pub mod loader;
pub mod scenario;


pub use error::{ScenarioError, ScenarioResult};
pub use loader::{load_halts_reader, load_nodes_reader, load_paths_reader};
pub use scenario::Scenario;
