//! `wp-sim` — the tick scheduler.
//!
//! # Tick loop
//!
//! ```text
//! place:   on_place for every agent at path[0]
//!          on_terminal(T0) for agents that can never move
//! repeat while some agent is Moving and no stop was requested:
//!   tick += 1
//!   for agent in declaration order:
//!     Moving            → advance, on_move(tick, next node's point)
//!     HaltedAtCondition → skip
//!     Finished          → skip
//!   on_tick_end(tick, moves)
//!   pause config.tick_interval (interruptible by StopHandle)
//! on_sim_end(summary)
//! ```
//!
//! Every moving agent's index strictly increases each tick and no agent
//! leaves a terminal state, so the loop runs at most
//! `max(path.len()) - 1` ticks.
//!
//! # Quick-start
//!
//! ```
//! use wp_core::{NodeId, SimConfig};
//! use wp_sim::{RecordingObserver, SimBuilder};
//! use wp_spatial::Topology;
//!
//! let topology = Topology::from_nodes([
//!     (NodeId(1), 50.0, 50.0),
//!     (NodeId(2), 150.0, 50.0),
//! ])?;
//! let mut sim = SimBuilder::new(SimConfig::headless(), topology)
//!     .agent("robotA", [NodeId(1), NodeId(2)])
//!     .build()?;
//!
//! let mut obs = RecordingObserver::default();
//! let summary = sim.run(&mut obs);
//! assert_eq!(summary.ticks, 1);
//! assert_eq!(obs.moves.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stop;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, PositionUpdate, RecordingObserver, SimObserver};
pub use sim::{RunSummary, Sim};
pub use stop::StopHandle;
