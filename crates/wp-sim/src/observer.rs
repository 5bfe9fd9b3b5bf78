//! Presentation-sink trait and stock observers.

use wp_agent::{AgentState, AgentStatus};
use wp_core::{AgentId, NodeId, Point, Tick};

use crate::RunSummary;

/// One agent appearing at one position.
///
/// Placement events carry [`Tick::ZERO`]; movement events carry the tick in
/// which the move happened.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionUpdate {
    pub tick:  Tick,
    pub agent: AgentId,
    pub node:  NodeId,
    pub point: Point,
}

/// Callbacks invoked by [`Sim`][crate::Sim] as it places and moves agents.
///
/// All methods default to no-ops.  Observers only consume events; they get
/// shared references and cannot influence scheduling.
///
/// # Example: console renderer
///
/// ```rust,ignore
/// struct Console;
///
/// impl SimObserver for Console {
///     fn on_move(&mut self, agent: &AgentState, update: PositionUpdate) {
///         println!("{} {} -> {}", update.tick, agent.name(), update.point);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per agent before the first tick, at its starting node.
    fn on_place(&mut self, _agent: &AgentState, _update: PositionUpdate) {}

    /// Called at the start of each tick, before any agent is evaluated.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every agent that moved this tick, in declaration order.
    ///
    /// `agent` already reflects the move: `agent.current_node() == update.node`.
    fn on_move(&mut self, _agent: &AgentState, _update: PositionUpdate) {}

    /// Called exactly once per agent, when it enters a terminal state.
    ///
    /// `tick` is [`Tick::ZERO`] for agents that are terminal from the start.
    fn on_terminal(&mut self, _tick: Tick, _agent: &AgentState, _status: AgentStatus) {}

    /// Called at the end of each tick with the number of agents that moved.
    fn on_tick_end(&mut self, _tick: Tick, _moves: usize) {}

    /// Called once when [`Sim::run`][crate::Sim::run] returns.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`SimObserver`] that keeps every event in memory.
///
/// Intended for headless harnesses and tests.
#[derive(Default, Debug)]
pub struct RecordingObserver {
    pub placements: Vec<PositionUpdate>,
    pub moves:      Vec<PositionUpdate>,
    pub terminals:  Vec<(Tick, AgentId, AgentStatus)>,
    pub tick_moves: Vec<(Tick, usize)>,
    pub summary:    Option<RunSummary>,
}

impl RecordingObserver {
    /// Points emitted for `agent`, in emission order.
    pub fn points_of(&self, agent: AgentId) -> Vec<Point> {
        self.moves
            .iter()
            .filter(|u| u.agent == agent)
            .map(|u| u.point)
            .collect()
    }

    /// Moves emitted during `tick`.
    pub fn moves_in(&self, tick: Tick) -> impl Iterator<Item = &PositionUpdate> + '_ {
        self.moves.iter().filter(move |u| u.tick == tick)
    }
}

impl SimObserver for RecordingObserver {
    fn on_place(&mut self, _agent: &AgentState, update: PositionUpdate) {
        self.placements.push(update);
    }

    fn on_move(&mut self, _agent: &AgentState, update: PositionUpdate) {
        self.moves.push(update);
    }

    fn on_terminal(&mut self, tick: Tick, agent: &AgentState, status: AgentStatus) {
        self.terminals.push((tick, agent.id(), status));
    }

    fn on_tick_end(&mut self, tick: Tick, moves: usize) {
        self.tick_moves.push((tick, moves));
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        self.summary = Some(summary.clone());
    }
}
