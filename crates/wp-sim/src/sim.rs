//! The `Sim` struct and its tick loop.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use wp_agent::{AgentState, AgentStatus, AgentStore};
use wp_core::{AgentId, Point, SimConfig, Tick};
use wp_spatial::Topology;

use crate::{PositionUpdate, SimObserver, StopHandle};

// ── RunSummary ────────────────────────────────────────────────────────────────

/// Outcome of [`Sim::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Last tick executed (`0` if no agent ever moved).
    pub ticks:    u64,
    /// Total moves across all agents since placement.
    pub moves:    u64,
    /// Agents that exhausted their path.
    pub finished: usize,
    /// Agents frozen by their halt condition.
    pub halted:   usize,
    /// Agents still able to move.  Non-zero only when `stopped` is set.
    pub moving:   usize,
    /// `true` if the run ended because of a [`StopHandle`] request.
    pub stopped:  bool,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The tick scheduler.
///
/// Owns every [`AgentState`] and is the only code that mutates them; the
/// topology and paths are shared read-only.  Observers receive shared
/// references only.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    config:    SimConfig,
    topology:  Arc<Topology>,
    agents:    AgentStore,
    /// Coordinates of each agent's path, indexed by `AgentId` then path index.
    waypoints: Vec<Box<[Point]>>,
    tick:      Tick,
    placed:    bool,
    stop:      StopHandle,
}

impl Sim {
    pub(crate) fn new(
        config:    SimConfig,
        topology:  Arc<Topology>,
        agents:    AgentStore,
        waypoints: Vec<Box<[Point]>>,
        stop:      StopHandle,
    ) -> Self {
        debug_assert_eq!(agents.len(), waypoints.len());
        Self {
            config,
            topology,
            agents,
            waypoints,
            tick: Tick::ZERO,
            placed: false,
            stop,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn topology(&self) -> &Arc<Topology> {
        &self.topology
    }

    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    /// The last tick executed.  [`Tick::ZERO`] before the first move.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// Where `agent` currently stands.
    pub fn position(&self, agent: AgentId) -> Option<Point> {
        let state = self.agents.get(agent)?;
        Some(self.waypoints[agent.index()][state.index() - 1])
    }

    /// `true` once no agent can move again.
    pub fn is_complete(&self) -> bool {
        !self.agents.any_moving()
    }

    /// A handle that stops [`run`](Self::run) between ticks.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Emit the initial placement of every agent.
    ///
    /// Runs once; later calls are no-ops.  [`step`](Self::step) and
    /// [`run`](Self::run) call it automatically.
    pub fn place<O: SimObserver>(&mut self, observer: &mut O) {
        if self.placed {
            return;
        }
        self.placed = true;

        for agent in self.agents.iter() {
            let update = PositionUpdate {
                tick:  Tick::ZERO,
                agent: agent.id(),
                node:  agent.current_node(),
                point: self.waypoints[agent.id().index()][0],
            };
            observer.on_place(agent, update);

            let status = agent.status();
            if status.is_terminal() {
                report_terminal(Tick::ZERO, agent, status);
                observer.on_terminal(Tick::ZERO, agent, status);
            }
        }
    }

    /// Execute one tick and return the number of agents that moved.
    ///
    /// Agents are evaluated in declaration order.  A complete simulation
    /// ignores further calls and returns `0` without advancing the tick.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        self.place(observer);
        if self.is_complete() {
            return 0;
        }

        let tick = self.tick.next();
        self.tick = tick;
        observer.on_tick_start(tick);

        let mut moves = 0;
        for agent in self.agents.iter_mut() {
            if agent.status() != AgentStatus::Moving {
                continue;
            }

            let node  = agent.advance();
            let point = self.waypoints[agent.id().index()][agent.index() - 1];
            moves += 1;

            debug!(tick = tick.0, agent = agent.name(), node = node.0, x = point.x, y = point.y, "agent moved");
            observer.on_move(agent, PositionUpdate { tick, agent: agent.id(), node, point });

            let status = agent.status();
            if status.is_terminal() {
                report_terminal(tick, agent, status);
                observer.on_terminal(tick, agent, status);
            }
        }

        observer.on_tick_end(tick, moves);
        moves
    }

    /// Run until no agent can move or a stop is requested.
    ///
    /// Pauses `config.tick_interval_ms` between ticks; the pause is skipped
    /// after the final tick and is cut short by [`StopHandle::stop`].
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunSummary {
        self.place(observer);

        let interval = self.config.tick_interval();
        let mut stopped = false;

        while !self.is_complete() {
            if self.stop.is_stopped() {
                stopped = true;
                break;
            }
            if self.step(observer) == 0 {
                break;
            }
            if !self.is_complete() && self.stop.wait(interval) {
                stopped = true;
                break;
            }
        }

        let summary = self.summary(stopped);
        info!(
            ticks    = summary.ticks,
            moves    = summary.moves,
            finished = summary.finished,
            halted   = summary.halted,
            stopped  = summary.stopped,
            "simulation ended"
        );
        observer.on_sim_end(&summary);
        summary
    }

    fn summary(&self, stopped: bool) -> RunSummary {
        RunSummary {
            ticks:    self.tick.0,
            moves:    self.agents.iter().map(|a| (a.index() - 1) as u64).sum(),
            finished: self.agents.count_status(AgentStatus::Finished),
            halted:   self.agents.count_status(AgentStatus::HaltedAtCondition),
            moving:   self.agents.count_status(AgentStatus::Moving),
            stopped,
        }
    }
}

impl fmt::Debug for Sim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sim")
            .field("tick", &self.tick)
            .field("nodes", &self.topology.node_count())
            .field("agents", &self.agents.len())
            .field("moving", &self.agents.count_status(AgentStatus::Moving))
            .field("placed", &self.placed)
            .field("stopped", &self.stop.is_stopped())
            .finish()
    }
}

fn report_terminal(tick: Tick, agent: &AgentState, status: AgentStatus) {
    match (status, agent.next_target()) {
        (AgentStatus::HaltedAtCondition, Some(next)) => info!(
            tick = tick.0,
            agent = agent.name(),
            at = agent.current_node().0,
            halt_node = next.0,
            "agent stops before halt node"
        ),
        _ => info!(
            tick = tick.0,
            agent = agent.name(),
            at = agent.current_node().0,
            "agent finished its path"
        ),
    }
}
