//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use tracing::warn;

use wp_agent::{AgentState, AgentStatus};
use wp_core::{Point, Tick};
use wp_sim::{PositionUpdate, RunSummary, SimObserver};

use crate::row::{EventKind, PositionRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes placements, moves, terminal events, and
/// tick summaries to any [`OutputWriter`] backend.
///
/// Rows are buffered and written once per tick (placements just before the
/// first tick).  Errors from the writer are stored internally because
/// observer methods have no return value; check
/// [`take_error`][Self::take_error] after `sim.run()` returns.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<PositionRow>,
    /// Last emitted coordinate per agent, indexed by `AgentId`.
    last_point: Vec<Option<Point>>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:    Vec::new(),
            last_point: Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn push(&mut self, tick: Tick, agent: &AgentState, update: PositionUpdate, event: EventKind) {
        let slot = agent.id().index();
        if slot >= self.last_point.len() {
            self.last_point.resize(slot + 1, None);
        }
        self.last_point[slot] = Some(update.point);

        self.pending.push(PositionRow {
            tick:     tick.0,
            agent_id: agent.id().0,
            agent:    agent.name().to_owned(),
            node_id:  update.node.0,
            x:        update.point.x,
            y:        update.point.y,
            event,
        });
    }

    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let rows = std::mem::take(&mut self.pending);
        let result = self.writer.write_positions(&rows);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "position output failed; further errors suppressed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_place(&mut self, agent: &AgentState, update: PositionUpdate) {
        self.push(Tick::ZERO, agent, update, EventKind::Place);
    }

    fn on_tick_start(&mut self, _tick: Tick) {
        self.flush_pending();
    }

    fn on_move(&mut self, agent: &AgentState, update: PositionUpdate) {
        self.push(update.tick, agent, update, EventKind::Move);
    }

    fn on_terminal(&mut self, tick: Tick, agent: &AgentState, status: AgentStatus) {
        let event = match status {
            AgentStatus::HaltedAtCondition => EventKind::Halted,
            AgentStatus::Finished          => EventKind::Finished,
            AgentStatus::Moving            => return,
        };
        // Terminal agents stay on the node they were last reported at.
        let Some(point) = self.last_point.get(agent.id().index()).copied().flatten() else {
            return;
        };
        let update = PositionUpdate { tick, agent: agent.id(), node: agent.current_node(), point };
        self.push(tick, agent, update, event);
    }

    fn on_tick_end(&mut self, tick: Tick, moves: usize) {
        self.flush_pending();
        let result = self
            .writer
            .write_tick_summary(&TickSummaryRow { tick: tick.0, moves: moves as u64 });
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _summary: &RunSummary) {
        self.flush_pending();
        let result = self.writer.finish();
        self.store_err(result);
    }
}
