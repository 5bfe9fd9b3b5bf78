//! Per-agent progression state.

use std::fmt;

use wp_core::{AgentId, NodeId};

use crate::Path;

/// Where an agent stands in its lifecycle.
///
/// `HaltedAtCondition` and `Finished` are terminal: once reported, the agent
/// never moves again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AgentStatus {
    /// Has a next target that is not its halt node.
    Moving,
    /// Next target equals the halt node; frozen at its current node.
    HaltedAtCondition,
    /// Path exhausted; frozen at its last node.
    Finished,
}

impl AgentStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, AgentStatus::Moving)
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AgentStatus::Moving            => "moving",
            AgentStatus::HaltedAtCondition => "halted",
            AgentStatus::Finished          => "finished",
        })
    }
}

/// The progression record for one agent.
///
/// `index` points at the node the agent is heading for; the agent itself
/// stands at `path[index - 1]`.  Only [`advance`](Self::advance) changes
/// `index`, and only upwards.
#[derive(Clone, Debug)]
pub struct AgentState {
    id:          AgentId,
    name:        String,
    path:        Path,
    halt_before: Option<NodeId>,
    index:       usize,
}

impl AgentState {
    /// A fresh agent standing at `path[0]`.
    pub fn new(id: AgentId, name: impl Into<String>, path: Path, halt_before: Option<NodeId>) -> Self {
        Self {
            id,
            name: name.into(),
            path,
            halt_before,
            index: 1,
        }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn halt_before(&self) -> Option<NodeId> {
        self.halt_before
    }

    /// Index of the next target in the path.  Ranges over `1..=path.len()`.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The node the agent currently stands on.
    #[inline]
    pub fn current_node(&self) -> NodeId {
        self.path.as_slice()[self.index - 1]
    }

    /// The node the agent would move onto next, or `None` once the path is
    /// exhausted.
    #[inline]
    pub fn next_target(&self) -> Option<NodeId> {
        self.path.get(self.index)
    }

    pub fn status(&self) -> AgentStatus {
        match self.next_target() {
            None => AgentStatus::Finished,
            Some(next) if Some(next) == self.halt_before => AgentStatus::HaltedAtCondition,
            Some(_) => AgentStatus::Moving,
        }
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.status().is_terminal()
    }

    /// Step onto the next target and return it.
    ///
    /// # Panics
    ///
    /// If the agent is terminal.  The scheduler only advances `Moving`
    /// agents, so reaching this is a scheduler bug.
    pub fn advance(&mut self) -> NodeId {
        let status = self.status();
        assert!(
            status == AgentStatus::Moving,
            "advance() called on agent {:?} in terminal state {status}",
            self.name,
        );
        self.index += 1;
        self.current_node()
    }
}
