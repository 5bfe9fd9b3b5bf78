//! The `AgentStore` — all agents in declaration order.

use std::collections::HashMap;

use wp_core::{AgentId, NodeId};

use crate::{AgentError, AgentResult, AgentState, AgentStatus, Path};

/// Agent records indexed by [`AgentId`], plus a name → id index.
///
/// Iteration order is declaration order, which is also the order the
/// scheduler evaluates agents in each tick.
#[derive(Default)]
pub struct AgentStore {
    agents:  Vec<AgentState>,
    by_name: HashMap<String, AgentId>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new agent and return its id.
    ///
    /// # Errors
    ///
    /// [`AgentError::DuplicateName`] if `name` is already taken.
    pub fn push(
        &mut self,
        name:        &str,
        path:        Path,
        halt_before: Option<NodeId>,
    ) -> AgentResult<AgentId> {
        if self.by_name.contains_key(name) {
            return Err(AgentError::DuplicateName(name.to_owned()));
        }
        let id = AgentId(self.agents.len() as u32);
        self.agents.push(AgentState::new(id, name, path, halt_before));
        self.by_name.insert(name.to_owned(), id);
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&AgentState> {
        self.agents.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut AgentState> {
        self.agents.get_mut(id.index())
    }

    pub fn id_of(&self, name: &str) -> Option<AgentId> {
        self.by_name.get(name).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<&AgentState> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgentState> + '_ {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut AgentState> + '_ {
        self.agents.iter_mut()
    }

    /// Number of agents currently in `status`.
    pub fn count_status(&self, status: AgentStatus) -> usize {
        self.agents.iter().filter(|a| a.status() == status).count()
    }

    /// `true` while at least one agent can still move.
    pub fn any_moving(&self) -> bool {
        self.agents.iter().any(|a| a.status() == AgentStatus::Moving)
    }
}
