//! The agent's fixed waypoint sequence.

use std::sync::Arc;

use wp_core::NodeId;

use crate::{AgentError, AgentResult};

/// An ordered, non-empty, immutable sequence of nodes.
///
/// Cloning is cheap: the node list lives behind an `Arc` and is shared, never
/// copied, between the agent and any observer that wants to hold on to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path(Arc<[NodeId]>);

impl Path {
    /// # Errors
    ///
    /// [`AgentError::EmptyPath`] if `nodes` is empty.
    pub fn new(nodes: impl Into<Vec<NodeId>>) -> AgentResult<Self> {
        let nodes: Vec<NodeId> = nodes.into();
        if nodes.is_empty() {
            return Err(AgentError::EmptyPath);
        }
        Ok(Self(nodes.into()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<NodeId> {
        self.0.get(i).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[NodeId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.iter().copied()
    }
}
