//! Fluent builder for constructing a [`Sim`].

use std::collections::HashMap;
use std::sync::Arc;

use wp_agent::{AgentStore, Path, resolve};
use wp_core::{NodeId, Point, SimConfig};
use wp_spatial::Topology;

use crate::{Sim, SimError, SimResult, StopHandle};

/// Fluent builder for [`Sim`].
///
/// # Inputs
///
/// | Method                        | Meaning                                   |
/// |-------------------------------|-------------------------------------------|
/// | `new(config, topology)`       | Run configuration and node table          |
/// | `.agent(name, path)`          | Declare an agent; order is significant    |
/// | `.halt_instruction(name, s)`  | Free-form halt text for a declared agent  |
///
/// All validation happens in [`build`](Self::build); the other methods only
/// record input, so declaration and instruction calls may be interleaved.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::headless(), topology)
///     .agent("robotA", [NodeId(1), NodeId(2), NodeId(3)])
///     .agent("robotB", [NodeId(6), NodeId(7), NodeId(3)])
///     .halt_instruction("robotB", "Stop before reaching node 3")
///     .build()?;
/// ```
pub struct SimBuilder {
    config:       SimConfig,
    topology:     Arc<Topology>,
    agents:       Vec<(String, Vec<NodeId>)>,
    instructions: Vec<(String, String)>,
}

impl SimBuilder {
    /// Create a builder over `topology`.
    ///
    /// Accepts an owned `Topology` or an `Arc<Topology>` shared with other
    /// simulations.
    pub fn new(config: SimConfig, topology: impl Into<Arc<Topology>>) -> Self {
        Self {
            config,
            topology:     topology.into(),
            agents:       Vec::new(),
            instructions: Vec::new(),
        }
    }

    /// Declare an agent following `path`.
    pub fn agent(
        mut self,
        name: impl Into<String>,
        path: impl IntoIterator<Item = NodeId>,
    ) -> Self {
        self.agents.push((name.into(), path.into_iter().collect()));
        self
    }

    /// Attach a free-form halt instruction to agent `name`.
    ///
    /// Agents without an instruction never halt early.
    pub fn halt_instruction(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.instructions.push((name.into(), text.into()));
        self
    }

    /// Validate every input, resolve halt directives, and return a
    /// ready-to-run [`Sim`].
    ///
    /// # Errors
    ///
    /// Any [`SimError`]: empty or duplicate agents, instructions for unknown
    /// agents or given twice, malformed directives (per
    /// `config.directive_policy`), and node references missing from the
    /// topology.  Nothing is partially built on error.
    pub fn build(self) -> SimResult<Sim> {
        // ── Index halt instructions by agent name ─────────────────────────
        let mut instructions: HashMap<&str, &str> = HashMap::with_capacity(self.instructions.len());
        for (name, text) in &self.instructions {
            if instructions.insert(name.as_str(), text.as_str()).is_some() {
                return Err(SimError::DuplicateInstruction(name.clone()));
            }
        }
        if let Some((name, _)) = self
            .instructions
            .iter()
            .find(|(name, _)| !self.agents.iter().any(|(a, _)| a == name))
        {
            return Err(SimError::UndeclaredAgent(name.clone()));
        }

        // ── Validate and register agents in declaration order ─────────────
        let mut store     = AgentStore::new();
        let mut waypoints = Vec::with_capacity(self.agents.len());

        for (name, nodes) in self.agents {
            let path = Path::new(nodes).map_err(|source| SimError::Agent {
                agent: name.clone(),
                source,
            })?;

            let points = path
                .iter()
                .map(|node| {
                    self.topology.lookup(node).map_err(|_| SimError::UnknownPathNode {
                        agent: name.clone(),
                        node,
                    })
                })
                .collect::<SimResult<Box<[Point]>>>()?;

            let halt_before = resolve(
                instructions.get(name.as_str()).copied(),
                self.config.directive_policy,
            )
            .map_err(|source| SimError::Directive { agent: name.clone(), source })?;

            if let Some(node) = halt_before.filter(|&n| !self.topology.contains(n)) {
                return Err(SimError::UnknownHaltNode { agent: name, node });
            }

            store
                .push(&name, path, halt_before)
                .map_err(|source| SimError::Agent { agent: name.clone(), source })?;
            waypoints.push(points);
        }

        Ok(Sim::new(self.config, self.topology, store, waypoints, StopHandle::new()))
    }
}
