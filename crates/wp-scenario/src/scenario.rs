//! The `Scenario` — raw setup tables for one run.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::info;

use wp_core::{NodeId, Point, SimConfig};
use wp_sim::SimBuilder;
use wp_spatial::{Topology, TopologyBuilder};

use crate::loader::{load_halts_reader, load_nodes_reader, load_paths_reader};
use crate::ScenarioResult;

/// Node, path, and halt-instruction tables, unvalidated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scenario {
    pub nodes: Vec<(NodeId, Point)>,
    pub paths: Vec<(String, Vec<NodeId>)>,
    pub halts: Vec<(String, String)>,
}

impl Scenario {
    /// The two-robot scenario the scheduler was first written for: ten
    /// waypoints on two rows, `robotA` crossing the top row and `robotB`
    /// told to stop before node 3.
    pub fn reference() -> Self {
        let nodes = [
            (1, 50.0, 50.0),
            (2, 150.0, 50.0),
            (3, 250.0, 50.0),
            (4, 350.0, 50.0),
            (5, 450.0, 50.0),
            (6, 50.0, 150.0),
            (7, 150.0, 150.0),
            (8, 250.0, 150.0),
            (9, 350.0, 150.0),
            (10, 450.0, 150.0),
        ]
        .into_iter()
        .map(|(id, x, y)| (NodeId(id), Point::new(x, y)))
        .collect();

        let ids = |raw: &[u32]| raw.iter().map(|&n| NodeId(n)).collect::<Vec<_>>();

        Self {
            nodes,
            paths: vec![
                ("robotA".into(), ids(&[1, 2, 3, 4, 5])),
                ("robotB".into(), ids(&[6, 7, 3, 8, 9])),
            ],
            halts: vec![("robotB".into(), "Stop before reaching node 3".into())],
        }
    }

    /// Load the three tables from any `Read` sources.
    pub fn from_readers<N: Read, P: Read, H: Read>(
        nodes: N,
        paths: P,
        halts: Option<H>,
    ) -> ScenarioResult<Self> {
        Ok(Self {
            nodes: load_nodes_reader(nodes)?,
            paths: load_paths_reader(paths)?,
            halts: match halts {
                Some(h) => load_halts_reader(h)?,
                None    => Vec::new(),
            },
        })
    }

    /// Load `nodes.csv`, `paths.csv` and, if present, `halts.csv` from `dir`.
    pub fn load_dir(dir: &Path) -> ScenarioResult<Self> {
        let nodes = File::open(dir.join("nodes.csv"))?;
        let paths = File::open(dir.join("paths.csv"))?;
        let halts = match File::open(dir.join("halts.csv")) {
            Ok(f) => Some(f),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        let scenario = Self::from_readers(nodes, paths, halts)?;
        info!(
            dir    = %dir.display(),
            nodes  = scenario.nodes.len(),
            agents = scenario.paths.len(),
            halts  = scenario.halts.len(),
            "scenario loaded"
        );
        Ok(scenario)
    }

    /// Build the topology from the node table.
    pub fn topology(&self) -> ScenarioResult<Topology> {
        let mut b = TopologyBuilder::with_capacity(self.nodes.len());
        for &(id, pos) in &self.nodes {
            b.add_node(id, pos)?;
        }
        Ok(b.build())
    }

    /// A [`SimBuilder`] with every agent and halt instruction declared.
    ///
    /// Only the node table is validated here; agent-level validation happens
    /// in `SimBuilder::build`.
    pub fn into_builder(self, config: SimConfig) -> ScenarioResult<SimBuilder> {
        let topology = self.topology()?;
        let mut builder = SimBuilder::new(config, topology);
        for (agent, path) in self.paths {
            builder = builder.agent(agent, path);
        }
        for (agent, text) in self.halts {
            builder = builder.halt_instruction(agent, text);
        }
        Ok(builder)
    }
}
