//! CSV table loaders.
//!
//! # CSV formats
//!
//! `nodes.csv` — one row per waypoint:
//!
//! ```csv
//! node_id,x,y
//! 1,50,50
//! 2,150,50
//! ```
//!
//! `paths.csv` — one row per agent; row order is declaration order and
//! `path` is a whitespace-separated list of node ids:
//!
//! ```csv
//! agent,path
//! robotA,1 2 3 4 5
//! robotB,6 7 3 8 9
//! ```
//!
//! `halts.csv` — optional, one row per agent that should halt early:
//!
//! ```csv
//! agent,instruction
//! robotB,Stop before reaching node 3
//! ```
//!
//! Fields are trimmed; instructions containing commas must be quoted.

use std::io::Read;

use serde::Deserialize;

use wp_core::{NodeId, Point};

use crate::{ScenarioError, ScenarioResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct NodeRecord {
    node_id: NodeId,
    x:       f32,
    y:       f32,
}

#[derive(Deserialize)]
struct PathRecord {
    agent: String,
    path:  String,
}

#[derive(Deserialize)]
struct HaltRecord {
    agent:       String,
    instruction: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read `node_id,x,y` rows.
pub fn load_nodes_reader<R: Read>(reader: R) -> ScenarioResult<Vec<(NodeId, Point)>> {
    Ok(read_records::<_, NodeRecord>(reader)?
        .into_iter()
        .map(|r| (r.node_id, Point::new(r.x, r.y)))
        .collect())
}

/// Read `agent,path` rows, preserving row order.
pub fn load_paths_reader<R: Read>(reader: R) -> ScenarioResult<Vec<(String, Vec<NodeId>)>> {
    read_records::<_, PathRecord>(reader)?
        .into_iter()
        .map(|r| {
            let path = parse_path(&r.agent, &r.path)?;
            Ok((r.agent, path))
        })
        .collect()
}

/// Read `agent,instruction` rows.
pub fn load_halts_reader<R: Read>(reader: R) -> ScenarioResult<Vec<(String, String)>> {
    Ok(read_records::<_, HaltRecord>(reader)?
        .into_iter()
        .map(|r| (r.agent, r.instruction))
        .collect())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_records<R: Read, T: for<'de> Deserialize<'de>>(reader: R) -> ScenarioResult<Vec<T>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader
        .deserialize::<T>()
        .map(|row| row.map_err(|e| ScenarioError::Parse(e.to_string())))
        .collect()
}

fn parse_path(agent: &str, s: &str) -> ScenarioResult<Vec<NodeId>> {
    s.split_whitespace()
        .map(|tok| {
            tok.parse::<u32>().map(NodeId).map_err(|_| {
                ScenarioError::Parse(format!(
                    "agent {agent:?}: invalid node id {tok:?} in path, expected an unsigned integer"
                ))
            })
        })
        .collect()
}
