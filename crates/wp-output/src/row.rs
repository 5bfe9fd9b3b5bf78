//! Plain data row types written by output backends.

use std::fmt;

/// Why a position row was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Initial placement at the first node of the path (tick 0).
    Place,
    /// The agent moved onto this position this tick.
    Move,
    /// The agent froze here because its next node is its halt node.
    Halted,
    /// The agent froze here at the end of its path.
    Finished,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Place    => "place",
            EventKind::Move     => "move",
            EventKind::Halted   => "halted",
            EventKind::Finished => "finished",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One agent at one position.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionRow {
    pub tick:     u64,
    pub agent_id: u32,
    pub agent:    String,
    pub node_id:  u32,
    pub x:        f32,
    pub y:        f32,
    pub event:    EventKind,
}

/// Summary of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:  u64,
    pub moves: u64,
}
