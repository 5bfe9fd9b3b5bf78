//! Scheduling-round counter.
//!
//! A tick is one synchronous evaluation round over all agents, not a unit of
//! wall-clock time.  Tick 0 is the setup/placement round; the first movement
//! round is tick 1.

use std::fmt;

/// An absolute tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    /// The placement round, before any agent has moved.
    pub const ZERO: Tick = Tick(0);

    /// The tick following `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
