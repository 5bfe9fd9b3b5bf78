//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` so they can be used as map keys and in
//! sorted collections without ceremony.
//!
//! The two IDs differ in meaning:
//!
//! - [`NodeId`] is an *external* identifier chosen by whoever authored the
//!   node table.  It is stable but not dense, so it is never used as a `Vec`
//!   index.
//! - [`AgentId`] is the agent's position in declaration order and doubles as
//!   an index into agent storage.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Identifier of a waypoint in the topology, as written in the node table.
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of an agent in declaration order.
    pub struct AgentId(u32);
}

impl AgentId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

