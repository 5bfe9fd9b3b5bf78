//! Waypoint topology and builder.
//!
//! # Data layout
//!
//! Nodes are stored densely in insertion order.  Lookup by external
//! [`NodeId`] goes through a hash map from id to slot:
//!
//! ```text
//! slots[id] → s        points[s], ids[s]
//! ```

use wp_core::{NodeId, Point};

use crate::{SpatialError, SpatialResult};

#[cfg(feature = "fx-hash")]
type SlotMap = rustc_hash::FxHashMap<NodeId, usize>;
#[cfg(not(feature = "fx-hash"))]
type SlotMap = std::collections::HashMap<NodeId, usize>;

// ── Topology ──────────────────────────────────────────────────────────────────

/// Immutable mapping from node identifier to coordinate.
///
/// Built once through [`TopologyBuilder`]; no mutation is exposed afterwards,
/// so a `Topology` can be shared freely (the scheduler holds it in an `Arc`).
pub struct Topology {
    ids:    Vec<NodeId>,
    points: Vec<Point>,
    slots:  SlotMap,
}

impl Topology {
    /// Build a topology from `(id, x, y)` triples in one call.
    ///
    /// # Errors
    ///
    /// [`SpatialError::DuplicateNode`] if an id appears twice.
    pub fn from_nodes<I>(nodes: I) -> SpatialResult<Self>
    where
        I: IntoIterator<Item = (NodeId, f32, f32)>,
    {
        let mut b = TopologyBuilder::new();
        for (id, x, y) in nodes {
            b.add_node(id, Point::new(x, y))?;
        }
        Ok(b.build())
    }

    /// Coordinate of `id`.
    ///
    /// # Errors
    ///
    /// [`SpatialError::UnknownNode`] if `id` was never registered.
    #[inline]
    pub fn lookup(&self, id: NodeId) -> SpatialResult<Point> {
        self.slots
            .get(&id)
            .map(|&s| self.points[s])
            .ok_or(SpatialError::UnknownNode(id))
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// All nodes in the order they were registered, e.g. for drawing the
    /// waypoints before any agent is placed.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
        self.ids.iter().copied().zip(self.points.iter().copied())
    }

}

// ── TopologyBuilder ───────────────────────────────────────────────────────────

/// Collects nodes, then freezes them into a [`Topology`].
///
/// # Example
///
/// ```
/// use wp_core::{NodeId, Point};
/// use wp_spatial::TopologyBuilder;
///
/// let mut b = TopologyBuilder::new();
/// b.add_node(NodeId(1), Point::new(50.0, 50.0)).unwrap();
/// b.add_node(NodeId(2), Point::new(150.0, 50.0)).unwrap();
/// let topo = b.build();
/// assert_eq!(topo.lookup(NodeId(2)).unwrap(), Point::new(150.0, 50.0));
/// ```
pub struct TopologyBuilder {
    ids:    Vec<NodeId>,
    points: Vec<Point>,
    slots:  SlotMap,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self {
            ids:    Vec::new(),
            points: Vec::new(),
            slots:  SlotMap::default(),
        }
    }

    pub fn with_capacity(nodes: usize) -> Self {
        let mut slots = SlotMap::default();
        slots.reserve(nodes);
        Self {
            ids:    Vec::with_capacity(nodes),
            points: Vec::with_capacity(nodes),
            slots,
        }
    }

    /// Register node `id` at `pos`.
    ///
    /// # Errors
    ///
    /// [`SpatialError::DuplicateNode`] if `id` is already registered.  The
    /// builder is left unchanged in that case.
    pub fn add_node(&mut self, id: NodeId, pos: Point) -> SpatialResult<()> {
        if self.slots.contains_key(&id) {
            return Err(SpatialError::DuplicateNode(id));
        }
        self.slots.insert(id, self.ids.len());
        self.ids.push(id);
        self.points.push(pos);
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Freeze the registered nodes.
    pub fn build(self) -> Topology {
        Topology {
            ids:    self.ids,
            points: self.points,
            slots:  self.slots,
        }
    }
}

impl Default for TopologyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
