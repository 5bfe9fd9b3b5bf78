//! Unit tests for wp-spatial.

use wp_core::{NodeId, Point};

use crate::{SpatialError, Topology, TopologyBuilder};

/// The ten-node grid used by the reference robot scenario.
fn reference_grid() -> Topology {
    Topology::from_nodes([
        (NodeId(1), 50.0, 50.0),
        (NodeId(2), 150.0, 50.0),
        (NodeId(3), 250.0, 50.0),
        (NodeId(4), 350.0, 50.0),
        (NodeId(5), 450.0, 50.0),
        (NodeId(6), 50.0, 150.0),
        (NodeId(7), 150.0, 150.0),
        (NodeId(8), 250.0, 150.0),
        (NodeId(9), 350.0, 150.0),
        (NodeId(10), 450.0, 150.0),
    ])
    .unwrap()
}

#[cfg(test)]
mod lookup {
    use super::*;

    #[test]
    fn known_nodes_resolve() {
        let topo = reference_grid();
        assert_eq!(topo.node_count(), 10);
        assert_eq!(topo.lookup(NodeId(1)).unwrap(), Point::new(50.0, 50.0));
        assert_eq!(topo.lookup(NodeId(7)).unwrap(), Point::new(150.0, 150.0));
        assert_eq!(topo.lookup(NodeId(10)).unwrap(), Point::new(450.0, 150.0));
    }

    #[test]
    fn unknown_node_errors() {
        let topo = reference_grid();
        assert_eq!(topo.lookup(NodeId(11)), Err(SpatialError::UnknownNode(NodeId(11))));
        assert!(!topo.contains(NodeId(0)));
        assert!(topo.contains(NodeId(3)));
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let mut b = TopologyBuilder::with_capacity(3);
        b.add_node(NodeId(30), Point::new(0.0, 0.0)).unwrap();
        b.add_node(NodeId(10), Point::new(1.0, 0.0)).unwrap();
        b.add_node(NodeId(20), Point::new(2.0, 0.0)).unwrap();
        let topo = b.build();
        let ids: Vec<NodeId> = topo.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, [NodeId(30), NodeId(10), NodeId(20)]);
    }

    #[test]
    fn empty_topology() {
        let topo = TopologyBuilder::default().build();
        assert!(topo.is_empty());
        assert_eq!(topo.iter().count(), 0);
        assert!(topo.lookup(NodeId(1)).is_err());
    }
}

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn duplicate_node_rejected_and_builder_unchanged() {
        let mut b = TopologyBuilder::new();
        b.add_node(NodeId(1), Point::new(50.0, 50.0)).unwrap();
        let err = b.add_node(NodeId(1), Point::new(99.0, 99.0)).unwrap_err();
        assert_eq!(err, SpatialError::DuplicateNode(NodeId(1)));
        assert_eq!(b.node_count(), 1);

        let topo = b.build();
        assert_eq!(topo.lookup(NodeId(1)).unwrap(), Point::new(50.0, 50.0));
    }

    #[test]
    fn from_nodes_propagates_duplicates() {
        let result = Topology::from_nodes([(NodeId(4), 0.0, 0.0), (NodeId(4), 1.0, 1.0)]);
        assert!(matches!(result, Err(SpatialError::DuplicateNode(NodeId(4)))));
    }
}
