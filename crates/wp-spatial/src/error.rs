//! Spatial-subsystem error type.

use thiserror::Error;

use wp_core::NodeId;

/// Errors produced by `wp-spatial`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpatialError {
    #[error("node {0} is not registered in the topology")]
    UnknownNode(NodeId),

    #[error("node {0} registered more than once")]
    DuplicateNode(NodeId),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
