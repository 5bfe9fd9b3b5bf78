use thiserror::Error;

use wp_agent::{AgentError, DirectiveError};
use wp_core::NodeId;

/// Configuration errors detected while building a [`Sim`][crate::Sim].
///
/// Every variant is fatal and raised before the first tick.  Once `build`
/// succeeds the simulation cannot fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("agent {agent:?}: {source}")]
    Agent {
        agent:  String,
        source: AgentError,
    },

    #[error("agent {agent:?} path references unregistered node {node}")]
    UnknownPathNode { agent: String, node: NodeId },

    #[error("agent {agent:?} halt instruction references unregistered node {node}")]
    UnknownHaltNode { agent: String, node: NodeId },

    #[error("agent {agent:?}: {source}")]
    Directive {
        agent:  String,
        source: DirectiveError,
    },

    #[error("halt instruction given for undeclared agent {0:?}")]
    UndeclaredAgent(String),

    #[error("more than one halt instruction given for agent {0:?}")]
    DuplicateInstruction(String),
}

pub type SimResult<T> = Result<T, SimError>;
