//! Halt directive resolution.
//!
//! Instructions are free-form human text such as
//! `"Stop before reaching node 3"`.  The first run of ASCII digits is taken
//! as the node the agent must not move onto; the rest of the text is ignored.
//!
//! Resolution runs once per agent while the simulation is being built.
//! Nothing here is consulted during ticks.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use wp_core::{DirectivePolicy, NodeId};

use crate::DirectiveError;

fn node_ref_pattern() -> &'static Regex {
    static NODE_REF: OnceLock<Regex> = OnceLock::new();
    NODE_REF.get_or_init(|| Regex::new(r"[0-9]+").expect("node reference pattern is valid"))
}

/// Extract the first integer token in `instruction` as a [`NodeId`].
///
/// # Errors
///
/// - [`DirectiveError::NoNodeReference`] if the text contains no digits.
/// - [`DirectiveError::OutOfRange`] if the digits do not fit a `NodeId`.
///
/// ```
/// use wp_agent::extract_node_ref;
/// use wp_core::NodeId;
///
/// assert_eq!(extract_node_ref("Stop before reaching node 3"), Ok(NodeId(3)));
/// assert!(extract_node_ref("keep going").is_err());
/// ```
pub fn extract_node_ref(instruction: &str) -> Result<NodeId, DirectiveError> {
    let token = node_ref_pattern()
        .find(instruction)
        .ok_or_else(|| DirectiveError::NoNodeReference {
            instruction: instruction.to_owned(),
        })?
        .as_str();

    token
        .parse::<u32>()
        .map(NodeId)
        .map_err(|_| DirectiveError::OutOfRange { token: token.to_owned() })
}

/// Resolve an agent's optional halt instruction into its halt condition.
///
/// | Instruction                 | `Strict`                   | `Lenient`           |
/// |-----------------------------|----------------------------|---------------------|
/// | absent                      | `Ok(None)`                 | `Ok(None)`          |
/// | contains a node reference   | `Ok(Some(node))`           | `Ok(Some(node))`    |
/// | no digits                   | `Err(NoNodeReference)`     | `Ok(None)` + warning |
/// | digits overflow `u32`       | `Err(OutOfRange)`          | `Ok(None)` + warning |
///
/// Whether the node exists in the topology is checked by the caller, which
/// owns the topology.
pub fn resolve(
    instruction: Option<&str>,
    policy:      DirectivePolicy,
) -> Result<Option<NodeId>, DirectiveError> {
    let Some(text) = instruction else {
        return Ok(None);
    };

    match (extract_node_ref(text), policy) {
        (Ok(node), _) => Ok(Some(node)),
        (Err(e), DirectivePolicy::Lenient) => {
            warn!(instruction = text, error = %e, "ignoring halt instruction; agent will not halt");
            Ok(None)
        }
        (Err(e), DirectivePolicy::Strict) => Err(e),
    }
}
