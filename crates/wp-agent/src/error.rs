use thiserror::Error;

/// Errors raised while assembling agents.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("path must contain at least one node")]
    EmptyPath,

    #[error("agent {0:?} declared more than once")]
    DuplicateName(String),
}

pub type AgentResult<T> = Result<T, AgentError>;

/// Errors raised while turning a halt instruction into a node reference.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectiveError {
    #[error("halt instruction {instruction:?} does not name a node")]
    NoNodeReference { instruction: String },

    #[error("node reference {token:?} in halt instruction is out of range")]
    OutOfRange { token: String },
}
