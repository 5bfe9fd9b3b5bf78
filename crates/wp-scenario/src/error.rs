use thiserror::Error;

use wp_sim::SimError;
use wp_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid node table: {0}")]
    Spatial(#[from] SpatialError),

    #[error("invalid scenario: {0}")]
    Sim(#[from] SimError),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
