use crowd_config::ConfigError;
use crowd_core::DestinationId;
use crowd_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid scenario: {0}")]
    Config(#[from] ConfigError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("{0} does not exist")]
    UnknownDestination(DestinationId),
}

pub type SimResult<T> = Result<T, SimError>;
