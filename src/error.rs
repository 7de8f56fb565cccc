//! Error types for ljmc.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Pair potential evaluated at zero separation")]
    ZeroSeparation,

    #[error("Particles {i} and {j} occupy the same position")]
    CoincidentParticles { i: usize, j: usize },

    #[error("Sampling requested before the ensemble was equilibrated")]
    NotEquilibrated,

    #[error("Histogram binning mismatch: {0}")]
    BinningMismatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
