use thiserror::Error;

use crate::matrix::DistanceMatrixError;

#[derive(Error, Debug)]
pub enum IsochroneError {
    #[error("invalid isochrone configuration: {0}")]
    InvalidConfiguration(String),
    #[error("distance matrix query failed: {source}")]
    CollaboratorFailure {
        #[from]
        source: DistanceMatrixError,
    },
    #[error("only {found} usable samples remain after filtering, at least 3 are required")]
    InsufficientSamples { found: usize },
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
    #[error("failure serializing isochrone output: {0}")]
    SerializationError(String),
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
