use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistanceMatrixError {
    #[error("distance matrix request failed: {0}")]
    RequestFailed(String),
    #[error("distance matrix service responded with code '{code}': {message}")]
    ServiceError { code: String, message: String },
    #[error("malformed distance matrix response: {0}")]
    MalformedResponse(String),
    #[error("distance matrix response has {found} entries, expected {expected}")]
    ResponseLengthMismatch { expected: usize, found: usize },
}
