mod distance_matrix_client;
mod distance_matrix_error;
mod matrix_entry;

pub use distance_matrix_client::DistanceMatrixClient;
pub use distance_matrix_error::DistanceMatrixError;
pub use matrix_entry::MatrixEntry;
