use geo::Point;

use super::{DistanceMatrixError, MatrixEntry};

/// a routing service answering one-to-many travel time queries.
///
/// implementations are shared between concurrent isochrone runs and so must
/// not keep per-request state.
pub trait DistanceMatrixClient: Send + Sync {
    /// queries the travel time from `origin` to every destination.
    ///
    /// # Arguments
    ///
    /// * `origin` - the source location
    /// * `destinations` - ordered destination locations
    ///
    /// # Returns
    ///
    /// * one entry per destination, in request order
    fn table(
        &self,
        origin: Point<f64>,
        destinations: &[Point<f64>],
    ) -> Result<Vec<MatrixEntry>, DistanceMatrixError>;
}
