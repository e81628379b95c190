use geo::Point;
use serde::{Deserialize, Serialize};

/// one destination's row of a one-to-many distance matrix response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixEntry {
    /// travel duration in seconds, None if the destination is unreachable
    pub duration: Option<f64>,
    /// the location the routing service snapped the destination to
    pub location: Point<f64>,
}
