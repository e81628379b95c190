use geo::Point;
use serde::{Deserialize, Serialize};

/// a surviving sample as seen by the TIN: a location with its travel time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TinVertex {
    pub coordinate: Point<f64>,
    pub value: f64,
}
