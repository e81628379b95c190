use geo::Point;
use serde::{Deserialize, Serialize};

/// a lattice point of the interpolation grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    pub coordinate: Point<f64>,
    /// id of the TIN triangle containing this point, assigned while tagging
    pub triangle: Option<usize>,
    /// interpolated travel time in seconds, assigned by the interpolator
    pub value: Option<f64>,
}

impl GridPoint {
    pub fn new(coordinate: Point<f64>) -> Self {
        Self {
            coordinate,
            triangle: None,
            value: None,
        }
    }
}
