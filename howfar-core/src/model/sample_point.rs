use geo::Point;
use serde::{Deserialize, Serialize};

/// a candidate location around the origin, along with its travel time
/// measurement once the distance matrix has been queried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub coordinate: Point<f64>,
    /// travel duration in seconds. None if unreachable or not yet measured.
    pub value: Option<f64>,
    pub outlier: bool,
    /// distance in kilometers between the requested coordinate and the
    /// location the routing service snapped it to
    pub displacement_km: Option<f64>,
}

impl SamplePoint {
    pub fn new(coordinate: Point<f64>) -> Self {
        Self {
            coordinate,
            value: None,
            outlier: false,
            displacement_km: None,
        }
    }

    /// the travel duration of this sample if it may serve as a TIN vertex:
    /// not an outlier and strictly positive.
    pub fn usable_value(&self) -> Option<f64> {
        if self.outlier {
            None
        } else {
            self.value.filter(|v| *v > 0.0)
        }
    }

    pub fn is_usable(&self) -> bool {
        self.usable_value().is_some()
    }
}
