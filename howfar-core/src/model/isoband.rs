use geo::{Area, MultiPolygon};
use serde::{Deserialize, Serialize};

use super::TimeBin;

/// the region whose interpolated travel time falls within a time bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Isoband {
    pub time_bin: TimeBin,
    pub polygons: MultiPolygon<f64>,
}

impl Isoband {
    pub fn lower(&self) -> f64 {
        self.time_bin.min_time
    }

    pub fn upper(&self) -> f64 {
        self.time_bin.max_time
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.0.is_empty()
    }

    /// planar area in squared degrees
    pub fn area(&self) -> f64 {
        self.polygons.unsigned_area()
    }
}
