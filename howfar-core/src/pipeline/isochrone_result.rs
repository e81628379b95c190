use serde::{Deserialize, Serialize};

use crate::algorithm::grid::PointGrid;
use crate::algorithm::triangulation::Tin;
use crate::model::{Isoband, SamplePoint};

/// everything produced by one isochrone run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsochroneResult {
    /// every generated sample with its measurement, outliers included
    pub samples: Vec<SamplePoint>,
    pub tin: Tin,
    pub grid: PointGrid,
    /// ordered from the shortest to the longest travel time
    pub isobands: Vec<Isoband>,
}
