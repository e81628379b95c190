use geo::Point;
use howfar_core::matrix::{DistanceMatrixError, MatrixEntry};
use serde::{Deserialize, Serialize};

/// status code of a successful OSRM request
pub const OSRM_OK: &str = "Ok";

/// body of an OSRM `table` service response queried with `sources=0`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsrmTableResponse {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    /// one row per source, one column per coordinate, in seconds
    #[serde(default)]
    pub durations: Vec<Vec<Option<f64>>>,
    #[serde(default)]
    pub destinations: Vec<OsrmWaypoint>,
}

/// a requested coordinate as snapped to the road network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsrmWaypoint {
    /// `[lon, lat]`
    pub location: [f64; 2],
    #[serde(default)]
    pub name: Option<String>,
    /// distance in meters from the requested coordinate
    #[serde(default)]
    pub distance: Option<f64>,
}

impl OsrmTableResponse {
    /// pairs the response with the `n` destinations requested after the
    /// origin. column 0 of the response is the origin itself and is skipped.
    pub fn into_entries(self, n: usize) -> Result<Vec<MatrixEntry>, DistanceMatrixError> {
        if self.code != OSRM_OK {
            return Err(DistanceMatrixError::ServiceError {
                code: self.code,
                message: self.message.unwrap_or_default(),
            });
        }
        let row = self.durations.into_iter().next().ok_or_else(|| {
            DistanceMatrixError::MalformedResponse(String::from("response has no durations"))
        })?;
        let expected = n + 1;
        if row.len() != expected {
            return Err(DistanceMatrixError::ResponseLengthMismatch {
                expected: n,
                found: row.len().saturating_sub(1),
            });
        }
        if self.destinations.len() != expected {
            return Err(DistanceMatrixError::ResponseLengthMismatch {
                expected: n,
                found: self.destinations.len().saturating_sub(1),
            });
        }
        let entries = row
            .into_iter()
            .zip(self.destinations)
            .skip(1)
            .map(|(duration, waypoint)| MatrixEntry {
                duration,
                location: Point::new(waypoint.location[0], waypoint.location[1]),
            })
            .collect();
        Ok(entries)
    }
}
