use geo::Point;
use itertools::Itertools;

use crate::matrix::{DistanceMatrixError, MatrixEntry};
use crate::model::SamplePoint;
use crate::util::geo_utils;

/// samples snapped farther than this from the requested location (for
/// example across a body of water) are not trusted
pub const OUTLIER_DISPLACEMENT_THRESHOLD_KM: f64 = 1.0;

/// pairs each requested coordinate with the distance matrix entry at the same
/// position, recording the travel duration and the snapping displacement and
/// flagging outliers.
///
/// # Arguments
///
/// * `coordinates` - the requested destinations, in query order
/// * `entries` - the distance matrix response, in query order
///
/// # Returns
///
/// * one measured sample per coordinate, or an error if the response length
///   does not match the request
pub fn assign_measurements(
    coordinates: &[Point<f64>],
    entries: &[MatrixEntry],
) -> Result<Vec<SamplePoint>, DistanceMatrixError> {
    if coordinates.len() != entries.len() {
        return Err(DistanceMatrixError::ResponseLengthMismatch {
            expected: coordinates.len(),
            found: entries.len(),
        });
    }
    let samples = coordinates
        .iter()
        .zip_eq(entries.iter())
        .map(|(coordinate, entry)| {
            let displacement = geo_utils::haversine_km(*coordinate, entry.location);
            SamplePoint {
                coordinate: *coordinate,
                value: entry.duration,
                outlier: displacement > OUTLIER_DISPLACEMENT_THRESHOLD_KM,
                displacement_km: Some(displacement),
            }
        })
        .collect_vec();
    Ok(samples)
}

/// removes outliers and samples without a strictly positive travel duration.
/// filtering an already filtered set returns it unchanged.
pub fn filter_samples(samples: &[SamplePoint]) -> Vec<SamplePoint> {
    let (kept, dropped): (Vec<_>, Vec<_>) = samples.iter().partition(|s| s.is_usable());
    if !dropped.is_empty() {
        let outliers = dropped.iter().filter(|s| s.outlier).count();
        log::warn!(
            "discarding {} of {} samples ({} outliers, {} without a positive travel time)",
            dropped.len(),
            samples.len(),
            outliers,
            dropped.len() - outliers
        );
    }
    kept.into_iter().cloned().collect()
}
