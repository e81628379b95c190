use geo::Point;
use rstar::{RTree, AABB};

use super::PointGrid;
use crate::algorithm::triangulation::Tin;

/// assigns each grid point the id of the TIN triangle containing it. points
/// on an edge shared by several triangles take the lowest id, points outside
/// the TIN are left untagged.
///
/// # Returns
///
/// * the number of grid points that were tagged
pub fn tag(grid: &mut PointGrid, tin: &Tin) -> usize {
    let tree = RTree::bulk_load(tin.triangles().to_vec());
    let mut tagged = 0;
    for grid_point in grid.points_mut().iter_mut() {
        let coord = grid_point.coordinate.0;
        let query = AABB::from_point(Point::from(coord));
        grid_point.triangle = tree
            .locate_in_envelope_intersecting(&query)
            .filter(|t| t.contains(coord))
            .map(|t| t.id)
            .min();
        if grid_point.triangle.is_some() {
            tagged += 1;
        }
    }
    log::debug!(
        "tagged {} of {} grid points with a TIN triangle",
        tagged,
        grid.len()
    );
    tagged
}
