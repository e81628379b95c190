use geo::Area;

use super::{band_clip, ring_ops, BandLevel, LatticeVertex, Node};
use crate::algorithm::grid::PointGrid;
use crate::model::{Isoband, TimeBin};
use crate::pipeline::IsochroneError;

/// contours the interpolated grid into one isoband per time bin.
///
/// every lattice cell is split along its south-west to north-east diagonal and
/// each triangle is clipped to each bin. cells with a corner that carries no
/// finite value do not contribute to any band.
///
/// # Arguments
///
/// * `grid` - an interpolated point grid
/// * `bins` - consecutive time bins ordered from nearest to farthest
///
/// # Returns
///
/// * one isoband per bin in the same order, possibly with empty polygons
pub fn generate_isobands(
    grid: &PointGrid,
    bins: &[TimeBin],
) -> Result<Vec<Isoband>, IsochroneError> {
    if grid.columns() < 2 || grid.rows() < 2 {
        return Err(IsochroneError::DegenerateGeometry(format!(
            "a {} x {} point grid is too small to contour",
            grid.columns(),
            grid.rows()
        )));
    }
    let triangles = lattice_triangles(grid);
    let isobands = bins
        .iter()
        .enumerate()
        .map(|(k, bin)| {
            let lower = BandLevel {
                index: k,
                value: bin.min_time,
            };
            let upper = BandLevel {
                index: k + 1,
                value: bin.max_time,
            };
            let pieces: Vec<Vec<Node>> = triangles
                .iter()
                .map(|t| band_clip::clip_triangle(t, lower, upper))
                .filter(|p| !p.is_empty())
                .collect();
            let polygons = ring_ops::merge_pieces(&pieces);
            log::debug!(
                "isoband {} built from {} pieces into {} polygons",
                bin.key(),
                pieces.len(),
                polygons.0.len()
            );
            Isoband {
                time_bin: bin.clone(),
                polygons,
            }
        })
        .collect::<Vec<_>>();
    let total_area: f64 = isobands.iter().map(|b| b.polygons.unsigned_area()).sum();
    log::debug!("generated {} isobands covering {total_area} square degrees", isobands.len());
    Ok(isobands)
}

/// the two counter-clockwise triangles of every fully valued lattice cell
fn lattice_triangles(grid: &PointGrid) -> Vec<[LatticeVertex; 3]> {
    let vertex = |col: usize, row: usize| -> Option<LatticeVertex> {
        let index = grid.index(col, row);
        let point = grid.get(col, row)?;
        let value = point.value.filter(|v| v.is_finite())?;
        Some(LatticeVertex {
            index,
            coord: point.coordinate.0,
            value,
        })
    };
    let mut triangles = Vec::with_capacity(2 * (grid.columns() - 1) * (grid.rows() - 1));
    for row in 0..grid.rows() - 1 {
        for col in 0..grid.columns() - 1 {
            let corners = (
                vertex(col, row),
                vertex(col + 1, row),
                vertex(col + 1, row + 1),
                vertex(col, row + 1),
            );
            if let (Some(sw), Some(se), Some(ne), Some(nw)) = corners {
                triangles.push([sw, se, ne]);
                triangles.push([sw, ne, nw]);
            }
        }
    }
    triangles
}
