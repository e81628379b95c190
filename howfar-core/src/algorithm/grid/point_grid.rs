use geo::{coord, Point, Rect};
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;
use uom::si::length::kilometer;

use crate::model::GridPoint;
use crate::pipeline::IsochroneError;
use crate::util::geo_utils;

pub const GRID_CELL_SIZE_FLOOR_KM: f64 = 0.1;
pub const GRID_CELL_SIZE_REACH_DIVISOR: f64 = 25.0;

/// grid spacing for a given reach, `max(0.1 km, reach / 25)`
pub fn cell_size(reach: Length) -> Length {
    let km = (reach.get::<kilometer>() / GRID_CELL_SIZE_REACH_DIVISOR).max(GRID_CELL_SIZE_FLOOR_KM);
    Length::new::<kilometer>(km)
}

/// a regular lattice of grid points stored row-major, row 0 being the
/// southernmost row and column 0 the westernmost column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointGrid {
    columns: usize,
    rows: usize,
    points: Vec<GridPoint>,
}

impl PointGrid {
    /// lays a lattice with the given spacing over a bounding box. the spacing
    /// is converted to degrees along the southern edge and the western edge of
    /// the box, and the lattice is centered within the box.
    ///
    /// # Arguments
    ///
    /// * `extent` - the area to cover, in WGS84 degrees
    /// * `cell_size` - distance between neighboring lattice points
    ///
    /// # Returns
    ///
    /// * the grid, or an error if the extent or the cell size is empty
    pub fn new(extent: Rect<f64>, cell_size: Length) -> Result<PointGrid, IsochroneError> {
        if !geo_utils::rect_has_area(&extent) {
            return Err(IsochroneError::DegenerateGeometry(format!(
                "grid extent {:?} has zero area",
                extent
            )));
        }
        let cell_km = cell_size.get::<kilometer>();
        if !cell_km.is_finite() || cell_km <= 0.0 {
            return Err(IsochroneError::DegenerateGeometry(format!(
                "grid cell size must be strictly positive, found {cell_km} km"
            )));
        }

        let (west, south) = extent.min().x_y();
        let (east, north) = extent.max().x_y();
        let width = east - west;
        let height = north - south;
        let width_km = geo_utils::haversine_km(Point::new(west, south), Point::new(east, south));
        let height_km = geo_utils::haversine_km(Point::new(west, south), Point::new(west, north));
        if width_km <= 0.0 || height_km <= 0.0 {
            return Err(IsochroneError::DegenerateGeometry(format!(
                "grid extent {:?} has zero area",
                extent
            )));
        }

        let cell_width = cell_km / width_km * width;
        let cell_height = cell_km / height_km * height;
        let column_cells = (width / cell_width).floor() as usize;
        let row_cells = (height / cell_height).floor() as usize;
        let delta_x = (width - column_cells as f64 * cell_width) / 2.0;
        let delta_y = (height - row_cells as f64 * cell_height) / 2.0;

        let columns = column_cells + 1;
        let rows = row_cells + 1;
        let mut points = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            for col in 0..columns {
                let x = west + delta_x + col as f64 * cell_width;
                let y = south + delta_y + row as f64 * cell_height;
                points.push(GridPoint::new(Point::new(x, y)));
            }
        }
        log::debug!(
            "created {columns} x {rows} point grid with {cell_km} km spacing over {:?}",
            extent
        );
        Ok(PointGrid {
            columns,
            rows,
            points,
        })
    }

    /// number of lattice points along the x axis
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// number of lattice points along the y axis
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.columns + col
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&GridPoint> {
        if col < self.columns && row < self.rows {
            self.points.get(self.index(col, row))
        } else {
            None
        }
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [GridPoint] {
        &mut self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// the rectangle spanned by the lattice points
    pub fn extent(&self) -> Option<Rect<f64>> {
        let first = self.points.first()?.coordinate;
        let last = self.points.last()?.coordinate;
        Some(Rect::new(
            coord! { x: first.x(), y: first.y() },
            coord! { x: last.x(), y: last.y() },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent() -> Rect<f64> {
        Rect::new(coord! { x: 4.80, y: 52.30 }, coord! { x: 5.00, y: 52.45 })
    }

    #[test]
    fn test_cell_size() {
        let small = cell_size(Length::new::<kilometer>(1.0));
        assert!((small.get::<kilometer>() - 0.1).abs() < 1e-12);
        let large = cell_size(Length::new::<kilometer>(50.0));
        assert!((large.get::<kilometer>() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_grid_spacing_and_centering() {
        let grid = PointGrid::new(extent(), Length::new::<kilometer>(1.0)).unwrap();
        // ~13.6 km wide and ~16.7 km tall at this latitude
        assert_eq!(grid.columns(), 14);
        assert_eq!(grid.rows(), 17);
        assert_eq!(grid.len(), 14 * 17);

        let sw = grid.get(0, 0).unwrap().coordinate;
        let ne = grid.get(grid.columns() - 1, grid.rows() - 1).unwrap().coordinate;
        let west_margin = sw.x() - 4.80;
        let east_margin = 5.00 - ne.x();
        assert!((west_margin - east_margin).abs() < 1e-9);
        assert!(west_margin >= 0.0);

        let step = geo_utils::haversine_km(
            grid.get(0, 0).unwrap().coordinate,
            grid.get(0, 1).unwrap().coordinate,
        );
        assert!((step - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_row_major_layout() {
        let grid = PointGrid::new(extent(), Length::new::<kilometer>(2.0)).unwrap();
        let a = grid.get(1, 0).unwrap().coordinate;
        let b = grid.get(0, 1).unwrap().coordinate;
        assert_eq!(grid.points()[1].coordinate, a);
        assert_eq!(grid.points()[grid.columns()].coordinate, b);
        assert!(a.x() > b.x());
        assert!(b.y() > a.y());
        assert!(grid.get(grid.columns(), 0).is_none());
    }

    #[test]
    fn test_zero_area_extent_is_degenerate() {
        let flat = Rect::new(coord! { x: 4.80, y: 52.30 }, coord! { x: 5.00, y: 52.30 });
        match PointGrid::new(flat, Length::new::<kilometer>(1.0)) {
            Err(IsochroneError::DegenerateGeometry(_)) => {}
            other => panic!("expected degenerate geometry, found {other:?}"),
        }
    }
}
