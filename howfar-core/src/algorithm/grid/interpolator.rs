use uom::si::f64::Time;
use uom::si::time::second;

use super::PointGrid;
use crate::algorithm::triangulation::Tin;

/// grid points outside the TIN are assigned this multiple of the travel time
/// budget so no band ever classifies them as reachable
pub const UNREACHABLE_PENALTY_FACTOR: f64 = 2.0;

/// the value assigned to grid points outside the TIN
pub fn unreachable_penalty(budget: Time) -> f64 {
    UNREACHABLE_PENALTY_FACTOR * budget.get::<second>()
}

/// assigns each grid point its travel time by evaluating the plane of its
/// tagged triangle. untagged points receive the unreachable penalty.
pub fn interpolate(grid: &mut PointGrid, tin: &Tin, budget: Time) {
    let penalty = unreachable_penalty(budget);
    for grid_point in grid.points_mut().iter_mut() {
        let value = grid_point
            .triangle
            .and_then(|id| tin.get(id))
            .map(|t| t.interpolate(grid_point.coordinate.0))
            .unwrap_or(penalty);
        grid_point.value = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::grid::tagger;
    use crate::model::SamplePoint;
    use geo::{coord, Point, Rect};
    use uom::si::f64::Length;
    use uom::si::length::kilometer;

    fn sample(x: f64, y: f64, value: f64) -> SamplePoint {
        SamplePoint {
            coordinate: Point::new(x, y),
            value: Some(value),
            outlier: false,
            displacement_km: Some(0.0),
        }
    }

    #[test]
    fn test_interpolate_linear_field() {
        // samples of z = 1000 x + 500 y are reproduced exactly inside the TIN
        let f = |x: f64, y: f64| 1000.0 * (x - 4.8) + 500.0 * (y - 52.3) + 10.0;
        let samples = vec![
            sample(4.80, 52.30, f(4.80, 52.30)),
            sample(4.90, 52.30, f(4.90, 52.30)),
            sample(4.90, 52.36, f(4.90, 52.36)),
            sample(4.80, 52.36, f(4.80, 52.36)),
            sample(4.85, 52.33, f(4.85, 52.33)),
        ];
        let tin = Tin::build(&samples).unwrap();
        let extent = Rect::new(coord! { x: 4.80, y: 52.30 }, coord! { x: 4.90, y: 52.36 });
        let mut grid = PointGrid::new(extent, Length::new::<kilometer>(0.5)).unwrap();
        tagger::tag(&mut grid, &tin);
        interpolate(&mut grid, &tin, Time::new::<second>(900.0));
        for p in grid.points() {
            let (x, y) = p.coordinate.x_y();
            let found = p.value.unwrap();
            assert!((found - f(x, y)).abs() < 1e-6, "{found} != {}", f(x, y));
        }
    }

    #[test]
    fn test_untagged_points_get_penalty() {
        let samples = vec![
            sample(4.80, 52.30, 10.0),
            sample(4.90, 52.30, 20.0),
            sample(4.80, 52.36, 30.0),
        ];
        let tin = Tin::build(&samples).unwrap();
        let extent = Rect::new(coord! { x: 4.80, y: 52.30 }, coord! { x: 4.90, y: 52.36 });
        let mut grid = PointGrid::new(extent, Length::new::<kilometer>(0.5)).unwrap();
        tagger::tag(&mut grid, &tin);
        interpolate(&mut grid, &tin, Time::new::<second>(900.0));
        for p in grid.points() {
            let value = p.value.unwrap();
            match p.triangle {
                Some(_) => assert!(value <= 30.0 + 1e-9),
                None => assert_eq!(value, 1800.0),
            }
        }
    }
}
