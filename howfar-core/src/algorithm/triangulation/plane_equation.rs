use geo::Coord;
use serde::{Deserialize, Serialize};

/// the plane `z = z0 + a (x - x0) + b (y - y0)` through three points, anchored
/// at the first of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneEquation {
    anchor: Coord<f64>,
    z0: f64,
    a: f64,
    b: f64,
}

impl PlaneEquation {
    /// fits the plane through three (x, y, z) points. returns None when the
    /// points are collinear in the xy plane.
    pub fn try_new(points: [(Coord<f64>, f64); 3]) -> Option<Self> {
        let [(p1, z1), (p2, z2), (p3, z3)] = points;
        let (ux, uy, uz) = (p2.x - p1.x, p2.y - p1.y, z2 - z1);
        let (vx, vy, vz) = (p3.x - p1.x, p3.y - p1.y, z3 - z1);
        let nx = uy * vz - uz * vy;
        let ny = uz * vx - ux * vz;
        let nz = ux * vy - uy * vx;
        if nz == 0.0 || !nz.is_finite() {
            return None;
        }
        Some(Self {
            anchor: p1,
            z0: z1,
            a: -nx / nz,
            b: -ny / nz,
        })
    }

    pub fn evaluate(&self, coord: Coord<f64>) -> f64 {
        self.z0 + self.a * (coord.x - self.anchor.x) + self.b * (coord.y - self.anchor.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    #[test]
    fn test_plane_through_points() {
        // z = 2x + 3y + 1
        let f = |x: f64, y: f64| 2.0 * x + 3.0 * y + 1.0;
        let pts = [
            (coord! { x: 0.0, y: 0.0 }, f(0.0, 0.0)),
            (coord! { x: 1.0, y: 0.0 }, f(1.0, 0.0)),
            (coord! { x: 0.0, y: 1.0 }, f(0.0, 1.0)),
        ];
        let plane = PlaneEquation::try_new(pts).unwrap();
        for (c, z) in pts {
            assert!((plane.evaluate(c) - z).abs() < 1e-12);
        }
        assert!((plane.evaluate(coord! { x: 0.25, y: 0.5 }) - f(0.25, 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_collinear_points_have_no_plane() {
        let pts = [
            (coord! { x: 0.0, y: 0.0 }, 1.0),
            (coord! { x: 1.0, y: 1.0 }, 2.0),
            (coord! { x: 2.0, y: 2.0 }, 3.0),
        ];
        assert!(PlaneEquation::try_new(pts).is_none());
    }
}
