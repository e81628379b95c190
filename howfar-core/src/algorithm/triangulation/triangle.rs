use geo::{Area, Coord, Intersects, Point};
use rstar::{RTreeObject, AABB};
use serde::{Deserialize, Serialize};

use super::{PlaneEquation, TinVertex};

/// a face of the TIN. vertices are stored counter-clockwise and the plane
/// through their travel times is computed once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub id: usize,
    pub vertices: [TinVertex; 3],
    plane: PlaneEquation,
}

impl Triangle {
    /// builds a triangle, reordering the vertices counter-clockwise. returns
    /// None if the vertices span no area.
    pub fn try_new(id: usize, vertices: [TinVertex; 3]) -> Option<Self> {
        let [a, b, c] = vertices;
        let vertices = match sign_area(a.coordinate.0, b.coordinate.0, c.coordinate.0) {
            s if s > 0.0 => [a, b, c],
            s if s < 0.0 => [a, c, b],
            _ => return None,
        };
        let plane = PlaneEquation::try_new(vertices.map(|v| (v.coordinate.0, v.value)))?;
        Some(Self {
            id,
            vertices,
            plane,
        })
    }

    /// planar interpolation of the vertex travel times at a location
    pub fn interpolate(&self, coord: Coord<f64>) -> f64 {
        self.plane.evaluate(coord)
    }

    /// true if the coordinate lies inside or on the boundary of this triangle
    pub fn contains(&self, coord: Coord<f64>) -> bool {
        self.to_geo().intersects(&coord)
    }

    pub fn to_geo(&self) -> geo::Triangle<f64> {
        let [a, b, c] = self.vertices;
        geo::Triangle::new(a.coordinate.0, b.coordinate.0, c.coordinate.0)
    }

    pub fn area(&self) -> f64 {
        self.to_geo().unsigned_area()
    }

    pub fn coords(&self) -> [Coord<f64>; 3] {
        self.vertices.map(|v| v.coordinate.0)
    }
}

impl RTreeObject for Triangle {
    type Envelope = AABB<Point<f64>>;

    fn envelope(&self) -> Self::Envelope {
        let [a, b, c] = self.coords();
        AABB::from_points(&[Point::from(a), Point::from(b), Point::from(c)])
    }
}

fn sign_area(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> f64 {
    crate::util::geo_utils::orientation(a, b, c)
}
