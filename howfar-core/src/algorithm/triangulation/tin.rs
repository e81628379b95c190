use geo::{Coord, Point, Rect};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{delaunay_ops, TinVertex, Triangle};
use crate::model::SamplePoint;
use crate::pipeline::IsochroneError;
use crate::util::geo_utils;

/// minimum number of distinct samples a TIN can be built from
pub const MIN_TIN_VERTICES: usize = 3;

/// a triangulated irregular network over the usable samples. triangles are
/// stored in an arena and a triangle's id is its index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tin {
    vertices: Vec<TinVertex>,
    triangles: Vec<Triangle>,
}

impl Tin {
    /// triangulates the usable samples, carrying each sample's travel time as
    /// a vertex attribute. samples at an already seen location are ignored.
    ///
    /// # Arguments
    ///
    /// * `samples` - measured samples; outliers and samples without a positive
    ///   travel time are skipped
    ///
    /// # Returns
    ///
    /// * the TIN, or an error if fewer than three usable samples exist or no
    ///   triangle with a non-zero area could be formed
    pub fn build(samples: &[SamplePoint]) -> Result<Tin, IsochroneError> {
        let mut seen = HashSet::new();
        let vertices = samples
            .iter()
            .filter_map(|s| {
                s.usable_value().map(|value| TinVertex {
                    coordinate: s.coordinate,
                    value,
                })
            })
            .filter(|v| seen.insert((v.coordinate.x().to_bits(), v.coordinate.y().to_bits())))
            .collect_vec();

        if vertices.len() < MIN_TIN_VERTICES {
            return Err(IsochroneError::InsufficientSamples {
                found: vertices.len(),
            });
        }

        let coords = vertices.iter().map(|v| v.coordinate.0).collect_vec();
        let faces = delaunay_ops::triangulate(&coords);
        let triangles = faces
            .iter()
            .filter_map(|[a, b, c]| {
                Triangle::try_new(0, [vertices[*a], vertices[*b], vertices[*c]])
            })
            .enumerate()
            .map(|(id, mut t)| {
                t.id = id;
                t
            })
            .collect_vec();

        if triangles.is_empty() {
            return Err(IsochroneError::DegenerateGeometry(format!(
                "no triangle with a non-zero area can be formed from {} samples",
                vertices.len()
            )));
        }
        log::debug!(
            "built TIN with {} triangles over {} vertices",
            triangles.len(),
            vertices.len()
        );
        Ok(Tin {
            vertices,
            triangles,
        })
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn vertices(&self) -> &[TinVertex] {
        &self.vertices
    }

    pub fn get(&self, id: usize) -> Option<&Triangle> {
        self.triangles.get(id)
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// bounding box of the TIN vertices
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        let points = self.vertices.iter().map(|v| v.coordinate).collect_vec();
        geo_utils::bounding_rect(&points)
    }

    /// total planar area of all triangles
    pub fn area(&self) -> f64 {
        self.triangles.iter().map(|t| t.area()).sum()
    }

    /// interpolated travel time at a location, if it falls within the TIN
    pub fn interpolate(&self, point: Point<f64>) -> Option<f64> {
        let coord: Coord<f64> = point.0;
        self.triangles
            .iter()
            .find(|t| t.contains(coord))
            .map(|t| t.interpolate(coord))
    }
}
