use geo::{Destination, Haversine, Point};
use uom::si::f64::Length;
use uom::si::length::{kilometer, meter};

use crate::util::geo_utils;

/// number of coordinates in each closed sample ring, including the closing repeat
pub const RING_STEPS: usize = 12;
/// rotation applied to every even-numbered ring so neighboring rings interleave
pub const ALTERNATE_RING_ROTATION_DEGREES: f64 = 15.0;
/// decimal places kept on coordinates sent to the routing service
pub const COORDINATE_PRECISION: i32 = 6;

/// generates rings of candidate sample locations around an origin. rings are
/// placed on a cubic easing of the reach, dense near the origin and sparse
/// toward the edge of the reachable area.
#[derive(Debug, Clone)]
pub struct SampleGenerator {
    origin: Point<f64>,
    reach: Length,
    detail: u32,
}

impl SampleGenerator {
    pub fn new(origin: Point<f64>, reach: Length, detail: u32) -> Self {
        Self {
            origin,
            reach,
            detail,
        }
    }

    pub fn ring_count(&self) -> u32 {
        self.detail.saturating_mul(2)
    }

    /// radius of the i-th ring (1-based), `reach * 10 i³ / (10 (2d)³)`
    pub fn ring_radius(&self, ring: u32) -> Length {
        let n = self.ring_count() as f64;
        let i = ring as f64;
        let km = self.reach.get::<kilometer>() * (10.0 * i.powi(3)) / (10.0 * n.powi(3));
        Length::new::<kilometer>(km)
    }

    /// produces the ordered candidate coordinates, `2d * (RING_STEPS - 1)` in total.
    /// the order is significant, distance matrix results are paired back by position.
    pub fn generate(&self) -> Vec<Point<f64>> {
        (1..=self.ring_count())
            .flat_map(|i| {
                let rotation = if i % 2 == 0 {
                    ALTERNATE_RING_ROTATION_DEGREES
                } else {
                    0.0
                };
                let ring = self.ring(self.ring_radius(i), rotation);
                ring.into_iter().skip(1)
            })
            .map(|p| geo_utils::unwrap_longitude(p, self.origin.x()))
            .map(|p| geo_utils::round_coordinate(p, COORDINATE_PRECISION))
            .collect()
    }

    /// a closed ring of RING_STEPS coordinates around the origin; the last
    /// coordinate repeats the first.
    fn ring(&self, radius: Length, rotation: f64) -> Vec<Point<f64>> {
        let meters = radius.get::<meter>();
        let distinct = RING_STEPS - 1;
        let mut ring = (0..distinct)
            .map(|j| {
                let bearing = (j as f64 * -360.0) / distinct as f64 + rotation;
                Haversine.destination(self.origin, bearing, meters)
            })
            .collect::<Vec<_>>();
        if let Some(first) = ring.first().copied() {
            ring.push(first);
        }
        ring
    }
}
