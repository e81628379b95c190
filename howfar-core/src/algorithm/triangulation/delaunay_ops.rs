//! Bowyer-Watson Delaunay triangulation over planar coordinates.
use geo::Coord;
use std::collections::HashMap;

use crate::util::geo_utils::orientation;

/// half-extent of the super triangle in normalized coordinates, where the
/// input fits within a unit square centered on the origin
const SUPER_TRIANGLE_SCALE: f64 = 100.0;
/// orientation tolerance used when filling boundary concavities
const HULL_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy)]
struct Face {
    v: [usize; 3],
    center: Coord<f64>,
    radius_sq: f64,
}

impl Face {
    fn new(v: [usize; 3], points: &[Coord<f64>]) -> Option<Face> {
        let (center, radius_sq) = circumcircle(points[v[0]], points[v[1]], points[v[2]])?;
        Some(Face {
            v,
            center,
            radius_sq,
        })
    }

    fn circumcircle_contains(&self, p: Coord<f64>) -> bool {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        dx * dx + dy * dy < self.radius_sq
    }

    fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.v;
        [(a, b), (b, c), (c, a)]
    }
}

/// triangulates a set of distinct points.
///
/// # Arguments
///
/// * `points` - planar coordinates, expected to contain no duplicates
///
/// # Returns
///
/// * counter-clockwise index triples into `points` that tile the points'
///   convex hull. empty if fewer than three points or all points are collinear.
pub fn triangulate(points: &[Coord<f64>]) -> Vec<[usize; 3]> {
    if points.len() < 3 {
        return vec![];
    }
    let normalized = match normalize(points) {
        Some(n) => n,
        None => return vec![],
    };

    let n = normalized.len();
    let mut working = normalized.clone();
    working.push(Coord {
        x: -SUPER_TRIANGLE_SCALE,
        y: -SUPER_TRIANGLE_SCALE,
    });
    working.push(Coord {
        x: SUPER_TRIANGLE_SCALE,
        y: -SUPER_TRIANGLE_SCALE,
    });
    working.push(Coord {
        x: 0.0,
        y: SUPER_TRIANGLE_SCALE,
    });

    let mut faces: Vec<Face> = Face::new([n, n + 1, n + 2], &working)
        .into_iter()
        .collect();

    for (idx, p) in normalized.iter().enumerate() {
        insert_point(idx, *p, &working, &mut faces);
    }

    let mut result = faces
        .iter()
        .filter(|f| f.v.iter().all(|v| *v < n))
        .filter(|f| {
            orientation(normalized[f.v[0]], normalized[f.v[1]], normalized[f.v[2]]) > 0.0
        })
        .map(|f| f.v)
        .collect::<Vec<_>>();

    fill_hull_concavities(&normalized, &mut result);
    result
}

fn insert_point(idx: usize, p: Coord<f64>, points: &[Coord<f64>], faces: &mut Vec<Face>) {
    let (bad, good): (Vec<Face>, Vec<Face>) = std::mem::take(faces)
        .into_iter()
        .partition(|f| f.circumcircle_contains(p));

    // cavity boundary: edges of bad faces not shared by another bad face
    let mut edge_counts: HashMap<(usize, usize), usize> = HashMap::new();
    for face in bad.iter() {
        for (a, b) in face.edges() {
            *edge_counts.entry((a.min(b), a.max(b))).or_default() += 1;
        }
    }

    let mut next_faces = good;
    for face in bad.iter() {
        for (a, b) in face.edges() {
            if edge_counts.get(&(a.min(b), a.max(b))) == Some(&1) {
                if let Some(f) = Face::new([a, b, idx], points) {
                    next_faces.push(f);
                }
            }
        }
    }
    *faces = next_faces;
}

/// grows the triangulation until its boundary is convex. faces adjacent to the
/// super triangle may be missing near the hull, which leaves notches that are
/// closed here by ear triangles.
fn fill_hull_concavities(points: &[Coord<f64>], faces: &mut Vec<[usize; 3]>) {
    if faces.is_empty() {
        return;
    }
    let mut boundary = match boundary_loop(faces) {
        Some(b) => b,
        None => {
            log::warn!("triangulation boundary is not a simple loop, skipping hull completion");
            return;
        }
    };

    let mut changed = true;
    while changed && boundary.len() > 3 {
        changed = false;
        let len = boundary.len();
        for i in 0..len {
            let prev = boundary[(i + len - 1) % len];
            let cur = boundary[i];
            let next = boundary[(i + 1) % len];
            let (a, b, c) = (points[prev], points[cur], points[next]);
            if orientation(a, b, c) >= -HULL_EPSILON {
                continue;
            }
            let blocked = boundary.iter().any(|v| {
                *v != prev && *v != cur && *v != next && strictly_inside(points[*v], a, c, b)
            });
            if blocked {
                continue;
            }
            faces.push([prev, next, cur]);
            boundary.remove(i);
            changed = true;
            break;
        }
    }
}

/// walks the directed boundary edges of a set of counter-clockwise faces.
/// returns None if the boundary pinches or does not form a single loop.
fn boundary_loop(faces: &[[usize; 3]]) -> Option<Vec<usize>> {
    let directed = faces
        .iter()
        .flat_map(|[a, b, c]| [(*a, *b), (*b, *c), (*c, *a)])
        .collect::<std::collections::HashSet<_>>();
    let mut next: HashMap<usize, usize> = HashMap::new();
    for (a, b) in directed.iter() {
        if !directed.contains(&(*b, *a)) && next.insert(*a, *b).is_some() {
            return None;
        }
    }
    let start = *next.keys().min()?;
    let mut ring = vec![start];
    let mut cur = *next.get(&start)?;
    while cur != start {
        if ring.len() > next.len() {
            return None;
        }
        ring.push(cur);
        cur = *next.get(&cur)?;
    }
    if ring.len() == next.len() {
        Some(ring)
    } else {
        None
    }
}

fn strictly_inside(p: Coord<f64>, a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> bool {
    orientation(a, b, p) > 0.0 && orientation(b, c, p) > 0.0 && orientation(c, a, p) > 0.0
}

/// circumcenter and squared circumradius, None for collinear points
fn circumcircle(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> Option<(Coord<f64>, f64)> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d == 0.0 {
        return None;
    }
    let a2 = a.x * a.x + a.y * a.y;
    let b2 = b.x * b.x + b.y * b.y;
    let c2 = c.x * c.x + c.y * c.y;
    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
    let center = Coord { x: ux, y: uy };
    let radius_sq = (a.x - ux).powi(2) + (a.y - uy).powi(2);
    Some((center, radius_sq))
}

/// maps points into a unit square centered on the origin, preserving aspect ratio
fn normalize(points: &[Coord<f64>]) -> Option<Vec<Coord<f64>>> {
    let (mut xmin, mut ymin) = (f64::INFINITY, f64::INFINITY);
    let (mut xmax, mut ymax) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points.iter() {
        xmin = xmin.min(p.x);
        xmax = xmax.max(p.x);
        ymin = ymin.min(p.y);
        ymax = ymax.max(p.y);
    }
    let extent = (xmax - xmin).max(ymax - ymin);
    if !extent.is_finite() || extent <= 0.0 {
        return None;
    }
    let cx = (xmin + xmax) / 2.0;
    let cy = (ymin + ymax) / 2.0;
    Some(
        points
            .iter()
            .map(|p| Coord {
                x: (p.x - cx) / extent,
                y: (p.y - cy) / extent,
            })
            .collect(),
    )
}
