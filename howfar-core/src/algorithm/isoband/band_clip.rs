use geo::Coord;
use itertools::Itertools;

use super::NodeKey;

/// a corner of a lattice triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeVertex {
    pub index: usize,
    pub coord: Coord<f64>,
    pub value: f64,
}

/// a threshold along with its position in the ordered list of breakpoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandLevel {
    pub index: usize,
    pub value: f64,
}

/// a vertex of a clipped band piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub key: NodeKey,
    pub coord: Coord<f64>,
    pub value: f64,
}

impl From<&LatticeVertex> for Node {
    fn from(v: &LatticeVertex) -> Self {
        Node {
            key: NodeKey::Corner(v.index),
            coord: v.coord,
            value: v.value,
        }
    }
}

/// clips a counter-clockwise lattice triangle to the part where the linearly
/// interpolated value lies in `[lower, upper)`. the band region of a linear
/// field over a triangle is convex and its vertices lie on the triangle
/// boundary, so two half-plane clips are exact.
///
/// # Returns
///
/// * the counter-clockwise vertices of the clipped piece, empty if the piece
///   has no area
pub fn clip_triangle(
    triangle: &[LatticeVertex; 3],
    lower: BandLevel,
    upper: BandLevel,
) -> Vec<Node> {
    let values = triangle.map(|v| v.value);
    if values.iter().all(|v| *v < lower.value) || values.iter().all(|v| *v >= upper.value) {
        return vec![];
    }
    let corners = triangle.iter().map(Node::from).collect_vec();
    if values.iter().all(|v| lower.value <= *v && *v < upper.value) {
        return corners;
    }
    let above_lower = clip(&corners, triangle, lower, |v| v >= lower.value);
    let piece = clip(&above_lower, triangle, upper, |v| v < upper.value);
    dedup_cyclic(piece)
}

/// one Sutherland-Hodgman pass against the half plane where `inside` holds
fn clip(
    polygon: &[Node],
    triangle: &[LatticeVertex; 3],
    level: BandLevel,
    inside: impl Fn(f64) -> bool,
) -> Vec<Node> {
    if polygon.is_empty() {
        return vec![];
    }
    let mut result = Vec::with_capacity(polygon.len() + 2);
    for (p, q) in polygon.iter().circular_tuple_windows() {
        let p_in = inside(p.value);
        if p_in {
            result.push(*p);
        }
        if p_in != inside(q.value) {
            if let Some(node) = crossing(p, q, triangle, level) {
                result.push(node);
            }
        }
    }
    result
}

/// the crossing of `level` along the triangle edge carrying the segment p-q.
/// the position is computed from the edge's corner values in lattice order so
/// every triangle sharing the edge produces the same vertex.
fn crossing(p: &Node, q: &Node, triangle: &[LatticeVertex; 3], level: BandLevel) -> Option<Node> {
    let (p0, p1) = p.key.support();
    let (q0, q1) = q.key.support();
    let mut support = [Some(p0), p1, Some(q0), q1]
        .into_iter()
        .flatten()
        .collect_vec();
    support.sort_unstable();
    support.dedup();
    let (from, to) = match support.as_slice() {
        [a, b] => (*a, *b),
        _ => return None,
    };
    let a = triangle.iter().find(|v| v.index == from)?;
    let b = triangle.iter().find(|v| v.index == to)?;
    let t = (level.value - a.value) / (b.value - a.value);
    let node = if !(t > 0.0) {
        Node {
            key: NodeKey::Corner(a.index),
            coord: a.coord,
            value: level.value,
        }
    } else if !(t < 1.0) {
        Node {
            key: NodeKey::Corner(b.index),
            coord: b.coord,
            value: level.value,
        }
    } else {
        Node {
            key: NodeKey::Crossing {
                from,
                to,
                level: level.index,
            },
            coord: Coord {
                x: a.coord.x + t * (b.coord.x - a.coord.x),
                y: a.coord.y + t * (b.coord.y - a.coord.y),
            },
            value: level.value,
        }
    };
    Some(node)
}

/// removes repeated keys between neighbors (including last and first)
fn dedup_cyclic(mut nodes: Vec<Node>) -> Vec<Node> {
    nodes.dedup_by_key(|n| n.key);
    while nodes.len() > 1 && nodes.first().map(|n| n.key) == nodes.last().map(|n| n.key) {
        nodes.pop();
    }
    if nodes.len() < 3 {
        vec![]
    } else {
        nodes
    }
}
