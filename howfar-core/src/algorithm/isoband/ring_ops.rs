use geo::{Area, Coord, Intersects, LineString, MultiPolygon, Polygon};
use itertools::Itertools;
use std::collections::{BTreeMap, HashMap, HashSet};

use super::{Node, NodeKey};

/// merges the band pieces of one isoband into polygons. edges shared by two
/// pieces appear once in each direction and cancel, the remaining directed
/// edges form the band boundary.
pub fn merge_pieces(pieces: &[Vec<Node>]) -> MultiPolygon<f64> {
    let mut coords: HashMap<NodeKey, Coord<f64>> = HashMap::new();
    let mut edges: HashSet<(NodeKey, NodeKey)> = HashSet::new();
    for piece in pieces.iter() {
        for (p, q) in piece.iter().circular_tuple_windows() {
            coords.insert(p.key, p.coord);
            if !edges.remove(&(q.key, p.key)) {
                edges.insert((p.key, q.key));
            }
        }
    }
    let rings = chain_rings(&edges)
        .into_iter()
        .filter_map(|keys| {
            let ring = keys
                .iter()
                .map(|k| coords.get(k).copied())
                .collect::<Option<Vec<_>>>()?;
            Some(LineString::from(ring))
        })
        .collect_vec();
    assemble_polygons(rings)
}

/// follows directed boundary edges into closed rings. when a walk revisits a
/// node the loop it closed is split off, so every ring is free of repeated
/// vertices.
fn chain_rings(edges: &HashSet<(NodeKey, NodeKey)>) -> Vec<Vec<NodeKey>> {
    let mut outgoing: BTreeMap<NodeKey, Vec<NodeKey>> = BTreeMap::new();
    for (from, to) in edges.iter() {
        outgoing.entry(*from).or_default().push(*to);
    }
    for targets in outgoing.values_mut() {
        targets.sort_unstable_by(|a, b| b.cmp(a));
    }

    let mut rings = vec![];
    loop {
        let start = match outgoing.iter().find(|(_, t)| !t.is_empty()) {
            Some((k, _)) => *k,
            None => break,
        };
        let mut path = vec![start];
        let mut position: HashMap<NodeKey, usize> = HashMap::from([(start, 0)]);
        let mut current = start;
        while !path.is_empty() {
            let next = match outgoing.get_mut(&current).and_then(|t| t.pop()) {
                Some(n) => n,
                None => {
                    log::warn!(
                        "isoband boundary is not closed at {current:?}, dropping {} vertices",
                        path.len()
                    );
                    break;
                }
            };
            match position.get(&next).copied() {
                Some(pos) => {
                    let ring = path.split_off(pos);
                    for k in ring.iter() {
                        position.remove(k);
                    }
                    rings.push(ring);
                    if !path.is_empty() {
                        position.insert(next, path.len());
                        path.push(next);
                    }
                }
                None => {
                    position.insert(next, path.len());
                    path.push(next);
                }
            }
            current = next;
        }
    }
    rings.retain(|r| r.len() >= 3);
    rings
}

/// sorts rings into exteriors (counter-clockwise) and holes (clockwise), each
/// hole going to the smallest exterior containing all of its vertices
fn assemble_polygons(rings: Vec<LineString<f64>>) -> MultiPolygon<f64> {
    let mut exteriors = vec![];
    let mut holes = vec![];
    for mut ring in rings.into_iter() {
        ring.close();
        let area = Polygon::new(ring.clone(), vec![]).signed_area();
        if area > 0.0 {
            exteriors.push((area, ring, vec![]));
        } else if area < 0.0 {
            holes.push(ring);
        }
    }

    for hole in holes.into_iter() {
        let owner = exteriors
            .iter()
            .enumerate()
            .filter(|(_, (_, exterior, _))| {
                let candidate = Polygon::new(exterior.clone(), vec![]);
                hole.coords().all(|c| candidate.intersects(c))
            })
            .min_by(|(_, (a, _, _)), (_, (b, _, _))| a.total_cmp(b))
            .map(|(idx, _)| idx);
        match owner {
            Some(idx) => exteriors[idx].2.push(hole),
            None => log::warn!("isoband hole with {} vertices has no enclosing ring", hole.0.len()),
        }
    }

    MultiPolygon::new(
        exteriors
            .into_iter()
            .map(|(_, exterior, interiors)| Polygon::new(exterior, interiors))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(idx: usize, x: f64, y: f64) -> Node {
        Node {
            key: NodeKey::Corner(idx),
            coord: Coord { x, y },
            value: 0.0,
        }
    }

    /// unit squares on a 4 x 4 lattice, lattice index = row * 4 + col
    fn square(col: usize, row: usize) -> Vec<Node> {
        let idx = |c: usize, r: usize| r * 4 + c;
        vec![
            node(idx(col, row), col as f64, row as f64),
            node(idx(col + 1, row), col as f64 + 1.0, row as f64),
            node(idx(col + 1, row + 1), col as f64 + 1.0, row as f64 + 1.0),
            node(idx(col, row + 1), col as f64, row as f64 + 1.0),
        ]
    }

    #[test]
    fn test_adjacent_pieces_merge() {
        let merged = merge_pieces(&[square(0, 0), square(1, 0)]);
        assert_eq!(merged.0.len(), 1);
        assert!((merged.unsigned_area() - 2.0).abs() < 1e-12);
        assert!(merged.0[0].interiors().is_empty());
    }

    #[test]
    fn test_ring_of_pieces_has_hole() {
        let pieces = (0..3)
            .cartesian_product(0..3)
            .filter(|(c, r)| !(*c == 1 && *r == 1))
            .map(|(c, r)| square(c, r))
            .collect_vec();
        let merged = merge_pieces(&pieces);
        assert_eq!(merged.0.len(), 1);
        assert_eq!(merged.0[0].interiors().len(), 1);
        assert!((merged.unsigned_area() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_pieces_stay_separate() {
        let merged = merge_pieces(&[square(0, 0), square(2, 2)]);
        assert_eq!(merged.0.len(), 2);
        assert!((merged.unsigned_area() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_pieces_touching_at_a_corner_form_simple_rings() {
        let merged = merge_pieces(&[square(0, 0), square(1, 1)]);
        assert_eq!(merged.0.len(), 2);
        for polygon in merged.0.iter() {
            // closed ring of four distinct vertices
            assert_eq!(polygon.exterior().0.len(), 5);
        }
    }
}
