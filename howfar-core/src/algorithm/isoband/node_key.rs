/// identifies a contour vertex by lattice topology rather than by position,
/// so that neighboring cells computing the same vertex agree exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKey {
    /// a grid point, by lattice index
    Corner(usize),
    /// the point where threshold `level` crosses the lattice edge between
    /// grid points `from` and `to`, with `from < to`
    Crossing {
        from: usize,
        to: usize,
        level: usize,
    },
}

impl NodeKey {
    /// the lattice indices of the grid points this vertex lies on or between
    pub fn support(&self) -> (usize, Option<usize>) {
        match self {
            NodeKey::Corner(idx) => (*idx, None),
            NodeKey::Crossing { from, to, .. } => (*from, Some(*to)),
        }
    }
}
