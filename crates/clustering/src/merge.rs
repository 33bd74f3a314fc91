use agglo_core::*;

/// One step of agglomeration, as recorded by the [`crate::Engine`].
///
/// Node numbering follows the usual linkage convention: the `n` input
/// records are nodes `0..n`, and the cluster produced by merge `t` is
/// node `n + t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merge {
    /// label of the surviving cluster
    absorber: Id,
    /// label of the cluster folded into it
    absorbed: Id,
    /// dendrogram nodes of (absorber, absorbed) before the merge
    children: (usize, usize),
    /// centroid distance at which the pair was joined
    distance: Energy,
    /// size of the merged cluster
    size: usize,
    /// size of the smaller of the two clusters before the merge
    smaller: usize,
}

impl Merge {
    pub fn new(
        absorber: Id,
        absorbed: Id,
        children: (usize, usize),
        distance: Energy,
        size: usize,
        smaller: usize,
    ) -> Self {
        Self {
            absorber,
            absorbed,
            children,
            distance,
            size,
            smaller,
        }
    }
    pub fn absorber(&self) -> Id {
        self.absorber
    }
    pub fn absorbed(&self) -> Id {
        self.absorbed
    }
    pub fn children(&self) -> (usize, usize) {
        self.children
    }
    pub fn distance(&self) -> Energy {
        self.distance
    }
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn smaller(&self) -> usize {
        self.smaller
    }
}

impl std::fmt::Display for Merge {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:>6} <- {:<6} d={:<10.4} size={:<6} smaller={}",
            self.absorber, self.absorbed, self.distance, self.size, self.smaller
        )
    }
}
