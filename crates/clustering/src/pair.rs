/// An unordered pair of arena slots.
///
/// Stored with the larger slot first so that `(i, j)` and `(j, i)`
/// address the same entry of a [`crate::Distances`] triangle.
#[derive(Default, Copy, Clone, Hash, Eq, PartialEq, PartialOrd, Ord, Debug)]
pub struct Pair(usize, usize);

impl Pair {
    pub fn new(a: usize, b: usize) -> Self {
        debug_assert!(a != b, "pair of identical slots");
        Self(a.max(b), a.min(b))
    }
    /// Index into the strict lower triangle, row-major.
    pub fn triangular(&self) -> usize {
        self.0 * (self.0 - 1) / 2 + self.1
    }
    /// Number of unordered pairs among `n` slots.
    pub const fn count(n: usize) -> usize {
        n * n.saturating_sub(1) / 2
    }
}

impl From<(usize, usize)> for Pair {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}
