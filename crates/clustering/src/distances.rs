use super::*;
use agglo_core::Energy;

/// Dense triangular cache of centroid distances between arena slots.
///
/// Stores the lower triangle of the symmetric distance matrix (excluding
/// the diagonal) as a flat vector indexed by [`Pair::triangular()`].
/// Only the absorber's row goes stale after a merge, so the engine
/// rewrites that row and reads everything else back unchanged.
#[derive(Debug, Clone)]
pub struct Distances {
    values: Vec<Energy>,
}

impl Distances {
    /// Cache for `n` slots, every entry unset.
    pub fn new(n: usize) -> Self {
        Self {
            values: vec![Energy::NAN; Pair::count(n)],
        }
    }
    pub fn get(&self, pair: Pair) -> Energy {
        self.values[pair.triangular()]
    }
    pub fn set(&mut self, pair: Pair, value: Energy) {
        self.values[pair.triangular()] = value;
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
