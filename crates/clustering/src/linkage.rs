use super::*;
use agglo_core::*;
use agglo_records::*;

/// A complete merge tree over a dataset.
///
/// Produced by running the [`Engine`] all the way down to a single
/// cluster, so the tree agrees with the partition at every cut. Leaves
/// are nodes `0..n` (one per record, in input order); merge `t` creates
/// node `n + t`.
#[derive(Debug, Clone)]
pub struct Linkage {
    leaves: Vec<Id>,
    merges: Vec<Merge>,
}

impl Linkage {
    /// Centroid linkage over every record.
    pub fn centroid(records: Vec<Record>) -> Result<Self, ClusterError> {
        log::info!("{:<32}{:<32}", "calculating linkage", records.len());
        Engine::new(records)?.run(1).and_then(Self::try_from)
    }
    /// number of leaves
    pub fn n(&self) -> usize {
        self.leaves.len()
    }
    pub fn merges(&self) -> &[Merge] {
        &self.merges
    }
    /// Top of the tree, if there is one.
    pub fn root(&self) -> Option<usize> {
        match self.n() {
            0 => None,
            n => Some(n - 1 + self.merges.len()),
        }
    }
    /// record id of a leaf node
    pub fn leaf(&self, node: usize) -> Option<Id> {
        self.leaves.get(node).copied()
    }
    /// the merge that created an internal node
    pub fn join(&self, node: usize) -> Option<&Merge> {
        node.checked_sub(self.n()).and_then(|t| self.merges.get(t))
    }
    /// number of records under a node
    pub fn size(&self, node: usize) -> usize {
        match self.join(node) {
            Some(merge) => merge.size(),
            None => 1,
        }
    }
    /// Rows of `(left, right, distance, size)` with `left < right`.
    pub fn rows(&self) -> impl Iterator<Item = (usize, usize, Energy, usize)> + '_ {
        self.merges.iter().map(|m| {
            let (a, b) = m.children();
            (a.min(b), a.max(b), m.distance(), m.size())
        })
    }
}

/// Only a partition merged all the way down to one cluster forms a tree.
impl TryFrom<Partition> for Linkage {
    type Error = ClusterError;
    fn try_from(partition: Partition) -> Result<Self, Self::Error> {
        match partition.clusters().len() {
            1 => Ok(Self {
                leaves: partition.leaves().to_vec(),
                merges: partition.merges().to_vec(),
            }),
            n => Err(ClusterError::Unrooted(n)),
        }
    }
}
