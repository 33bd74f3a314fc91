use super::*;
use agglo_core::*;

/// The outcome of an [`Engine`] run.
///
/// Holds the surviving clusters in insertion order together with the
/// bookkeeping collected along the way.
#[derive(Debug, Clone)]
pub struct Partition {
    clusters: Vec<Cluster>,
    history: Vec<usize>,
    merges: Vec<Merge>,
    leaves: Vec<Id>,
}

impl Partition {
    pub fn new(
        clusters: Vec<Cluster>,
        history: Vec<usize>,
        merges: Vec<Merge>,
        leaves: Vec<Id>,
    ) -> Self {
        Self {
            clusters,
            history,
            merges,
            leaves,
        }
    }
    /// surviving clusters, insertion order
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }
    /// size of the smaller cluster at each merge
    pub fn history(&self) -> &[usize] {
        &self.history
    }
    pub fn merges(&self) -> &[Merge] {
        &self.merges
    }
    /// record id of each dendrogram leaf node, by node index
    pub fn leaves(&self) -> &[Id] {
        &self.leaves
    }
    /// Up to `n` history entries preceding the final merge.
    pub fn tail(&self, n: usize) -> &[usize] {
        let end = self.history.len().saturating_sub(1);
        let start = end.saturating_sub(n);
        &self.history[start..end]
    }
    pub fn into_clusters(self) -> Vec<Cluster> {
        self.clusters
    }
}
