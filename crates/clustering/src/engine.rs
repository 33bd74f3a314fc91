use super::*;
use agglo_core::*;
use agglo_records::*;

/// Centroid-linkage agglomerative clustering.
///
/// Starts from one singleton cluster per record and repeatedly merges
/// the two clusters whose centroids are nearest, until the requested
/// number of clusters remains.
///
/// # Selection policy
///
/// - Pairs `(i, j)`, `i < j`, are scanned in insertion order and the
///   strictly smallest distance wins. On exact ties the first pair found
///   is kept.
/// - Of the chosen pair, the cluster with the smaller-or-equal label
///   absorbs the other. Size and distance play no part.
///
/// # Storage
///
/// Clusters live in an arena of stable slots. The active set holds slot
/// indices in insertion order, so removing an absorbed cluster targets
/// exactly the slot chosen by the scan. Pairwise distances are cached per
/// slot pair and only the absorber's row is recomputed after a merge,
/// which leaves the selection bit-for-bit identical to a full rescan.
///
/// # Complexity
///
/// O(k²) per merge for the scan over `k` active clusters, O(n³) overall.
pub struct Engine {
    /// every cluster ever created, vacated once absorbed
    arena: Vec<Option<Cluster>>,
    /// record id of the singleton seeded in each slot
    leaves: Vec<Id>,
    /// current dendrogram node of each slot
    nodes: Vec<usize>,
    /// live slots, insertion order
    active: Vec<usize>,
    /// centroid distances between slots
    distances: Distances,
    /// smaller cluster size at each merge
    history: Vec<usize>,
    merges: Vec<Merge>,
}

impl Engine {
    /// One singleton cluster per record, in record order.
    ///
    /// Fails with [`ClusterError::DimensionMismatch`] if the records
    /// disagree on attribute count.
    pub fn new(records: Vec<Record>) -> Result<Self, ClusterError> {
        let n = records.len();
        let leaves = records.iter().map(Record::id).collect::<Vec<_>>();
        let arena = records
            .into_iter()
            .map(Cluster::from)
            .map(Some)
            .collect::<Vec<_>>();
        let mut engine = Self {
            arena,
            leaves,
            nodes: (0..n).collect(),
            active: (0..n).collect(),
            distances: Distances::new(n),
            history: Vec::with_capacity(n),
            merges: Vec::with_capacity(n),
        };
        for i in 0..n {
            for j in 0..i {
                engine.measure(i, j)?;
            }
        }
        Ok(engine)
    }

    /// number of active clusters
    pub fn len(&self) -> usize {
        self.active.len()
    }
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
    /// active clusters in insertion order
    pub fn clusters(&self) -> impl Iterator<Item = &Cluster> + '_ {
        self.active
            .iter()
            .filter_map(|&slot| self.arena[slot].as_ref())
    }
    /// smaller cluster size at each merge so far
    pub fn history(&self) -> &[usize] {
        &self.history
    }
    pub fn merges(&self) -> &[Merge] {
        &self.merges
    }

    /// Merges until `target` clusters remain and hands back the result.
    ///
    /// See [`Engine::merge_to`] for the failure cases.
    pub fn run(mut self, target: usize) -> Result<Partition, ClusterError> {
        self.merge_to(target)?;
        self.partition()
    }

    /// Merges until `target` clusters remain, keeping the engine alive.
    ///
    /// Fails before any merge if `target` is zero or exceeds the number
    /// of clusters available. Checks for a requested interrupt between
    /// merges and aborts with [`ClusterError::Interrupted`] if one is seen.
    /// Can be called again with a smaller target to keep merging.
    pub fn merge_to(&mut self, target: usize) -> Result<(), ClusterError> {
        if target == 0 {
            return Err(ClusterError::InvalidTarget);
        }
        if target > self.len() {
            return Err(ClusterError::insufficient_data(target, self.len()));
        }
        log::info!(
            "{:<32}{:<32}",
            "clustering",
            format!("{} -> {} ({})", self.len(), target, LINKAGE_METHOD)
        );
        while self.len() > target {
            if interrupted() {
                log::warn!("interrupted with {} clusters remaining", self.len());
                return Err(ClusterError::Interrupted);
            }
            self.step()?;
        }
        log::info!("{:<32}{:<32}", "clustering complete", self.merges.len());
        Ok(())
    }

    /// Copy of the current state as a [`Partition`].
    pub fn snapshot(&self) -> Result<Partition, ClusterError> {
        let clusters = self
            .active
            .iter()
            .map(|&slot| self.cluster(slot).cloned())
            .collect::<Result<Vec<Cluster>, ClusterError>>()?;
        Ok(Partition::new(
            clusters,
            self.history.clone(),
            self.merges.clone(),
            self.leaves.clone(),
        ))
    }

    /// Performs one merge of the nearest pair of active clusters.
    pub fn step(&mut self) -> Result<Merge, ClusterError> {
        if self.len() < 2 {
            return Err(ClusterError::insufficient_data(2, self.len()));
        }
        let (a, b, distance) = self.nearest()?;
        let (keep, gone) = if self.cluster(a)?.label() <= self.cluster(b)?.label() {
            (a, b)
        } else {
            (b, a)
        };
        let node = self.leaves.len() + self.merges.len();
        let absorbed = self
            .arena
            .get_mut(gone)
            .and_then(Option::take)
            .ok_or(ClusterError::Vacant(gone))?;
        let absorber = self
            .arena
            .get_mut(keep)
            .and_then(Option::as_mut)
            .ok_or(ClusterError::Vacant(keep))?;
        let smaller = absorber.size().min(absorbed.size());
        let merge = Merge::new(
            absorber.label(),
            absorbed.label(),
            (self.nodes[keep], self.nodes[gone]),
            distance,
            absorber.size() + absorbed.size(),
            smaller,
        );
        self.history.push(smaller);
        absorber.merge(absorbed)?;
        self.active.retain(|&slot| slot != gone);
        self.nodes[keep] = node;
        self.merges.push(merge);
        self.remeasure(keep)?;
        log::debug!("{:<32}{}", "merged", merge);
        Ok(merge)
    }

    /// Strictly smallest cached distance over active pairs, first found on ties.
    fn nearest(&self) -> Result<(usize, usize, Energy), ClusterError> {
        let mut min = Energy::INFINITY;
        let mut best = None;
        for (i, &a) in self.active.iter().enumerate() {
            for &b in self.active.iter().skip(i + 1) {
                let d = self.distances.get(Pair::new(a, b));
                if d < min {
                    min = d;
                    best = Some((a, b));
                }
            }
        }
        best.map(|(a, b)| (a, b, min))
            .ok_or(ClusterError::NoFiniteDistance(self.len()))
    }

    fn cluster(&self, slot: usize) -> Result<&Cluster, ClusterError> {
        self.arena
            .get(slot)
            .and_then(Option::as_ref)
            .ok_or(ClusterError::Vacant(slot))
    }

    fn measure(&mut self, a: usize, b: usize) -> Result<(), ClusterError> {
        let d = self.cluster(a)?.distance(self.cluster(b)?)?;
        self.distances.set(Pair::new(a, b), d);
        Ok(())
    }

    /// refresh the cached row of a slot whose centroid just moved
    fn remeasure(&mut self, slot: usize) -> Result<(), ClusterError> {
        let others = self
            .active
            .iter()
            .copied()
            .filter(|&other| other != slot)
            .collect::<Vec<_>>();
        others
            .into_iter()
            .try_for_each(|other| self.measure(slot, other))
    }

    fn partition(mut self) -> Result<Partition, ClusterError> {
        let clusters = self
            .active
            .iter()
            .map(|&slot| self.arena[slot].take().ok_or(ClusterError::Vacant(slot)))
            .collect::<Result<Vec<Cluster>, ClusterError>>()?;
        Ok(Partition::new(
            clusters,
            self.history,
            self.merges,
            self.leaves,
        ))
    }
}
