use super::*;
use agglo_core::*;
use agglo_records::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Test fixture for engine verification.
///
/// A seeded grocery dataset with shuffled ids, so that label order
/// disagrees with insertion order, and a small value range, so that
/// equal distances (and therefore tie-breaks) actually occur.
#[derive(Clone)]
pub struct Fixture {
    records: Vec<Record>,
}

impl Fixture {
    /// Largest attribute value drawn.
    const RANGE: u32 = 6;

    /// `n` random twelve-attribute records from a fixed seed.
    pub fn new(n: usize, seed: u64) -> Self {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut ids = (0..n as Id).map(|i| 100 + 3 * i).collect::<Vec<_>>();
        ids.shuffle(rng);
        let records = ids
            .into_iter()
            .map(|id| {
                let attributes = (0..N_ATTRIBUTES)
                    .map(|_| Energy::from(rng.random_range(0..Self::RANGE)))
                    .collect();
                Record::new(id, attributes)
            })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.clone()
    }

    /// Reference clustering: full rescan every step, positional removal.
    pub fn naive(&self, target: usize) -> Vec<Cluster> {
        let mut clusters = self
            .records()
            .into_iter()
            .map(Cluster::from)
            .collect::<Vec<_>>();
        while clusters.len() > target {
            let mut min = Energy::INFINITY;
            let mut best = (0, 0);
            for i in 0..clusters.len() {
                for j in i + 1..clusters.len() {
                    let d = clusters[i].distance(&clusters[j]).expect("equal widths");
                    if d < min {
                        min = d;
                        best = (i, j);
                    }
                }
            }
            let (i, j) = best;
            let (keep, gone) = match clusters[i].label() <= clusters[j].label() {
                true => (i, j),
                false => (j, i),
            };
            let absorbed = clusters.remove(gone);
            let keep = if keep > gone { keep - 1 } else { keep };
            clusters[keep].merge(absorbed).expect("non-empty");
        }
        clusters
    }

    /// Whether a cluster's centroid is the mean of its members.
    pub fn centroid_is_mean(cluster: &Cluster) -> bool {
        let n = cluster.size() as Energy;
        cluster.centroid().iter().enumerate().all(|(k, x)| {
            let mean = cluster
                .members()
                .iter()
                .map(|r| r.attributes()[k])
                .sum::<Energy>()
                / n;
            (mean - x).abs() < 1e-9
        })
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new(64, 0)
    }
}
