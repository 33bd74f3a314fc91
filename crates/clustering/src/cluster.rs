use super::*;
use agglo_core::*;
use agglo_records::*;
use std::collections::BTreeSet;

/// A group of records and the mean of their attributes.
///
/// Clusters start as singletons seeded by one record and grow by
/// absorbing other clusters whole. The centroid is recomputed from the
/// full member list on every merge, never averaged incrementally, so
/// `centroid[k]` is always the mean of `members[*].attributes[k]`.
///
/// The label is the id of the seeding record. It never changes, even
/// after the cluster has absorbed others, and serves only as the
/// tie-break key deciding which of two clusters survives a merge.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    label: Id,
    members: Vec<Record>,
    ids: BTreeSet<Id>,
    centroid: Vec<Energy>,
}

impl Cluster {
    /// Builds a cluster over a non-empty group of equally wide records.
    pub fn new(records: Vec<Record>, label: Id) -> Result<Self, ClusterError> {
        let dimension = records
            .first()
            .map(Record::dimension)
            .ok_or(ClusterError::EmptyCluster)?;
        if let Some(r) = records.iter().find(|r| r.dimension() != dimension) {
            return Err(ClusterError::dimension_mismatch(dimension, r.dimension()));
        }
        let ids = records.iter().map(Record::id).collect();
        let centroid = Self::mean(&records);
        Ok(Self {
            label,
            members: records,
            ids,
            centroid,
        })
    }

    pub fn label(&self) -> Id {
        self.label
    }
    pub fn size(&self) -> usize {
        self.members.len()
    }
    /// members in merge order
    pub fn members(&self) -> &[Record] {
        &self.members
    }
    pub fn ids(&self) -> &BTreeSet<Id> {
        &self.ids
    }
    pub fn contains(&self, id: Id) -> bool {
        self.ids.contains(&id)
    }
    pub fn centroid(&self) -> &[Energy] {
        &self.centroid
    }
    pub fn dimension(&self) -> usize {
        self.centroid.len()
    }

    /// Absorbs every member of `other`, in order, and recomputes the centroid.
    pub fn merge(&mut self, other: Cluster) -> Result<(), ClusterError> {
        if self.members.is_empty() {
            return Err(ClusterError::EmptyCluster);
        }
        if other.dimension() != self.dimension() {
            return Err(ClusterError::dimension_mismatch(
                self.dimension(),
                other.dimension(),
            ));
        }
        self.ids.extend(other.ids);
        self.members.extend(other.members);
        self.centroid = Self::mean(&self.members);
        Ok(())
    }

    /// Euclidean distance between the two centroids.
    pub fn distance(&self, other: &Self) -> Result<Energy, ClusterError> {
        if other.dimension() != self.dimension() {
            return Err(ClusterError::dimension_mismatch(
                self.dimension(),
                other.dimension(),
            ));
        }
        Ok(self
            .centroid
            .iter()
            .zip(other.centroid.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<Energy>()
            .sqrt())
    }

    /// per-attribute arithmetic mean, summed in member order
    fn mean(members: &[Record]) -> Vec<Energy> {
        let n = members.len() as Energy;
        let d = members.first().map(Record::dimension).unwrap_or_default();
        (0..d)
            .map(|k| members.iter().map(|r| r.attributes()[k]).sum::<Energy>() / n)
            .collect()
    }
}

/// a singleton cluster labeled by its only record
impl From<Record> for Cluster {
    fn from(record: Record) -> Self {
        let label = record.id();
        Self {
            label,
            ids: BTreeSet::from([label]),
            centroid: record.attributes().to_vec(),
            members: vec![record],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn singleton(id: Id, xs: &[Energy]) -> Cluster {
        Cluster::from(Record::new(id, xs.to_vec()))
    }

    #[test]
    fn new_computes_mean() {
        let cluster = Cluster::new(
            vec![
                Record::from((1, [0.0, 2.0, 4.0])),
                Record::from((2, [2.0, 2.0, 8.0])),
            ],
            1,
        )
        .unwrap();
        assert_eq!(cluster.size(), 2);
        assert_eq!(cluster.centroid(), &[1.0, 2.0, 6.0]);
        assert!(cluster.contains(1) && cluster.contains(2));
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(Cluster::new(vec![], 1), Err(ClusterError::EmptyCluster));
    }

    #[test]
    fn new_rejects_ragged_records() {
        let records = vec![Record::from((1, [0.0, 1.0])), Record::from((2, [0.0]))];
        assert_eq!(
            Cluster::new(records, 1),
            Err(ClusterError::dimension_mismatch(2, 1))
        );
    }

    #[test]
    fn singleton_centroid_is_the_record() {
        let cluster = singleton(9, &[3.0, 1.5]);
        assert_eq!(cluster.label(), 9);
        assert_eq!(cluster.size(), 1);
        assert_eq!(cluster.centroid(), &[3.0, 1.5]);
    }

    #[test]
    fn merge_appends_in_order_and_recomputes() {
        let mut a = singleton(1, &[0.0, 0.0]);
        let b = Cluster::new(
            vec![Record::from((5, [3.0, 3.0])), Record::from((6, [6.0, 0.0]))],
            5,
        )
        .unwrap();
        a.merge(b).unwrap();
        assert_eq!(a.label(), 1);
        assert_eq!(a.size(), 3);
        assert_eq!(
            a.members().iter().map(Record::id).collect::<Vec<_>>(),
            vec![1, 5, 6]
        );
        assert_eq!(a.ids().iter().copied().collect::<Vec<_>>(), vec![1, 5, 6]);
        assert_eq!(a.centroid(), &[3.0, 1.0]);
    }

    #[test]
    fn merge_rejects_mismatched_dimension() {
        let mut a = singleton(1, &[0.0, 0.0]);
        let b = singleton(2, &[0.0]);
        assert_eq!(a.merge(b), Err(ClusterError::dimension_mismatch(2, 1)));
        assert_eq!(a.size(), 1);
    }

    #[test]
    fn distance_is_euclidean_and_symmetric() {
        let a = singleton(1, &[0.0, 0.0]);
        let b = singleton(2, &[3.0, 4.0]);
        assert_eq!(a.distance(&b), Ok(5.0));
        assert_eq!(a.distance(&b), b.distance(&a));
        assert_eq!(a.distance(&a), Ok(0.0));
    }

    #[test]
    fn distance_rejects_mismatched_dimension() {
        let a = singleton(1, &[0.0, 0.0, 0.0]);
        let b = singleton(2, &[3.0, 4.0]);
        assert_eq!(a.distance(&b), Err(ClusterError::dimension_mismatch(3, 2)));
    }
}
