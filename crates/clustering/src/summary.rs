use super::*;
use agglo_core::*;
use serde::Serialize;

/// Human-readable description of one cluster: its label and the mean
/// of every attribute, named in column order.
pub struct Summary<'a> {
    name: String,
    cluster: &'a Cluster,
}

impl<'a> Summary<'a> {
    pub fn new(name: impl Into<String>, cluster: &'a Cluster) -> Self {
        Self {
            name: name.into(),
            cluster,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// (attribute name, centroid value) in column order
    pub fn attributes(&self) -> impl Iterator<Item = (String, Energy)> + '_ {
        self.cluster
            .centroid()
            .iter()
            .enumerate()
            .map(|(k, x)| (Self::attribute(k), *x))
    }
    fn attribute(k: usize) -> String {
        ATTRIBUTES
            .get(k)
            .map(|name| name.to_string())
            .unwrap_or_else(|| format!("Attribute{}", k))
    }
}

impl std::fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Information for : {}", self.name)?;
        writeln!(f, "Cluster label: {}", self.cluster.label())?;
        for (name, x) in self.attributes() {
            writeln!(f, "{}: {},", name, x)?;
        }
        Ok(())
    }
}

/// Machine-readable digest of a [`Partition`].
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    method: &'static str,
    attributes: Vec<&'static str>,
    clusters: Vec<Entry>,
    history: Vec<usize>,
}

/// One cluster within a [`Report`].
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    label: Id,
    size: usize,
    centroid: Vec<Energy>,
    members: Vec<Id>,
}

impl From<&Cluster> for Entry {
    fn from(cluster: &Cluster) -> Self {
        Self {
            label: cluster.label(),
            size: cluster.size(),
            centroid: cluster.centroid().to_vec(),
            members: cluster.ids().iter().copied().collect(),
        }
    }
}

impl From<&Partition> for Report {
    fn from(partition: &Partition) -> Self {
        Self {
            method: LINKAGE_METHOD,
            attributes: ATTRIBUTES.to_vec(),
            clusters: partition.clusters().iter().map(Entry::from).collect(),
            history: partition.history().to_vec(),
        }
    }
}
