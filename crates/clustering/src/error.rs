//! Error types for clustering operations.

use thiserror::Error;

/// Errors that can occur while building or merging clusters.
///
/// None of these are recoverable mid-run: the engine aborts on the first
/// error and no partial partition is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClusterError {
    /// The requested cluster count exceeds the clusters available.
    #[error("insufficient data: required {required}, available {available}")]
    InsufficientData { required: usize, available: usize },

    /// A cluster with no members was asked to merge.
    #[error("cannot merge into a cluster with no members")]
    EmptyCluster,

    /// Two centroids (or two records) disagree on attribute count.
    #[error("dimension mismatch: expected {expected}, actual {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Asked to cluster down to zero clusters.
    #[error("target cluster count must be at least 1")]
    InvalidTarget,

    /// No pair of active clusters is a finite distance apart.
    #[error("no finite centroid distance among {0} clusters")]
    NoFiniteDistance(usize),

    /// An arena slot that should hold a live cluster is empty.
    #[error("arena slot {0} holds no live cluster")]
    Vacant(usize),

    /// A linkage needs a partition merged down to exactly one cluster.
    #[error("linkage needs a single root, partition holds {0} clusters")]
    Unrooted(usize),

    /// A stop was requested between merges.
    #[error("clustering interrupted")]
    Interrupted,
}

impl ClusterError {
    pub fn insufficient_data(required: usize, available: usize) -> Self {
        Self::InsufficientData {
            required,
            available,
        }
    }
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}
