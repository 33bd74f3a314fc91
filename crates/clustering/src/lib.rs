//! Centroid-linkage agglomerative clustering.
//!
//! Every record starts as its own cluster. The two clusters whose
//! centroids are closest are merged, over and over, until the requested
//! number of clusters remains.
//!
//! ## Core Types
//!
//! - [`Cluster`] — Members, member ids, centroid, and a fixed seed label
//! - [`Engine`] — Nearest-pair search and the merge loop
//! - [`Partition`] — Surviving clusters plus merge bookkeeping
//! - [`Merge`] — One step of agglomeration
//!
//! ## Algorithms
//!
//! - [`Distances`] — Triangular cache of slot-to-slot centroid distances
//! - [`Linkage`] — Full merge tree over a dataset
//! - [`Dendrogram`] — Truncated tree view of a linkage, renderable as text
//!
//! ## Reporting
//!
//! - [`Summary`] — Labeled centroid listing for one cluster
//! - [`Report`] — Serializable digest of a partition
mod cluster;
mod dendrogram;
mod distances;
mod engine;
mod error;
mod linkage;
mod merge;
mod pair;
mod partition;
mod summary;
mod tests;

pub use cluster::*;
pub use dendrogram::*;
pub use distances::*;
pub use engine::*;
pub use error::*;
pub use linkage::*;
pub use merge::*;
pub use pair::*;
pub use partition::*;
pub use summary::*;
pub use tests::*;
