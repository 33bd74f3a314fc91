//! Centroid-linkage agglomerative clustering of grocery purchase records.
//!
//! This facade crate re-exports all public agglo crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, schema constants, and runtime utilities
//! - [`records`] — Records, CSV loading and export
//! - [`clustering`] — Clusters, the merge engine, linkage, and dendrograms
//! - [`pipeline`] — Command line configuration and the end-to-end run

pub use agglo_core       as core;
pub use agglo_records    as records;
pub use agglo_clustering as clustering;
pub use agglo_pipeline   as pipeline;

// Re-export commonly used types at the root
pub use agglo_core::*;
