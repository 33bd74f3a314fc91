//! End-to-end clustering of a grocery purchase file.
//!
//! ## Stages
//!
//! 1. **Load** — Parse the input CSV into records
//! 2. **Cluster** — Merge down to the target cluster count
//! 3. **Report** — Print each cluster's labeled centroid and the merge history
//! 4. **Export** — Write each cluster's members to `clusterN.csv`
//! 5. **Draw** — Build the full linkage and print a truncated dendrogram
//!
//! ## Core Types
//!
//! - [`Config`] — Command line options
//! - [`Pipeline`] — Runs the stages in order
mod config;
mod pipeline;

pub use config::*;
pub use pipeline::*;
