//! Clustering Binary
//!
//! Clusters a grocery purchase CSV down to a handful of groups, prints
//! their centroids, writes their members to clusterN.csv, and draws a
//! dendrogram of the full merge tree.
//!
//! Type "Q" + Enter while merging to stop early.

use clap::Parser;

fn main() -> anyhow::Result<()> {
    agglo_core::log();
    let config = agglo_pipeline::Config::parse();
    // resolve the path before stdin is handed to the interrupt listener
    let config = agglo_pipeline::Config {
        path: Some(config.input()?),
        ..config
    };
    agglo_core::brb();
    agglo_pipeline::Pipeline::from(config).run().map(|_| ())
}
