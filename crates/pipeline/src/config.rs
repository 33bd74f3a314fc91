use agglo_core::*;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

/// Command line options for a clustering run.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Centroid-linkage agglomerative clustering of grocery purchase records",
    long_about = None
)]
pub struct Config {
    /// CSV of grocery records (header line first); prompted for when omitted
    pub path: Option<PathBuf>,

    /// Number of clusters to stop at
    #[arg(short, long, default_value_t = TARGET_CLUSTER_COUNT)]
    pub clusters: usize,

    /// Number of merged clusters shown as dendrogram leaves
    #[arg(short, long, default_value_t = DENDROGRAM_LEAVES)]
    pub leaves: usize,

    /// Directory that receives cluster1.csv, cluster2.csv, ...
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Number of merge history entries to print
    #[arg(short, long, default_value_t = HISTORY_TAIL)]
    pub tail: usize,

    /// Skip building and printing the dendrogram
    #[arg(long)]
    pub no_dendrogram: bool,

    /// Also write a JSON summary of the partition to this file
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

impl Config {
    /// Input path from the command line, or from the terminal if none was given.
    pub fn input(&self) -> anyhow::Result<PathBuf> {
        match self.path {
            Some(ref path) => Ok(path.clone()),
            None => dialoguer::Input::<String>::new()
                .with_prompt("Enter the file name")
                .interact_text()
                .map(PathBuf::from)
                .context("read input file name"),
        }
    }
    /// Export destination of the `i`th cluster (zero-based).
    pub fn export(&self, i: usize) -> PathBuf {
        self.output.join(format!("cluster{}.csv", i + 1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            clusters: TARGET_CLUSTER_COUNT,
            leaves: DENDROGRAM_LEAVES,
            output: PathBuf::from("."),
            tail: HISTORY_TAIL,
            no_dendrogram: false,
            summary: None,
        }
    }
}
