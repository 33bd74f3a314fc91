use super::*;
use agglo_clustering::*;
use agglo_records::*;
use anyhow::Context;
use colored::Colorize;

/// Runs a clustering job described by a [`Config`].
pub struct Pipeline {
    config: Config,
}

impl From<Config> for Pipeline {
    fn from(config: Config) -> Self {
        Self { config }
    }
}

impl Pipeline {
    /// Load, cluster, report, export, and draw, in that order.
    ///
    /// Any failure aborts the run; files already exported are left behind.
    pub fn run(&self) -> anyhow::Result<Partition> {
        let path = self.config.input()?;
        let records =
            load(&path).with_context(|| format!("load records from {}", path.display()))?;
        let n = records.len();
        let mut engine =
            Engine::new(records).with_context(|| format!("cluster {} records", n))?;
        engine
            .merge_to(self.config.clusters)
            .with_context(|| format!("cluster {} records", n))?;
        let partition = engine.snapshot()?;
        self.report(&partition);
        self.export(&partition)?;
        self.history(&partition);
        self.summarize(&partition)?;
        if !self.config.no_dendrogram {
            self.draw(engine)?;
        }
        Ok(partition)
    }

    fn report(&self, partition: &Partition) {
        for (i, cluster) in partition.clusters().iter().enumerate() {
            let summary = Summary::new(format!("Cluster {}", i + 1), cluster);
            println!();
            println!("{}", summary.to_string().trim_end().cyan());
        }
    }

    fn export(&self, partition: &Partition) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.config.output)
            .with_context(|| format!("create {}", self.config.output.display()))?;
        for (i, cluster) in partition.clusters().iter().enumerate() {
            let ref destination = self.config.export(i);
            agglo_records::export(cluster.members(), destination)
                .with_context(|| format!("export cluster {}", cluster.label()))?;
        }
        Ok(())
    }

    fn history(&self, partition: &Partition) {
        println!();
        println!(
            "{}",
            "The size of smaller cluster that was merged in are:".bold()
        );
        println!("{:?}", partition.tail(self.config.tail));
    }

    fn summarize(&self, partition: &Partition) -> anyhow::Result<()> {
        if let Some(ref path) = self.config.summary {
            let file = std::fs::File::create(path)
                .with_context(|| format!("create {}", path.display()))?;
            serde_json::to_writer_pretty(file, &Report::from(partition))
                .with_context(|| format!("write summary to {}", path.display()))?;
            log::info!("{:<32}{:<32}", "wrote summary", path.display());
        }
        Ok(())
    }

    /// Keeps merging the same engine down to one cluster for the tree.
    fn draw(&self, engine: Engine) -> anyhow::Result<()> {
        let linkage = engine
            .run(1)
            .and_then(Linkage::try_from)
            .context("build dendrogram linkage")?;
        let tree = Dendrogram::truncated(&linkage, self.config.leaves);
        println!();
        println!("{}", tree);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agglo_core::*;
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    /// Three well separated blobs of three records each.
    fn blobs(dir: &std::path::Path) -> PathBuf {
        let records = (0..9)
            .map(|i: Id| {
                let center = Energy::from((i / 3) as i32 * 20);
                let wobble = Energy::from((i % 3) as i32);
                Record::new(i + 1, vec![center + wobble; N_ATTRIBUTES])
            })
            .collect::<Vec<_>>();
        let path = dir.join("groceries.csv");
        agglo_records::export(&records, &path).unwrap();
        path
    }

    #[test]
    fn clusters_exports_and_summarizes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            path: Some(blobs(dir.path())),
            output: dir.path().join("out"),
            summary: Some(dir.path().join("summary.json")),
            ..Config::default()
        };
        let partition = Pipeline::from(config.clone()).run().unwrap();
        assert_eq!(partition.clusters().len(), 3);
        assert_eq!(partition.history().len(), 6);
        let mut seen = BTreeSet::new();
        for i in 0..3 {
            let members = load(config.export(i)).unwrap();
            assert_eq!(members.len(), 3);
            seen.extend(members.iter().map(Record::id));
        }
        assert_eq!(seen, (1..=9).collect::<BTreeSet<Id>>());
        let json = std::fs::read_to_string(dir.path().join("summary.json")).unwrap();
        let json = serde_json::from_str::<serde_json::Value>(&json).unwrap();
        assert_eq!(json["clusters"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn missing_input_names_the_file() {
        let config = Config {
            path: Some(PathBuf::from("nowhere/groceries.csv")),
            ..Config::default()
        };
        let err = Pipeline::from(config).run().unwrap_err();
        assert!(format!("{:#}", err).contains("nowhere/groceries.csv"));
    }

    #[test]
    fn too_few_records_for_target() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            path: Some(blobs(dir.path())),
            output: dir.path().join("out"),
            clusters: 10,
            ..Config::default()
        };
        let err = Pipeline::from(config).run().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClusterError>(),
            Some(ClusterError::InsufficientData {
                required: 10,
                available: 9
            })
        ));
    }
}
