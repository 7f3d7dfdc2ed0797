//! End-to-end scenarios of the Sensor Graph pipeline, run over the fixture files in `data/`.

use anyhow::{Context, Result};
use assert_fs::TempDir;
use sensor_graph::model::Graph;
use sensor_graph::validate::parse_graph;
use sensor_graph::{run_pipeline, PipelineConfig, PipelineOutcome};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// The path of a fixture file.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

/// A pipeline run over some fixtures, with its outputs in a temporary directory.
pub struct Scenario {
    pub config: PipelineConfig,
    pub outcome: PipelineOutcome,
    // Kept alive so that the outputs can still be read.
    _dir: TempDir,
}

impl Scenario {
    /// Runs the whole pipeline over the given fixtures, in order.
    pub fn run(fixtures: &[&str]) -> Result<Self> {
        let dir = TempDir::new()?;
        let config = PipelineConfig {
            sources: fixtures.iter().map(|name| fixture(name)).collect(),
            normalized: dir.path().join("data").join("readings_normalized.csv"),
            graph: dir.path().join("measure_cco.ttl"),
            declare_schema: true,
        };
        let outcome = run_pipeline(&config)?;
        Ok(Self {
            config,
            outcome,
            _dir: dir,
        })
    }

    /// The canonical readings table that was written.
    pub fn normalized(&self) -> Result<String> {
        fs::read_to_string(&self.config.normalized)
            .with_context(|| format!("Failed to read {}", self.config.normalized.display()))
    }

    /// The raw bytes of the Turtle document that was written.
    pub fn turtle(&self) -> Result<Vec<u8>> {
        fs::read(&self.config.graph)
            .with_context(|| format!("Failed to read {}", self.config.graph.display()))
    }

    /// The graph parsed back from the Turtle document.
    pub fn graph(&self) -> Result<Graph> {
        Ok(parse_graph(File::open(&self.config.graph)?)?)
    }
}
