//! Turns the canonical readings table into a measurement graph.
//!
//! Each reading becomes one measurement record that measures a condition borne by an artifact
//! and uses a unit. Entity IRIs are derived from content hashes, and triples are written in the
//! order they are produced, so the same table always yields the same Turtle document.

mod context;
mod error;
mod ids;
mod table;
mod turtle;

pub use context::{BuildContext, EntityCounts};
pub use error::BuildError;
pub use ids::{content_hash, EntityIds};
pub use table::read_canonical;
pub use turtle::{write_placeholder, write_turtle};

use sensor_graph_model::Reading;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

/// The outcome of a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Readings turned into measurement records.
    pub readings: usize,
    /// Rows of the table that were not valid readings.
    pub dropped: usize,
    pub entities: EntityCounts,
    pub triples: usize,
    /// The table was missing and a placeholder document was written.
    pub placeholder: bool,
}

/// Builds the graph of a canonical readings table.
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    declare_schema: bool,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            declare_schema: true,
        }
    }

    /// Whether to emit the OWL declarations of the pattern's classes and properties. On by default.
    #[must_use]
    pub fn with_schema(mut self, declare_schema: bool) -> Self {
        self.declare_schema = declare_schema;
        self
    }

    /// Builds the context of an in-memory list of readings.
    pub fn build(&self, readings: &[Reading]) -> BuildContext {
        let mut context = BuildContext::new();
        if self.declare_schema {
            context.declare_schema();
        }
        context.add_readings(readings);
        context
    }

    /// Reads the table at `input` and writes its graph to `output`, creating the output directory.
    ///
    /// A missing table is not an error: a placeholder document is written instead.
    ///
    /// The output is only created once the table has been read, so a failed run leaves a previous
    /// graph untouched.
    pub fn run(&self, input: &Path, output: &Path) -> Result<BuildSummary, BuildError> {
        if !input.exists() {
            warn!(path = %input.display(), "Readings table not found, writing a placeholder graph");
            write_placeholder(create_output(output)?, self.declare_schema)?.flush()?;
            return Ok(BuildSummary {
                placeholder: true,
                ..BuildSummary::default()
            });
        }

        let (readings, dropped) = read_canonical(BufReader::new(File::open(input)?))?;
        let context = self.build(&readings);
        write_turtle(context.triples(), create_output(output)?)?.flush()?;

        let summary = BuildSummary {
            readings: readings.len(),
            dropped,
            entities: context.counts(),
            triples: context.triple_count(),
            placeholder: false,
        };
        info!(
            path = %output.display(),
            readings = summary.readings,
            dropped,
            triples = summary.triples,
            "Wrote measurement graph"
        );
        Ok(summary)
    }
}

fn create_output(path: &Path) -> Result<BufWriter<File>, BuildError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}
