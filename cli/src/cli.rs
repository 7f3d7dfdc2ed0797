use clap::{ArgAction, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "sensor-graph")]
/// Sensor Graph command line toolkit: normalize sensor readings, build the measurement graph and validate it
pub struct Args {
    /// Increase log verbosity (-v for debug, -vv for trace)
    ///
    /// The RUST_LOG environment variable takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge sensor sources into the canonical readings table
    Normalize {
        /// Sensor source to read, can be repeated
        ///
        /// The format is guessed from the extension: csv, tsv, json, ndjson or jsonl.
        /// By default the three sources under src/data/ are read.
        #[arg(short, long = "source", value_hint = ValueHint::FilePath)]
        sources: Vec<PathBuf>,
        /// File to write the canonical readings table to
        #[arg(short, long, default_value = "src/data/readings_normalized.csv", value_hint = ValueHint::FilePath)]
        out: PathBuf,
    },
    /// Build the Turtle measurement graph of a canonical readings table
    Build {
        /// Canonical readings table to read
        #[arg(short, long, default_value = "src/data/readings_normalized.csv", value_hint = ValueHint::FilePath)]
        input: PathBuf,
        /// File to write the Turtle document to
        #[arg(short, long, default_value = "src/measure_cco.ttl", value_hint = ValueHint::FilePath)]
        out: PathBuf,
        /// Do not declare the classes and properties of the pattern
        #[arg(long)]
        no_schema: bool,
    },
    /// Check the structure of a Turtle measurement graph
    ///
    /// Exits with 0 if every check passes, 1 if a check fails, 2 if the file is missing
    /// and 3 if it cannot be read.
    Validate {
        /// Turtle document to check
        #[arg(short, long, default_value = "src/measure_cco.ttl", value_hint = ValueHint::FilePath)]
        input: PathBuf,
    },
    /// Run normalize, build and validate in a row
    ///
    /// Exits with the status of the validation.
    Run {
        /// TOML file with the pipeline paths
        ///
        /// Keys: sources, normalized, graph, declare_schema. Missing keys take the default paths.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        config: Option<PathBuf>,
    },
}
