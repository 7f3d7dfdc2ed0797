#![allow(clippy::print_stderr, clippy::print_stdout)]
use crate::cli::{Args, Command};
use anyhow::Context;
use clap::Parser;
use sensor_graph::builder::GraphBuilder;
use sensor_graph::normalize::{NormalizeSummary, Normalizer};
use sensor_graph::validate::{validate_file, ExitStatus};
use sensor_graph::{run_pipeline, PipelineConfig};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    match execute(args.command) {
        Ok(status) => ExitCode::from(status.code()),
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn execute(command: Command) -> anyhow::Result<ExitStatus> {
    match command {
        Command::Normalize { sources, out } => {
            let sources = if sources.is_empty() {
                PipelineConfig::default().sources
            } else {
                sources
            };
            let summary = Normalizer::from_paths(sources)
                .context("Invalid sensor source")?
                .run(&out)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            print_normalize_summary(&summary, &out);
            Ok(ExitStatus::Passed)
        }
        Command::Build {
            input,
            out,
            no_schema,
        } => {
            let summary = GraphBuilder::new()
                .with_schema(!no_schema)
                .run(&input, &out)
                .with_context(|| format!("Failed to build the graph of {}", input.display()))?;
            if summary.placeholder {
                println!(
                    "{} not found, wrote a placeholder graph to {}",
                    input.display(),
                    out.display()
                );
            } else {
                println!(
                    "Wrote {} with {} triples from {} readings",
                    out.display(),
                    summary.triples,
                    summary.readings
                );
            }
            Ok(ExitStatus::Passed)
        }
        Command::Validate { input } => Ok(validate(&input)),
        Command::Run { config } => {
            let config = load_config(config.as_deref())?;
            let outcome = run_pipeline(&config)?;
            print_normalize_summary(&outcome.normalize, &config.normalized);
            println!(
                "Wrote {} with {} triples",
                config.graph.display(),
                outcome.build.triples
            );
            match &outcome.validation {
                Ok(report) => println!("{report}"),
                Err(error) => eprintln!("{error}"),
            }
            Ok(outcome.exit_status())
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };
    PipelineConfig::from_file(path)
        .with_context(|| format!("Failed to load the configuration {}", path.display()))
}

fn validate(path: &Path) -> ExitStatus {
    match validate_file(path) {
        Ok(report) => {
            println!("{report}");
            report.exit_status()
        }
        Err(error) => {
            eprintln!("{error}");
            error.exit_status()
        }
    }
}

fn print_normalize_summary(summary: &NormalizeSummary, output: &Path) {
    for source in &summary.sources {
        if source.missing {
            println!("Input {}: not found", source.path.display());
        } else {
            println!("Input {}: {} rows", source.path.display(), source.rows);
        }
    }
    println!(
        "Wrote {} with {} rows ({} dropped)",
        output.display(),
        summary.written,
        summary.dropped
    );
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use anyhow::Result;
    use assert_cmd::Command;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use predicates::prelude::*;

    fn cli_command() -> Command {
        let mut command = Command::new(env!("CARGO"));
        command.arg("run").arg("--bin").arg("sensor-graph");
        command.arg("--");
        command
    }

    const SENSOR_CSV: &str = "asset_id,measure_type,unit,reading,time\n\
                              Boiler-07,temp,celsius,98.6,2024-01-01 00:00:00\n\
                              Boiler-07,temp,celsius,not-a-number,2024-01-01 01:00:00\n";

    #[test]
    fn cli_help() {
        cli_command()
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn cli_normalize_build_validate() -> Result<()> {
        let dir = TempDir::new()?;
        let source = dir.child("sensor_A.csv");
        source.write_str(SENSOR_CSV)?;
        let table = dir.child("readings_normalized.csv");
        let graph = dir.child("measure_cco.ttl");

        cli_command()
            .arg("normalize")
            .arg("--source")
            .arg(source.path())
            .arg("--out")
            .arg(table.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("with 1 rows (1 dropped)"));
        table.assert(
            "artifact_id,sdc_kind,unit_label,value,timestamp\n\
             Boiler-07,temperature,C,98.6,2024-01-01T00:00:00Z\n",
        );

        cli_command()
            .arg("build")
            .arg("--input")
            .arg(table.path())
            .arg("--out")
            .arg(graph.path())
            .assert()
            .success();
        graph.assert(predicate::str::contains("@prefix cco:"));

        cli_command()
            .arg("validate")
            .arg("--input")
            .arg(graph.path())
            .assert()
            .code(0)
            .stdout(predicate::str::contains(
                "Types present: Artifact=1, SDC=1, MICE=1, MU=1",
            ));
        Ok(())
    }

    #[test]
    fn cli_run_with_config() -> Result<()> {
        let dir = TempDir::new()?;
        let source = dir.child("sensor_A.csv");
        source.write_str(SENSOR_CSV)?;
        let config = dir.child("pipeline.toml");
        config.write_str(&format!(
            "sources = [{:?}, {:?}]\nnormalized = {:?}\ngraph = {:?}\n",
            source.path().display().to_string(),
            dir.child("missing.json").path().display().to_string(),
            dir.child("out/readings_normalized.csv")
                .path()
                .display()
                .to_string(),
            dir.child("out/measure_cco.ttl").path().display().to_string(),
        ))?;

        cli_command()
            .arg("run")
            .arg("--config")
            .arg(config.path())
            .assert()
            .code(0)
            .stdout(predicate::str::contains("not found"))
            .stdout(predicate::str::contains("All 3 checks passed"));
        dir.child("out/measure_cco.ttl")
            .assert(predicate::path::exists());
        Ok(())
    }

    #[test]
    fn cli_validate_missing_file() -> Result<()> {
        let dir = TempDir::new()?;
        cli_command()
            .arg("validate")
            .arg("--input")
            .arg(dir.child("measure_cco.ttl").path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("not found"));
        Ok(())
    }

    #[test]
    fn cli_validate_invalid_turtle() -> Result<()> {
        let dir = TempDir::new()?;
        let graph = dir.child("measure_cco.ttl");
        graph.write_str("this is not turtle")?;
        cli_command()
            .arg("validate")
            .arg("--input")
            .arg(graph.path())
            .assert()
            .code(3);
        Ok(())
    }

    #[test]
    fn cli_validate_failing_graph() -> Result<()> {
        let dir = TempDir::new()?;
        let table = dir.child("readings_normalized.csv");
        table.write_str("artifact_id,sdc_kind,unit_label,value,timestamp\n")?;
        let graph = dir.child("measure_cco.ttl");
        cli_command()
            .arg("build")
            .arg("--input")
            .arg(table.path())
            .arg("--out")
            .arg(graph.path())
            .assert()
            .success();
        cli_command()
            .arg("validate")
            .arg("--input")
            .arg(graph.path())
            .assert()
            .code(1)
            .stdout(predicate::str::contains("[FAIL] types"));
        Ok(())
    }

    #[test]
    fn clap_debug() {
        use clap::CommandFactory;

        Args::command().debug_assert()
    }
}
