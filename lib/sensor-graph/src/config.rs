use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// An error raised while loading a [`PipelineConfig`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// The file locations and options of a pipeline run.
///
/// Every key is optional in a TOML file, missing keys take the default values. Relative paths are
/// resolved against the working directory.
///
/// ```toml
/// sources = ["data/sensor_A.csv", "data/sensor_B.json"]
/// normalized = "data/readings_normalized.csv"
/// graph = "measure_cco.ttl"
/// declare_schema = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// The sensor sources, read in this order.
    pub sources: Vec<PathBuf>,
    /// The canonical readings table.
    pub normalized: PathBuf,
    /// The Turtle document of the measurement graph.
    pub graph: PathBuf,
    /// Whether the graph declares the pattern's classes and properties.
    pub declare_schema: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sources: vec![
                PathBuf::from("src/data/sensor_A.csv"),
                PathBuf::from("src/data/sensor_B.json"),
                PathBuf::from("src/data/sensor_C.csv"),
            ],
            normalized: PathBuf::from("src/data/readings_normalized.csv"),
            graph: PathBuf::from("src/measure_cco.ttl"),
            declare_schema: true,
        }
    }
}

impl PipelineConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_the_default() {
        assert_eq!(PipelineConfig::from_toml("").unwrap(), PipelineConfig::default());
    }

    #[test]
    fn keys_override_defaults() {
        let config = PipelineConfig::from_toml(
            "sources = [\"in/a.tsv\"]\ngraph = \"out/graph.ttl\"\ndeclare_schema = false\n",
        )
        .unwrap();
        assert_eq!(config.sources, [PathBuf::from("in/a.tsv")]);
        assert_eq!(config.graph, PathBuf::from("out/graph.ttl"));
        assert_eq!(
            config.normalized,
            PathBuf::from("src/data/readings_normalized.csv")
        );
        assert!(!config.declare_schema);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            PipelineConfig::from_toml("output = \"x\""),
            Err(ConfigError::Toml(_))
        ));
    }
}
