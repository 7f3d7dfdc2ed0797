//! Sensor Graph turns heterogeneous sensor readings into a measurement graph.
//!
//! The pipeline has three stages, each in its own crate and re-exported here:
//!
//! 1. [`normalize`] reads CSV/TSV/JSON sources and writes the canonical readings table.
//! 2. [`builder`] turns the table into a Turtle document following the measurement pattern
//!    (artifact, condition, measurement record, unit).
//! 3. [`validate`] loads the Turtle document and checks its structure.
//!
//! [`run_pipeline`] chains the three stages using a [`PipelineConfig`].

mod config;
mod pipeline;

pub use config::{ConfigError, PipelineConfig};
pub use pipeline::{run_pipeline, PipelineError, PipelineOutcome};

pub mod model {
    pub use sensor_graph_model::*;
}

pub mod normalize {
    pub use sensor_graph_normalize::*;
}

pub mod builder {
    pub use sensor_graph_builder::*;
}

pub mod validate {
    pub use sensor_graph_validate::*;
}
