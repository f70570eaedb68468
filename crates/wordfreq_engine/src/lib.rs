//! Wordfreq engine: file IO around the pure counting core.
mod aggregate;
mod config;
mod error;
mod generate;
mod persist;
mod pipeline;

pub use aggregate::{aggregate, aggregate_file, aggregate_files, AggregateSummary};
pub use config::{
    load_config, WordfreqConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_SAMPLE_COUNT,
};
pub use error::EngineError;
pub use generate::{generate, generate_file};
pub use persist::{AtomicFileWriter, PersistError};
pub use pipeline::{run_pipeline, PipelineSummary};
