use wordfreq_logging::wf_info;

use crate::{aggregate_file, generate_file, AggregateSummary, EngineError, WordfreqConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    pub generated: u64,
    pub aggregate: AggregateSummary,
}

/// Generates the token file, then aggregates it into the report file.
pub fn run_pipeline(config: &WordfreqConfig) -> Result<PipelineSummary, EngineError> {
    config.validate()?;
    wf_info!(
        "Running pipeline: {} samples, {:?} -> {:?}",
        config.sample_count,
        config.input_path,
        config.output_path
    );

    let generated = generate_file(config)?;
    let aggregate = aggregate_file(&config.input_path, &config.output_path)?;
    Ok(PipelineSummary {
        generated,
        aggregate,
    })
}
