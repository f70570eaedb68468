mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use wordfreq_engine::run_pipeline;
use wordfreq_logging::{level_from_verbosity, wf_info};

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    wordfreq_logging::initialize(level_from_verbosity(cli.verbose, cli.quiet));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config().context("failed to build configuration")?;
    let summary = run_pipeline(&config).context("word frequency run failed")?;

    wf_info!(
        "Done: {} words generated, {} distinct in {:?}",
        summary.generated,
        summary.aggregate.distinct,
        summary.aggregate.output_path
    );

    if cli.print {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        summary
            .aggregate
            .report
            .write_to(&mut out)
            .context("failed to print report")?;
        out.flush()?;
    }
    Ok(())
}
