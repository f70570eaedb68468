use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use wordfreq_core::Vocabulary;
use wordfreq_engine::{load_config, WordfreqConfig};

/// Generate a random word file, then write its frequency report.
///
/// With no arguments, 100 words go to `words.txt` and the report to
/// `decoded.txt`, both in the current directory.
#[derive(Parser, Debug)]
#[command(name = "wordfreq", version)]
pub struct Cli {
    /// RON config file; flags given here take precedence over it
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of words to generate
    #[arg(short = 'n', long = "count", value_name = "N")]
    pub count: Option<u64>,

    /// Generated word file, read back by the aggregator
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Report file
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Seed for reproducible generation
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Vocabulary word (repeat to build the list)
    #[arg(long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    /// Also print the report to stdout
    #[arg(long)]
    pub print: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    /// Layers defaults, the optional config file, then explicit flags.
    pub fn resolve_config(&self) -> Result<WordfreqConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => WordfreqConfig::default(),
        };
        if let Some(count) = self.count {
            config.sample_count = count;
        }
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if !self.words.is_empty() {
            config.vocabulary = Vocabulary::new(self.words.iter().cloned());
        }
        Ok(config)
    }
}
