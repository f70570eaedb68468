use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wordfreq_core::Vocabulary;
use wordfreq_logging::wf_debug;

use crate::EngineError;

pub const DEFAULT_SAMPLE_COUNT: u64 = 100;
pub const DEFAULT_INPUT_PATH: &str = "words.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "decoded.txt";

/// Everything the generator and aggregator need, passed in explicitly.
///
/// `input_path` is the generator's destination and the aggregator's source.
/// When `seed` is set, generation is reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordfreqConfig {
    pub vocabulary: Vocabulary,
    pub sample_count: u64,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub seed: Option<u64>,
}

impl Default for WordfreqConfig {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::default(),
            sample_count: DEFAULT_SAMPLE_COUNT,
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            seed: None,
        }
    }
}

impl WordfreqConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.sample_count > 0 && self.vocabulary.is_empty() {
            return Err(EngineError::InvalidConfig(
                "vocabulary must not be empty when sample_count > 0".into(),
            ));
        }
        if self.input_path.as_os_str().is_empty() || self.output_path.as_os_str().is_empty() {
            return Err(EngineError::InvalidConfig("paths must not be empty".into()));
        }
        if resolve(&self.input_path) == resolve(&self.output_path) {
            return Err(EngineError::InvalidConfig(format!(
                "input and output both point at {}",
                self.input_path.display()
            )));
        }
        Ok(())
    }
}

/// Best-effort absolute form of a path that may not exist yet: the parent
/// directory is canonicalized when it exists, `.` segments are dropped.
fn resolve(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let resolved = match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => parent.canonicalize().ok().map(|dir| dir.join(name)),
        _ => None,
    };
    resolved.unwrap_or(absolute)
}

/// Loads a RON config file. Fields left out keep their defaults.
pub fn load_config(path: &Path) -> Result<WordfreqConfig, EngineError> {
    let content = fs::read_to_string(path).map_err(|e| EngineError::read(path, e))?;
    let config: WordfreqConfig =
        ron::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    wf_debug!("Loaded config from {:?}: {:?}", path, config);
    Ok(config)
}
