use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::PersistError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: PersistError,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse config {path:?}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}

impl EngineError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: PersistError) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
