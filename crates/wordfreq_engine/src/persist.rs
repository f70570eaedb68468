use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not a directory: {0}")]
    OutputDir(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The target's directory must already exist; it is never created.
fn check_output_dir(dir: &Path) -> Result<(), PersistError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(PersistError::OutputDir(format!(
            "{} is not a directory",
            dir.display()
        ))),
        Err(e) => Err(PersistError::OutputDir(format!("{}: {e}", dir.display()))),
    }
}

/// Writes a file by filling a temp file next to the target, then renaming it
/// over the target. Readers never observe a partially written file, and a
/// failed write leaves any previous content in place.
///
/// The result carries the permissions a plain truncating open would leave:
/// an existing target keeps its mode, a new one gets `0o666` minus the umask.
#[derive(Debug, Clone)]
pub struct AtomicFileWriter {
    target: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    fn dir(&self) -> &Path {
        match self.target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    pub fn write(&self, content: &[u8]) -> Result<PathBuf, PersistError> {
        self.write_with(|out| out.write_all(content))
            .map(|((), path)| path)
    }

    /// Streams content through `fill` into the temp file and commits it.
    ///
    /// Returns whatever `fill` produced together with the final path.
    pub fn write_with<T, F>(&self, fill: F) -> Result<(T, PathBuf), PersistError>
    where
        F: FnOnce(&mut BufWriter<&mut File>) -> io::Result<T>,
    {
        let dir = self.dir();
        check_output_dir(dir)?;

        let mut tmp = new_temp_file(dir)?;
        let value = {
            let mut out = BufWriter::new(tmp.as_file_mut());
            let value = fill(&mut out)?;
            out.flush()?;
            value
        };

        match fs::metadata(&self.target) {
            Ok(meta) => tmp.as_file().set_permissions(meta.permissions())?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&self.target).map_err(|e| PersistError::Io(e.error))?;
        Ok((value, self.target.clone()))
    }
}

#[cfg(unix)]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // The mode passes through open(2), so the process umask still applies.
    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}
