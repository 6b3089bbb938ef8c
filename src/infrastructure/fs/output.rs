//! Output destinations for generated files

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{GenesisError, GenesisResult};

/// Where the generated module goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    /// `Stdout` for `None`
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Output::Stdout, Output::File)
    }

    pub fn write(&self, content: &[u8]) -> GenesisResult<()> {
        match self {
            Output::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(content)
                    .and_then(|()| stdout.flush())
                    .map_err(GenesisError::Write)
            }
            Output::File(path) => write_atomic(path, content),
        }
    }
}

/// Write content to a file atomically
///
/// The content goes to a temp file in the destination directory which is
/// then renamed over `path`, so readers never see a partial file.
pub fn write_atomic(path: &Path, content: &[u8]) -> GenesisResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(GenesisError::Write)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(GenesisError::Write)?;
    tmp.write_all(content)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(GenesisError::Write)?;
    tmp.persist(path).map_err(|e| GenesisError::Write(e.error))?;

    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
