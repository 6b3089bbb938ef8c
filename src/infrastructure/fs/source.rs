//! Local directory tree as an asset source
//!
//! A file input yields itself. A directory input yields every file below it,
//! children visited in file-name order. Hidden files are included and ignore
//! files are not consulted. Symlinks are followed.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::entities::Asset;
use crate::domain::ports::AssetSource;
use crate::error::{GenesisError, GenesisResult};

/// Reads assets from disk, optionally relative to a root directory
#[derive(Debug, Clone, Default)]
pub struct FsAssetSource {
    root: Option<PathBuf>,
}

/// One file to read: the name it is embedded under and where it lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub logical: PathBuf,
    pub disk: PathBuf,
}

impl FsAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve inputs against `root`; names stay relative to it
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => path.to_path_buf(),
        }
    }

    /// Expand one input path into the files it names
    pub fn expand(&self, input: &Path) -> GenesisResult<Vec<SourceFile>> {
        let disk = self.resolve(input);
        let metadata = fs::metadata(&disk).map_err(|source| GenesisError::Read {
            path: disk.clone(),
            source,
        })?;

        if !metadata.is_dir() {
            return Ok(vec![SourceFile {
                logical: input.to_path_buf(),
                disk,
            }]);
        }

        let walker = WalkBuilder::new(&disk)
            .standard_filters(false)
            .follow_links(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| GenesisError::Walk {
                path: disk.clone(),
                message: e.to_string(),
            })?;

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                log::trace!("skipping non-file {}", entry.path().display());
                continue;
            }

            let relative = entry.path().strip_prefix(&disk).unwrap_or(entry.path());
            files.push(SourceFile {
                logical: join_clean(input, relative),
                disk: entry.path().to_path_buf(),
            });
        }
        Ok(files)
    }

    fn read(&self, file: &SourceFile) -> GenesisResult<Asset> {
        let read_err = |source: io::Error| GenesisError::Read {
            path: file.disk.clone(),
            source,
        };
        let data = fs::read(&file.disk).map_err(read_err)?;
        let modified = fs::metadata(&file.disk)
            .and_then(|m| m.modified())
            .map_err(read_err)?;
        Ok(Asset::new(&file.logical.to_string_lossy(), data, modified))
    }
}

impl AssetSource for FsAssetSource {
    fn load(&self, inputs: &[PathBuf]) -> GenesisResult<Vec<Asset>> {
        let mut files = Vec::new();
        for input in inputs {
            files.extend(self.expand(input)?);
        }
        log::debug!(
            "expanded {} input(s) into {} file(s)",
            inputs.len(),
            files.len()
        );

        files.iter().map(|file| self.read(file)).collect()
    }
}

/// Join a walked child onto its input path, dropping `.` components
fn join_clean(base: &Path, relative: &Path) -> PathBuf {
    base.components()
        .chain(relative.components())
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
