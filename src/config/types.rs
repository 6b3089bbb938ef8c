//! Configuration file definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GenesisResult;

use super::loader::{self, ConfigWarning};
use super::EncoderConfig;

/// Contents of `genesis.toml`
///
/// Every key is optional; the CLI fills gaps from the environment and flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Name of the generated module
    pub module: Option<String>,
    /// Build tag groups
    pub tags: Vec<String>,
    /// Output file; stdout when unset
    pub output: Option<PathBuf>,
    /// Directory input paths are relative to
    pub directory: Option<PathBuf>,
    /// Hashed-name manifest file
    pub manifest: Option<PathBuf>,
    /// Input files and directories
    pub inputs: Vec<PathBuf>,
}

impl FileConfig {
    /// Load a config file, discarding warnings
    pub fn load(path: &Path) -> GenesisResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    pub fn load_with_warnings(path: &Path) -> GenesisResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Validate into the encoder's configuration
    pub fn encoder_config(&self) -> GenesisResult<EncoderConfig> {
        EncoderConfig::new(self.module.as_deref().unwrap_or_default())?.with_build_tags(&self.tags)
    }
}
