//! Configuration module for genesis
//!
//! [`EncoderConfig`] is what the encoder needs: a module name and optional
//! build tags. The CLI builds it from layered sources:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (`GENESIS_MODULE`, `GENESIS_TAGS`)
//! 3. Config file (`genesis.toml` or `--config <path>`)

mod loader;
mod types;

pub use loader::{discover, load_with_warnings, ConfigWarning, DEFAULT_CONFIG_FILE};
pub use types::FileConfig;

use crate::domain::value_objects::{BuildTags, ModuleName};
use crate::error::GenesisResult;

/// Environment variable overriding the module name
pub const ENV_MODULE: &str = "GENESIS_MODULE";
/// Environment variable overriding the build tags (comma-separated groups)
pub const ENV_TAGS: &str = "GENESIS_TAGS";

/// Validated encoder configuration
///
/// Construction fails on a missing or non-identifier module name and on
/// build tags that have no cfg form, so no output is produced for a bad
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    module_name: ModuleName,
    build_tags: BuildTags,
}

impl EncoderConfig {
    pub fn new(module_name: &str) -> GenesisResult<Self> {
        Ok(Self {
            module_name: ModuleName::new(module_name)?,
            build_tags: BuildTags::default(),
        })
    }

    /// Replace the build tags; each entry is one tag group
    pub fn with_build_tags<S: AsRef<str>>(mut self, tags: &[S]) -> GenesisResult<Self> {
        self.build_tags = BuildTags::parse(tags)?;
        Ok(self)
    }

    pub fn module_name(&self) -> &ModuleName {
        &self.module_name
    }

    pub fn build_tags(&self) -> &BuildTags {
        &self.build_tags
    }
}

/// Apply environment variable overrides (`GENESIS_*`)
pub fn with_env_overrides(config: FileConfig) -> FileConfig {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary lookup
///
/// Split out from [`with_env_overrides`] so tests do not touch the process
/// environment.
pub fn apply_overrides(
    mut config: FileConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> FileConfig {
    if let Some(module) = lookup(ENV_MODULE).filter(|m| !m.trim().is_empty()) {
        config.module = Some(module.trim().to_string());
    }

    if let Some(tags) = lookup(ENV_TAGS) {
        config.tags = split_tag_list(&tags);
    }

    config
}

/// Split a comma-separated list of tag groups, dropping empty entries
pub fn split_tag_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
