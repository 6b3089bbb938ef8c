//! Hashed-name manifest
//!
//! A JSON object mapping every logical name to its hash-embedded name, for
//! build tooling that needs cache-busted URLs without compiling the module.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::codec::hashed_name;
use crate::domain::entities::AssetTable;
use crate::error::{GenesisError, GenesisResult};

use super::fs::write_atomic;

/// Logical name to hash-embedded name, sorted by logical name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, String>,
}

impl Manifest {
    /// One entry per distinct name; a later duplicate replaces an earlier one
    pub fn from_table(table: &AssetTable) -> Self {
        let entries = table
            .assets()
            .iter()
            .map(|asset| {
                let hashed = hashed_name::join(asset.name(), asset.hash().as_str());
                (asset.name().to_string(), hashed)
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pretty JSON with a trailing newline
    pub fn to_json(&self) -> GenesisResult<String> {
        let mut json = serde_json::to_string_pretty(self)
            .map_err(|e| GenesisError::Write(std::io::Error::other(e)))?;
        json.push('\n');
        Ok(json)
    }

    pub fn write(&self, path: &Path) -> GenesisResult<()> {
        write_atomic(path, self.to_json()?.as_bytes())?;
        log::info!("wrote manifest with {} entries to {}", self.len(), path.display());
        Ok(())
    }
}
