//! Asset entity - one file to embed
//!
//! Hash and size are derived from the data when the asset is built and are
//! never supplied by the caller.

use std::time::SystemTime;

use crate::domain::value_objects::{AssetName, ContentHash, ModTime};

/// An embedded file's content plus metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    name: AssetName,
    data: Vec<u8>,
    mod_time: ModTime,
    hash: ContentHash,
}

impl Asset {
    /// Build an asset from a collaborator-supplied path, content and mtime
    pub fn new(path: &str, data: impl Into<Vec<u8>>, mod_time: impl Into<ModTime>) -> Self {
        let data = data.into();
        Self {
            name: AssetName::new(path),
            hash: ContentHash::from_bytes(&data),
            mod_time: mod_time.into(),
            data,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn mod_time(&self) -> ModTime {
        self.mod_time
    }

    pub fn modified(&self) -> SystemTime {
        self.mod_time.to_system_time()
    }
}
