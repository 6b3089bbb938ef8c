//! Asset Table - ordered asset sequence plus a name index
//!
//! The sequence keeps every asset in input order, duplicates included. The
//! index maps each name to its most recent asset, so a later duplicate
//! shadows an earlier one on lookup while both stay in `names()`.

use std::collections::HashMap;

use super::Asset;
use crate::domain::value_objects::ModTime;

#[derive(Debug, Clone, Default)]
pub struct AssetTable {
    assets: Vec<Asset>,
    index: HashMap<String, usize>,
}

impl AssetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize, hash and append one collaborator-supplied file
    pub fn add(&mut self, path: &str, data: impl Into<Vec<u8>>, mod_time: impl Into<ModTime>) {
        self.push(Asset::new(path, data, mod_time));
    }

    /// Append an already built asset
    pub fn push(&mut self, asset: Asset) {
        self.index.insert(asset.name().to_string(), self.assets.len());
        self.assets.push(asset);
    }

    /// Names in input order, duplicates included
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().map(Asset::name)
    }

    /// Assets in input order, duplicates included
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// The asset a name resolves to (the last one added under that name)
    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.index.get(name).map(|&i| &self.assets[i])
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Number of distinct names
    pub fn unique_len(&self) -> usize {
        self.index.len()
    }
}

impl FromIterator<Asset> for AssetTable {
    fn from_iter<I: IntoIterator<Item = Asset>>(iter: I) -> Self {
        let mut table = Self::new();
        for asset in iter {
            table.push(asset);
        }
        table
    }
}
