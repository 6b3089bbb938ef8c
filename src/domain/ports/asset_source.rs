//! AssetSource port - abstraction for loading the files to embed
//!
//! The encoder only ever sees assets in the order a source returns them,
//! so implementations must be deterministic.

use std::path::PathBuf;

use crate::domain::entities::Asset;
use crate::error::GenesisResult;

/// Supplies assets for a set of input paths
pub trait AssetSource {
    /// Load every asset reachable from `inputs`, in input order
    fn load(&self, inputs: &[PathBuf]) -> GenesisResult<Vec<Asset>>;
}
