//! File System Implementations
//!
//! `source` implements the AssetSource port over a local directory tree;
//! `output` writes generated files.

mod output;
mod source;

pub use output::{write_atomic, Output};
pub use source::FsAssetSource;
