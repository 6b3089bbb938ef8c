//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Reading input trees and writing output files
//! - `manifest` - JSON map from logical names to hash-embedded names

pub mod fs;
pub mod manifest;

// Re-export for convenience
pub use fs::{write_atomic, FsAssetSource, Output};
pub use manifest::Manifest;
