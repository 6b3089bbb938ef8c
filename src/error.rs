//! Error types for genesis
//!
//! Uses `thiserror` for library errors. The binary wraps these with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for genesis operations
pub type GenesisResult<T> = Result<T, GenesisError>;

/// Main error type for genesis operations
#[derive(Error, Debug)]
pub enum GenesisError {
    /// No module name was configured
    #[error("module name required")]
    MissingModuleName,

    /// Module name is not usable as a Rust identifier
    #[error("invalid module name '{name}': must be a Rust identifier")]
    InvalidModuleName { name: String },

    /// Build tag cannot be expressed as a cfg predicate
    #[error("invalid build tag '{tag}'")]
    InvalidBuildTag { tag: String },

    /// Input path could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },

    /// Output sink failed
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),

    /// Escaped literal is not a sequence of `\xHH` groups
    #[error("invalid escaped literal at offset {offset}")]
    InvalidLiteral { offset: usize },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },
}
