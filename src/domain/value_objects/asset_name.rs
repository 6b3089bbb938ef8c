//! Asset Name Value Object
//!
//! The logical name an asset is embedded under: forward-slash separated and
//! always rooted at `/`.

use std::fmt;
use std::path::{Path, MAIN_SEPARATOR};

/// Normalized logical asset name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetName(String);

impl AssetName {
    /// Normalize a collaborator-supplied path string.
    ///
    /// Platform separators become `/` and a leading `/` is added when missing.
    /// Nothing else is validated or cleaned.
    pub fn new(path: &str) -> Self {
        let slashed = if MAIN_SEPARATOR == '/' {
            path.to_string()
        } else {
            path.replace(MAIN_SEPARATOR, "/")
        };
        Self(prepend_slash(slashed))
    }

    /// Normalize a filesystem path
    pub fn from_path(path: &Path) -> Self {
        Self::new(&path.to_string_lossy())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

fn prepend_slash(s: String) -> String {
    if s.starts_with('/') {
        s
    } else {
        format!("/{}", s)
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
