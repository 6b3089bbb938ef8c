//! genesis - embed static assets in a generated Rust module
//!
//! genesis turns a list of files into Rust source that carries their bytes
//! as constants, so a program can ship as a single binary. The generated
//! module exposes name lookups, per-file metadata, a read-only virtual
//! filesystem and an HTTP file server with cache-busting hashed names.
//!
//! ```no_run
//! use genesis::{Asset, EncoderConfig, Encoder};
//! use std::time::SystemTime;
//!
//! let config = EncoderConfig::new("assets")?;
//! let mut encoder = Encoder::new(Vec::new(), config);
//! encoder.encode(Asset::new("/index.html", "<html></html>", SystemTime::now()));
//! let _module = encoder.finish()?;
//! # Ok::<(), genesis::GenesisError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod emit;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::EncoderConfig;
pub use domain::codec::{hashed_name, literal};
pub use domain::entities::{Asset, AssetTable};
pub use domain::value_objects::{AssetName, BuildTags, ContentHash, ModTime, ModuleName};
pub use emit::{encode_all, Encoder};
pub use error::{GenesisError, GenesisResult};
