//! Generated-module emitter
//!
//! [`Encoder`] collects assets one at a time and writes the complete module
//! to its sink on [`Encoder::finish`]. [`encode_all`] does the same for a
//! table that is already built.

mod sections;

pub use sections::{
    write_asset, write_asset_map, write_asset_names, write_header, ModuleEmitter, Section,
    GENERATED_MARKER,
};

use std::io::Write;

use crate::config::EncoderConfig;
use crate::domain::entities::{Asset, AssetTable};
use crate::error::{GenesisError, GenesisResult};

/// Write the generated module for `table` to `writer`
pub fn encode_all<W: Write>(
    mut writer: W,
    config: &EncoderConfig,
    table: &AssetTable,
) -> GenesisResult<W> {
    ModuleEmitter::new(config, table)
        .emit(&mut writer)
        .and_then(|()| writer.flush())
        .map_err(GenesisError::Write)?;

    log::info!(
        "encoded {} asset(s) into module '{}'",
        table.len(),
        config.module_name()
    );
    Ok(writer)
}

/// Incremental encoder over any byte sink
///
/// Nothing is written until [`finish`](Encoder::finish): the name table
/// precedes the asset map, so every asset has to be known first.
pub struct Encoder<W: Write> {
    writer: W,
    config: EncoderConfig,
    table: AssetTable,
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W, config: EncoderConfig) -> Self {
        Self {
            writer,
            config,
            table: AssetTable::new(),
        }
    }

    /// Add one asset
    pub fn encode(&mut self, asset: Asset) {
        log::debug!(
            "encoding {} ({} bytes, sha1 {})",
            asset.name(),
            asset.size(),
            asset.hash()
        );
        self.table.push(asset);
    }

    /// Assets added so far
    pub fn table(&self) -> &AssetTable {
        &self.table
    }

    /// Write the module and hand back the sink
    pub fn finish(self) -> GenesisResult<W> {
        encode_all(self.writer, &self.config, &self.table)
    }
}
