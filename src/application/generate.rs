//! Generate Use Case
//!
//! This module defines the `GenerateUseCase` which turns a list of input
//! paths into a generated module: load assets from a source, encode them in
//! input order, write the result, and optionally write the manifest.

use std::path::PathBuf;

use crate::config::EncoderConfig;
use crate::domain::entities::AssetTable;
use crate::domain::ports::AssetSource;
use crate::emit::Encoder;
use crate::error::GenesisResult;
use crate::infrastructure::{Manifest, Output};

/// Options for the generate operation
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Input files and directories, in order
    pub inputs: Vec<PathBuf>,
    /// Destination of the generated module
    pub output: Output,
    /// Optional hashed-name manifest path
    pub manifest: Option<PathBuf>,
}

impl GenerateOptions {
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            output: Output::Stdout,
            manifest: None,
        }
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    pub fn with_manifest(mut self, manifest: Option<PathBuf>) -> Self {
        self.manifest = manifest;
        self
    }
}

/// Result of the generate operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateResult {
    /// Assets encoded, duplicates included
    pub assets: usize,
    /// Distinct asset names
    pub unique_names: usize,
    /// Size of the generated module
    pub bytes_written: usize,
}

/// Generate Use Case
pub struct GenerateUseCase<S: AssetSource> {
    source: S,
    config: EncoderConfig,
}

impl<S: AssetSource> GenerateUseCase<S> {
    pub fn new(source: S, config: EncoderConfig) -> Self {
        Self { source, config }
    }

    /// Load and encode without writing anything
    pub fn render(&self, inputs: &[PathBuf]) -> GenesisResult<(AssetTable, Vec<u8>)> {
        let assets = self.source.load(inputs)?;

        let mut encoder = Encoder::new(Vec::new(), self.config.clone());
        for asset in assets {
            encoder.encode(asset);
        }
        let table = encoder.table().clone();
        let module = encoder.finish()?;
        Ok((table, module))
    }

    /// Execute the generate operation
    pub fn execute(&self, options: &GenerateOptions) -> GenesisResult<GenerateResult> {
        let (table, module) = self.render(&options.inputs)?;

        options.output.write(&module)?;
        if let Some(path) = &options.manifest {
            Manifest::from_table(&table).write(path)?;
        }

        Ok(GenerateResult {
            assets: table.len(),
            unique_names: table.unique_len(),
            bytes_written: module.len(),
        })
    }
}
