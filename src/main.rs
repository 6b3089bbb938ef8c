//! genesis CLI - embed static assets in a generated Rust module
//!
//! Usage: genesis [OPTIONS] <PATH>...
//!
//! Every file named (directories recursively) is embedded in a single
//! generated module written to stdout or `-o <FILE>`.

mod cli;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;

use genesis::application::{GenerateOptions, GenerateUseCase};
use genesis::config::{self, FileConfig};
use genesis::infrastructure::{FsAssetSource, Output};

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

/// `-v` count raises the level; `RUST_LOG` overrides it
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli)?;

    // Validate before touching any input.
    let encoder_config = settings.encoder_config()?;
    if settings.inputs.is_empty() {
        bail!("no input paths given (usage: genesis -m <NAME> <PATH>...)");
    }

    let directory = settings.directory.as_deref();
    let source = match directory {
        Some(dir) => FsAssetSource::with_root(dir),
        None => FsAssetSource::new(),
    };
    let output = Output::from_path(settings.output.as_deref().map(|p| relative_to(directory, p)));
    let options = GenerateOptions::new(settings.inputs.clone())
        .with_output(output)
        .with_manifest(settings.manifest.as_deref().map(|p| relative_to(directory, p)));

    let result = GenerateUseCase::new(source, encoder_config)
        .execute(&options)
        .context("failed to generate asset module")?;

    log::info!(
        "embedded {} asset(s) ({} distinct) into {} bytes",
        result.assets,
        result.unique_names,
        result.bytes_written
    );
    Ok(())
}

/// Config file, then `GENESIS_*` environment variables, then flags
fn load_settings(cli: Cli) -> Result<FileConfig> {
    let file_config = match cli.config_path() {
        Some(path) => {
            let (loaded, warnings) = config::load_with_warnings(&path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            for warning in &warnings {
                log::warn!("{}", warning);
            }
            log::debug!("loaded config from {}", path.display());
            loaded
        }
        None => FileConfig::default(),
    };

    Ok(cli.merge_into(config::with_env_overrides(file_config)))
}

/// Output paths follow `-C` the same way inputs do
fn relative_to(directory: Option<&Path>, path: &Path) -> PathBuf {
    match directory {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}
