use std::path::{Path, PathBuf};

use clap::Parser;

use genesis::config::FileConfig;

/// genesis - embed static assets in a generated Rust module
#[derive(Parser, Debug)]
#[command(name = "genesis")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Directories are embedded recursively. Settings may also come from genesis.toml and GENESIS_MODULE / GENESIS_TAGS."
)]
pub struct Cli {
    /// Files and directories to embed
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Name of the generated module (required)
    #[arg(short, long, alias = "pkg", value_name = "NAME")]
    pub module: Option<String>,

    /// Output file for the generated module (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Comma-separated build tags, e.g. "linux darwin,amd64"
    #[arg(short, long, value_delimiter = ',', value_name = "TAGS")]
    pub tags: Vec<String>,

    /// Config file (default: genesis.toml in DIR or the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write a JSON map of names to hash-embedded names
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Explicit `--config`, or `genesis.toml` in the working directory
    pub fn config_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config {
            return Some(path.clone());
        }
        let dir = self.directory.as_deref().unwrap_or(Path::new("."));
        genesis::config::discover(dir)
    }

    /// Flags win over everything loaded before them
    pub fn merge_into(self, mut config: FileConfig) -> FileConfig {
        if let Some(module) = self.module {
            config.module = Some(module);
        }
        if !self.tags.is_empty() {
            config.tags = self.tags;
        }
        if self.output.is_some() {
            config.output = self.output;
        }
        if self.directory.is_some() {
            config.directory = self.directory;
        }
        if self.manifest.is_some() {
            config.manifest = self.manifest;
        }
        if !self.paths.is_empty() {
            config.inputs = self.paths;
        }
        config
    }
}
