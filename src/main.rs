//! Command-line entry point for fiftgen.
//!
//! Run with no arguments from the project root to regenerate the embedded
//! Fift library, the config scripts and `generated/generated.hpp`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fiftgen::{Generator, GeneratorConfig};
use tracing_subscriber::EnvFilter;

/// Wrap Fift scripts as C++ raw strings and emit a declarations header.
#[derive(Parser, Debug)]
#[command(name = "fiftgen")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Directory all configured paths are resolved against
  #[arg(long, default_value = ".")]
  root: PathBuf,

  /// TOML manifest replacing the built-in file table
  #[arg(long)]
  manifest: Option<PathBuf>,

  /// Enable verbose logging (debug level)
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "info" };
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();

  let config = match &cli.manifest {
    Some(path) => GeneratorConfig::from_manifest_file(&cli.root, path)
      .with_context(|| format!("Failed to load manifest: {}", path.display()))?,
    None => GeneratorConfig::builtin(&cli.root),
  };

  let summary = Generator::new(config)
    .run()
    .context("Failed to generate embedded scripts")?;

  tracing::debug!(
    "generated {} wrapped files and {}",
    summary.wrapped.len(),
    summary.header.display()
  );

  Ok(())
}
