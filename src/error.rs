use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating embedded script files
#[derive(Error, Debug)]
pub enum GenError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Failed to read file: {path}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to write file: {path}")]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Content of {path} contains the raw string terminator and cannot be wrapped")]
  DelimiterCollision { path: PathBuf },

  #[error("Invalid manifest: {0}")]
  Manifest(String),

  #[error("Manifest parse error: {0}")]
  Toml(#[from] toml::de::Error),

  #[error("Regex error: {0}")]
  Regex(#[from] regex::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GenError>;
