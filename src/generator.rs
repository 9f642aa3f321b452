use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{GeneratorConfig, ProcessEntry};
use crate::declarations::{declaration_name, render_header, DeclarationBlock};
use crate::error::{GenError, Result};
use crate::preprocess::{expand_includes, strip_markers, wrap_raw};
use crate::utils::{read_text, write_text};

/// Files written by a successful run, in write order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
  pub wrapped: Vec<PathBuf>,
  pub header: PathBuf,
}

/// Turns configured scripts into wrapped files and one declarations header
#[derive(Debug)]
pub struct Generator {
  config: GeneratorConfig,
}

impl Generator {
  /// Create a new Generator
  pub fn new(config: GeneratorConfig) -> Self {
    Self { config }
  }

  /// Produce the wrapped text for one entry. Only reads files.
  pub fn wrap_entry(&self, entry: &ProcessEntry) -> Result<String> {
    let source = self.config.resolve(&entry.source);
    let text = read_text(&source)?;
    let text = strip_markers(&text, &self.config.strip_markers);

    let text = expand_includes(&text, |path| {
      debug!("including {}", path);
      read_text(&self.config.resolve(Path::new(path)))
    })?;

    wrap_raw(&text).ok_or(GenError::DelimiterCollision { path: source })
  }

  /// Process one entry: write its wrapped file and return its declaration block.
  ///
  /// Nothing is written when reading or wrapping fails.
  pub fn process_entry(&self, entry: &ProcessEntry) -> Result<DeclarationBlock> {
    info!(
      "generating {} -> {}",
      entry.source.display(),
      entry.dest.display()
    );

    let wrapped = self.wrap_entry(entry)?;
    let name = declaration_name(&entry.source);

    let dest = self.config.resolve(&entry.dest);
    write_text(&dest, &wrapped)?;
    debug!("wrote {} bytes to {}", wrapped.len(), dest.display());

    let include_path = format!(
      "{}{}",
      self.config.include_prefix,
      entry.dest.to_string_lossy()
    );
    Ok(DeclarationBlock::new(name, include_path))
  }

  /// Write the wrapped file of every entry in order, returning the
  /// accumulated declaration buffer
  pub fn process_all(&self) -> Result<String> {
    let header_config = &self.config.header_config;

    self
      .config
      .entries
      .iter()
      .try_fold(String::new(), |mut buffer, entry| {
        let block = self.process_entry(entry)?;
        buffer.push_str(&block.render(header_config)?);
        Ok::<_, GenError>(buffer)
      })
  }

  /// Process every entry in order, then write the header.
  ///
  /// The first failure aborts the run; files written for earlier entries
  /// are left in place and the header is not written.
  pub fn run(&self) -> Result<RunSummary> {
    let declarations = self.process_all()?;
    let header_text = render_header(&self.config.header_config, &declarations)?;

    let header = self.config.resolve(&self.config.header);
    write_text(&header, &header_text)?;
    info!("wrote header {}", header.display());

    Ok(RunSummary {
      wrapped: self
        .config
        .entries
        .iter()
        .map(|entry| self.config.resolve(&entry.dest))
        .collect(),
      header,
    })
  }
}
