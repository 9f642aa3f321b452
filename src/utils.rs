use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{GenError, Result};

/// Get the file name from a path
pub fn get_file_name(path: &Path) -> Option<String> {
  path.file_name().and_then(|name| name.to_str()).map(String::from)
}

/// Pattern matching a CRLF pair or a lone CR
fn line_ending_pattern() -> Result<&'static Regex> {
  static PATTERN: OnceLock<Regex> = OnceLock::new();

  if let Some(pattern) = PATTERN.get() {
    return Ok(pattern);
  }
  let pattern = Regex::new(r"\r\n?")?;
  Ok(PATTERN.get_or_init(|| pattern))
}

/// Read a text file, normalising CRLF and lone CR line endings to LF
pub fn read_text(path: &Path) -> Result<String> {
  let text = fs::read_to_string(path).map_err(|source| GenError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  if text.contains('\r') {
    Ok(line_ending_pattern()?.replace_all(&text, "\n").into_owned())
  } else {
    Ok(text)
  }
}

/// Write a text file, creating missing parent directories
pub fn write_text(path: &Path, content: &str) -> Result<()> {
  let to_write_error = |source: std::io::Error| GenError::Write {
    path: path.to_path_buf(),
    source,
  };

  if let Some(parent) = path.parent() {
    if !parent.as_os_str().is_empty() {
      fs::create_dir_all(parent).map_err(to_write_error)?;
    }
  }

  fs::write(path, content).map_err(to_write_error)
}
