//! Text passes applied to a script before it is embedded.

use crate::error::Result;

/// Line prefix that splices another file in place of the line
pub const INCLUDE_MARKER: &str = "// INCLUDE: ";

/// Opening delimiter of the raw string literal
pub const RAW_OPEN: &str = "R\"for_c++_include(";

/// Closing delimiter of the raw string literal
pub const RAW_CLOSE: &str = ")for_c++_include\"";

/// Remove every occurrence of each marker, in order
pub fn strip_markers<S: AsRef<str>>(text: &str, markers: &[S]) -> String {
  markers
    .iter()
    .fold(text.to_string(), |acc, marker| match marker.as_ref() {
      "" => acc,
      marker => acc.replace(marker, ""),
    })
}

/// Replace each include line with the text returned by `resolve`.
///
/// Expansion is single-level: spliced text is never scanned again, so
/// include lines inside an included file stay as they are.
pub fn expand_includes<F>(text: &str, mut resolve: F) -> Result<String>
where
  F: FnMut(&str) -> Result<String>,
{
  let mut out = Vec::new();

  for line in text.split('\n') {
    if line.starts_with(INCLUDE_MARKER) {
      let path = line.replace(INCLUDE_MARKER, "");
      out.push(resolve(&path)?);
    } else {
      out.push(line.to_string());
    }
  }

  Ok(out.join("\n"))
}

/// Wrap text in the raw string literal template.
///
/// Returns `None` when the text contains the closing delimiter.
pub fn wrap_raw(text: &str) -> Option<String> {
  if text.contains(RAW_CLOSE) {
    return None;
  }
  Some(format!("{}\n{}\n{}", RAW_OPEN, text, RAW_CLOSE))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::GenError;
  use std::path::PathBuf;

  #[test]
  fn test_strip_markers_everywhere() {
    let text = "\"Lists.fif\" include\nnamespace Asm x namespace Asm\n// Asm definitions here";
    let markers = ["\"Lists.fif\" include", "namespace Asm", "Asm definitions"];
    assert_eq!(strip_markers(text, &markers), "\n x \n//  here");
  }

  #[test]
  fn test_strip_ignores_empty_marker() {
    assert_eq!(strip_markers("abc", &[""]), "abc");
  }

  #[test]
  fn test_expand_include_line() {
    let text = "before\n// INCLUDE: lib/a.fif\nafter\n";
    let out = expand_includes(text, |path| {
      assert_eq!(path, "lib/a.fif");
      Ok("A1\nA2".to_string())
    })
    .unwrap();
    assert_eq!(out, "before\nA1\nA2\nafter\n");
  }

  #[test]
  fn test_expand_is_single_level() {
    let text = "// INCLUDE: outer.fif";
    let out = expand_includes(text, |_| Ok("x\n// INCLUDE: inner.fif".to_string())).unwrap();
    assert_eq!(out, "x\n// INCLUDE: inner.fif");
  }

  #[test]
  fn test_include_marker_removed_throughout_line() {
    let out = expand_includes("// INCLUDE: a// INCLUDE: b.fif", |path| {
      assert_eq!(path, "ab.fif");
      Ok("AB".to_string())
    })
    .unwrap();
    assert_eq!(out, "AB");
  }

  #[test]
  fn test_marker_must_start_line() {
    let text = "  // INCLUDE: a.fif\n//INCLUDE: b.fif";
    let out = expand_includes(text, |_| panic!("nothing should be resolved")).unwrap();
    assert_eq!(out, text);
  }

  #[test]
  fn test_expand_propagates_error() {
    let result = expand_includes("// INCLUDE: gone.fif", |path| {
      Err(GenError::Read {
        path: PathBuf::from(path),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
      })
    });
    assert!(matches!(result, Err(GenError::Read { .. })));
  }

  #[test]
  fn test_wrap_raw() {
    assert_eq!(
      wrap_raw("a\nb").unwrap(),
      "R\"for_c++_include(\na\nb\n)for_c++_include\""
    );
    assert!(wrap_raw("x )for_c++_include\" y").is_none());
  }
}
