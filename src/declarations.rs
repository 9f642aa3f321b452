use std::path::Path;

use crate::code_writer::CodeWriter;
use crate::error::Result;
use crate::utils::get_file_name;

/// Names used by the outer header template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
  /// Namespace wrapping every declaration
  pub namespace: String,
  /// Macro declaring a string constant
  pub string_macro: String,
  /// Macro declaring the paired input stream
  pub stream_macro: String,
}

impl Default for HeaderConfig {
  fn default() -> Self {
    Self {
      namespace: "FiftDecl".to_string(),
      string_macro: "DECL_FIF".to_string(),
      stream_macro: "DECL_IS".to_string(),
    }
  }
}

/// Derive the declaration name from the last segment of a source path.
///
/// `Fift.fif` becomes `FIFT_FIF` and `export-cfg.fif` becomes `EXPORT_CFG_FIF`.
/// The result is not checked to be a valid identifier.
pub fn declaration_name(source: &Path) -> String {
  get_file_name(source)
    .unwrap_or_default()
    .to_uppercase()
    .replace(['.', '-'], "_")
}

/// The constant and stream declarations emitted for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationBlock {
  /// Identifier of the constant
  pub name: String,
  /// Path placed in the `#include` that initialises the constant
  pub include_path: String,
}

impl DeclarationBlock {
  /// Create a new declaration block
  pub fn new(name: impl Into<String>, include_path: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      include_path: include_path.into(),
    }
  }

  /// Render the block with the macros named in `header`
  pub fn render(&self, header: &HeaderConfig) -> Result<String> {
    let mut writer = CodeWriter::new(Vec::new());

    writer.newline()?;
    writer.writeln(&format!("{}({}) (", header.string_macro, self.name))?;
    writer.indent();
    writer.write_include(&self.include_path, false)?;
    writer.dedent();
    writer.writeln(");")?;
    writer.newline()?;
    writer.writeln(&format!("{}({});", header.stream_macro, self.name))?;

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
  }
}

/// Render the complete header around an accumulated declaration buffer
pub fn render_header(header: &HeaderConfig, declarations: &str) -> Result<String> {
  let mut writer = CodeWriter::new(Vec::new());

  writer.newline()?;
  writer.write_pragma_once()?;
  writer.newline()?;
  writer.write_define(
    &format!("{}(S)", header.string_macro),
    Some("const std::string S = std::string"),
  )?;
  writer.write_define(
    &format!("{}(X)", header.stream_macro),
    Some(&format!(
      "std::istringstream is_##X({}::X)",
      header.namespace
    )),
  )?;
  writer.newline()?;
  writer.begin_namespace(&header.namespace)?;
  writer.write_raw(declarations)?;
  writer.newline()?;
  writer.end_namespace()?;
  writer.flush()?;

  Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}
