use std::io::Write;

use crate::error::Result;

/// A writer for emitting C++ header text with indentation
pub struct CodeWriter<W: Write> {
  /// The underlying writer
  writer: W,
  /// Current indentation level
  indent_level: usize,
  /// Number of spaces per indentation level
  indent_size: usize,
}

impl<W: Write> CodeWriter<W> {
  /// Create a new CodeWriter with four-space indentation
  pub fn new(writer: W) -> Self {
    Self {
      writer,
      indent_level: 0,
      indent_size: 4,
    }
  }

  /// Increase the indentation level
  pub fn indent(&mut self) {
    self.indent_level += 1;
  }

  /// Decrease the indentation level
  pub fn dedent(&mut self) {
    if self.indent_level > 0 {
      self.indent_level -= 1;
    }
  }

  /// Write each line of `content` with the current indentation, ending with a newline
  pub fn writeln(&mut self, content: &str) -> Result<()> {
    let indent = " ".repeat(self.indent_level * self.indent_size);

    for line in content.split('\n') {
      if !line.is_empty() {
        self.writer.write_all(indent.as_bytes())?;
        self.writer.write_all(line.as_bytes())?;
      }
      self.writer.write_all(b"\n")?;
    }

    Ok(())
  }

  /// Write content verbatim, without indentation or a trailing newline
  pub fn write_raw(&mut self, content: &str) -> Result<()> {
    self.writer.write_all(content.as_bytes())?;
    Ok(())
  }

  /// Write a newline
  pub fn newline(&mut self) -> Result<()> {
    self.writer.write_all(b"\n")?;
    Ok(())
  }

  /// Write a #pragma once directive
  pub fn write_pragma_once(&mut self) -> Result<()> {
    self.writeln("#pragma once")
  }

  /// Write a #include directive
  pub fn write_include(&mut self, header: &str, is_system: bool) -> Result<()> {
    if is_system {
      self.writeln(&format!("#include <{}>", header))
    } else {
      self.writeln(&format!("#include \"{}\"", header))
    }
  }

  /// Write a #define directive
  pub fn write_define(&mut self, name: &str, value: Option<&str>) -> Result<()> {
    match value {
      Some(val) => self.writeln(&format!("#define {} {}", name, val)),
      None => self.writeln(&format!("#define {}", name)),
    }
  }

  /// Begin a namespace block
  pub fn begin_namespace(&mut self, name: &str) -> Result<()> {
    self.writeln(&format!("namespace {} {{", name))
  }

  /// End a namespace block
  pub fn end_namespace(&mut self) -> Result<()> {
    self.writeln("}")
  }

  /// Flush the underlying writer
  pub fn flush(&mut self) -> Result<()> {
    self.writer.flush()?;
    Ok(())
  }

  /// Consume the writer and return the underlying sink
  pub fn into_inner(self) -> W {
    self.writer
  }
}
