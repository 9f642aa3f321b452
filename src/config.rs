use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::declarations::HeaderConfig;
use crate::error::{GenError, Result};

const FIFT_LIB_DIR: &str = "./third-party/ton/crypto/fift/lib";
const FIFT_LIB_OUT: &str = "./generated/lib";
const FIFT_LIB_FILES: [&str; 6] = [
  "Fift.fif",
  "Asm.fif",
  "Color.fif",
  "Lists.fif",
  "GetOpt.fif",
  "TonUtil.fif",
];

const SCRIPT_DIR: &str = "./fif-scripts";
const SCRIPT_OUT: &str = "./generated/fif-scripts";
const SCRIPT_FILES: [&str; 6] = [
  "export-cfg.fif",
  "import-cfg.fif",
  "extmsg-cfg.fif",
  "dataof-cfg.fif",
  "extmsg-chk.fif",
  "dataof-chk.fif",
];

/// Default location of the generated header
pub const DEFAULT_HEADER: &str = "./generated/generated.hpp";

/// Default prefix joined to each destination path inside `#include`
pub const DEFAULT_INCLUDE_PREFIX: &str = ".";

/// Substrings removed from every script before embedding
pub const DEFAULT_STRIP_MARKERS: [&str; 3] =
  ["\"Lists.fif\" include", "namespace Asm", "Asm definitions"];

/// One source script and the file its wrapped text is written to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessEntry {
  pub source: PathBuf,
  pub dest: PathBuf,
}

impl ProcessEntry {
  /// Create a new entry
  pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
    Self {
      source: source.into(),
      dest: dest.into(),
    }
  }
}

/// Everything the generator needs for one run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
  /// Directory all configured paths are resolved against
  pub root: PathBuf,
  /// Entries in processing and declaration order
  pub entries: Vec<ProcessEntry>,
  /// Path of the aggregated header
  pub header: PathBuf,
  /// Prefix joined to each destination path in the header's `#include`
  pub include_prefix: String,
  /// Substrings removed from each script
  pub strip_markers: Vec<String>,
  /// Names used by the header template
  pub header_config: HeaderConfig,
}

impl GeneratorConfig {
  /// Create a config with default header settings for the given entries
  pub fn new(root: impl Into<PathBuf>, entries: Vec<ProcessEntry>) -> Self {
    Self {
      root: root.into(),
      entries,
      header: PathBuf::from(DEFAULT_HEADER),
      include_prefix: DEFAULT_INCLUDE_PREFIX.to_string(),
      strip_markers: DEFAULT_STRIP_MARKERS.iter().map(|s| s.to_string()).collect(),
      header_config: HeaderConfig::default(),
    }
  }

  /// The built-in table: the Fift library followed by the config scripts
  pub fn builtin(root: impl Into<PathBuf>) -> Self {
    let lib = FIFT_LIB_FILES.iter().map(|name| {
      ProcessEntry::new(
        format!("{}/{}", FIFT_LIB_DIR, name),
        format!("{}/{}", FIFT_LIB_OUT, name),
      )
    });
    let scripts = SCRIPT_FILES.iter().map(|name| {
      ProcessEntry::new(
        format!("{}/{}", SCRIPT_DIR, name),
        format!("{}/{}", SCRIPT_OUT, name),
      )
    });

    Self::new(root, lib.chain(scripts).collect())
  }

  /// Load a config from a TOML manifest file
  pub fn from_manifest_file(root: impl Into<PathBuf>, path: &Path) -> Result<Self> {
    let text = fs::read_to_string(path).map_err(|source| GenError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_manifest_str(root, &text)
  }

  /// Parse a config from TOML manifest text
  pub fn from_manifest_str(root: impl Into<PathBuf>, text: &str) -> Result<Self> {
    let manifest: Manifest = toml::from_str(text)?;

    if manifest.entry.is_empty() {
      return Err(GenError::Manifest(
        "at least one [[entry]] is required".to_string(),
      ));
    }

    let mut config = Self::new(root, manifest.entry);
    if let Some(header) = manifest.header {
      config.header = header;
    }
    if let Some(prefix) = manifest.include_prefix {
      config.include_prefix = prefix;
    }
    if let Some(strip) = manifest.strip {
      config.strip_markers = strip;
    }
    if let Some(namespace) = manifest.namespace {
      config.header_config.namespace = namespace;
    }

    Ok(config)
  }

  /// Resolve a configured path against the root directory
  pub fn resolve(&self, path: &Path) -> PathBuf {
    self.root.join(path)
  }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
  header: Option<PathBuf>,
  include_prefix: Option<String>,
  namespace: Option<String>,
  strip: Option<Vec<String>>,
  #[serde(default)]
  entry: Vec<ProcessEntry>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_builtin_table_order() {
    let config = GeneratorConfig::builtin(".");
    assert_eq!(config.entries.len(), 12);
    assert_eq!(
      config.entries[0],
      ProcessEntry::new(
        "./third-party/ton/crypto/fift/lib/Fift.fif",
        "./generated/lib/Fift.fif"
      )
    );
    assert_eq!(
      config.entries[6],
      ProcessEntry::new(
        "./fif-scripts/export-cfg.fif",
        "./generated/fif-scripts/export-cfg.fif"
      )
    );
    assert_eq!(
      config.entries[11].source,
      PathBuf::from("./fif-scripts/dataof-chk.fif")
    );
    assert_eq!(config.header, PathBuf::from("./generated/generated.hpp"));
  }

  #[test]
  fn test_manifest_defaults() {
    let text = r#"
[[entry]]
source = "a.fif"
dest = "out/a.fif"
"#;
    let config = GeneratorConfig::from_manifest_str("/work", text).unwrap();
    assert_eq!(config.entries, vec![ProcessEntry::new("a.fif", "out/a.fif")]);
    assert_eq!(config.header, PathBuf::from(DEFAULT_HEADER));
    assert_eq!(config.strip_markers.len(), 3);
    assert_eq!(config.header_config, HeaderConfig::default());
    assert_eq!(config.resolve(Path::new("a.fif")), PathBuf::from("/work/a.fif"));
  }

  #[test]
  fn test_manifest_overrides() {
    let text = r#"
header = "gen/decl.hpp"
include_prefix = ""
namespace = "Scripts"
strip = ["DROP"]

[[entry]]
source = "b.fif"
dest = "gen/b.fif"

[[entry]]
source = "a.fif"
dest = "gen/a.fif"
"#;
    let config = GeneratorConfig::from_manifest_str(".", text).unwrap();
    assert_eq!(config.header, PathBuf::from("gen/decl.hpp"));
    assert_eq!(config.include_prefix, "");
    assert_eq!(config.header_config.namespace, "Scripts");
    assert_eq!(config.strip_markers, vec!["DROP".to_string()]);
    assert_eq!(config.entries[0].source, PathBuf::from("b.fif"));
    assert_eq!(config.entries[1].source, PathBuf::from("a.fif"));
  }

  #[test]
  fn test_manifest_requires_entries() {
    let result = GeneratorConfig::from_manifest_str(".", "header = \"x.hpp\"\n");
    assert!(matches!(result, Err(GenError::Manifest(_))));
  }

  #[test]
  fn test_manifest_rejects_unknown_keys() {
    let result = GeneratorConfig::from_manifest_str(".", "headr = \"x.hpp\"\n");
    assert!(matches!(result, Err(GenError::Toml(_))));
  }
}
