// Embeds Fift scripts into C++ sources as raw string constants

mod code_writer;
mod config;
mod declarations;
mod error;
mod generator;
pub mod preprocess;
mod utils;

pub use code_writer::CodeWriter;
pub use config::{GeneratorConfig, ProcessEntry, DEFAULT_HEADER, DEFAULT_STRIP_MARKERS};
pub use declarations::{declaration_name, render_header, DeclarationBlock, HeaderConfig};
pub use error::{GenError, Result};
pub use generator::{Generator, RunSummary};
