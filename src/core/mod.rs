//! Core generation engine.
//!
//! ## Module Structure
//!
//! - `extract`: Run the structural parser over single source files
//! - `collect`: Turn structural dumps into per-directory namespaces
//! - `generate`: Render namespaces into bridging headers
//! - `file_scanner`: Discover source directories and their files
//! - `pipeline`: Drive a complete run over all directories

pub mod collect;
pub mod extract;
pub mod file_scanner;
pub mod generate;
pub mod pipeline;

pub use collect::{DeclarationKind, Namespace, StructureNode};
pub use extract::{SourceKitten, StructureSource};
pub use pipeline::{GenerationSummary, generate_headers};
