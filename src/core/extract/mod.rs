//! Structural data extraction for single source files.
//!
//! Extraction is split in two: a [`StructureSource`] produces the raw
//! structural dump for a file (the production source spawns `sourcekitten`),
//! and [`process_file`] decides which files to feed it, persists intermediates
//! and hands the dump to the collector.

pub mod source_kitten;

pub use source_kitten::{SourceKitten, find_executable};

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    core::collect::{Namespace, collect_declarations},
    reporter,
};

/// Produces the structural dump of one source file.
pub trait StructureSource {
    /// Return the raw, tree-shaped description of `file`'s declarations.
    ///
    /// Implementations report recoverable problems themselves and return
    /// whatever output they obtained; an `Err` aborts the run.
    fn dump(&self, file: &Path) -> Result<String>;
}

/// Per-run settings for [`process_file`].
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions<'a> {
    /// Extension (without the dot) of files worth extracting.
    pub source_extension: &'a str,
    /// When set, the raw dump is written next to the source file with this
    /// extension appended.
    pub intermediate_extension: Option<&'a str>,
}

/// Check whether the file name of `path` ends with `.<extension>`.
///
/// A bare `.swift` counts, unlike with [`Path::extension`].
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(extension))
        .is_some_and(|stem| stem.ends_with('.'))
}

/// Path of the intermediate dump for `file`, e.g. `Foo.swift` -> `Foo.swift.ast`.
pub fn intermediate_path(file: &Path, extension: &str) -> PathBuf {
    let mut path: OsString = file.as_os_str().to_owned();
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}

/// Extract the declarations of `file` into `namespace`.
///
/// Files without the configured source extension are skipped without touching
/// the source. Returns whether the file was processed.
pub fn process_file(
    file: &Path,
    source: &dyn StructureSource,
    namespace: &mut Namespace,
    options: ExtractOptions<'_>,
) -> Result<bool> {
    if !has_extension(file, options.source_extension) {
        return Ok(false);
    }

    reporter::progress("Extracting Swift bridging info for:", file);
    let dump = source.dump(file)?;

    if let Some(extension) = options.intermediate_extension {
        let path = intermediate_path(file, extension);
        reporter::progress("Writing intermediate:", &path);
        fs::write(&path, &dump)
            .with_context(|| format!("Failed to write intermediate file: {}", path.display()))?;
    }

    collect_declarations(&dump, namespace)
        .with_context(|| format!("Failed to collect declarations from {}", file.display()))?;

    Ok(true)
}
