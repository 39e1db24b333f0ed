//! Whole-run orchestration: discover directories, extract, generate.
//!
//! Everything runs sequentially; each parser invocation completes before the
//! next file is looked at. Namespaces are per directory and never merged.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;

use super::{
    collect::Namespace,
    extract::{ExtractOptions, StructureSource, process_file},
    file_scanner::{SourceDir, discover_directories, scan_files},
    generate::{HeaderOptions, write_header},
};
use crate::{config::Config, reporter};

/// Outcome of a complete generation run.
#[derive(Debug, Default)]
pub struct GenerationSummary {
    /// Number of source directories visited.
    pub directories: usize,
    /// Number of source files handed to the structure source.
    pub files_processed: usize,
    /// Headers written, in the order they were generated.
    pub headers: Vec<PathBuf>,
}

/// Settings shared by every directory of a run.
struct RunContext<'a> {
    config: &'a Config,
    source: &'a dyn StructureSource,
    ignores: Vec<Pattern>,
    intermediates: bool,
}

impl RunContext<'_> {
    fn extract_options(&self) -> ExtractOptions<'_> {
        ExtractOptions {
            source_extension: &self.config.source_extension,
            intermediate_extension: self
                .intermediates
                .then_some(self.config.intermediate_extension.as_str()),
        }
    }

    fn header_options(&self) -> HeaderOptions<'_> {
        HeaderOptions {
            base_class: &self.config.base_class,
            copyright: &self.config.copyright,
            generator: env!("CARGO_PKG_NAME"),
            regenerate_command: &self.config.regenerate_command,
        }
    }
}

/// Regenerate every bridging header under `dst_root`.
///
/// The destination tree is deleted up front, so headers of directories that
/// no longer declare anything disappear. Writes are not transactional: an
/// error part-way leaves a partially regenerated tree.
pub fn generate_headers(
    src_root: &Path,
    dst_root: &Path,
    config: &Config,
    source: &dyn StructureSource,
    intermediates: bool,
) -> Result<GenerationSummary> {
    let ctx = RunContext {
        config,
        source,
        ignores: config.ignore_patterns()?,
        intermediates,
    };

    if dst_root.exists() {
        fs::remove_dir_all(dst_root)
            .with_context(|| format!("Failed to remove {}", dst_root.display()))?;
    }

    let mut summary = GenerationSummary::default();
    for dir in discover_directories(src_root, config)? {
        let (files_processed, header) = process_dir(&dir, dst_root, &ctx)?;
        summary.directories += 1;
        summary.files_processed += files_processed;
        summary.headers.extend(header);
    }

    Ok(summary)
}

/// Collect one directory into a fresh namespace and write its header.
///
/// Returns the number of files processed and the header path, if one was
/// written.
fn process_dir(
    dir: &SourceDir,
    dst_root: &Path,
    ctx: &RunContext<'_>,
) -> Result<(usize, Option<PathBuf>)> {
    reporter::progress("Searching:", &dir.path);

    let mut namespace = Namespace::new();
    let mut files_processed = 0;
    for file in scan_files(&dir.path, &ctx.ignores)? {
        if process_file(&file, ctx.source, &mut namespace, ctx.extract_options())? {
            files_processed += 1;
        }
    }

    let header_path = ctx.config.header_path(dst_root, &dir.name);
    if write_header(&namespace, &header_path, &ctx.header_options())? {
        reporter::progress("Writing:", &header_path);
        Ok((files_processed, Some(header_path)))
    } else {
        reporter::skipping(&header_path, "no bridgeable declarations");
        Ok((files_processed, None))
    }
}
