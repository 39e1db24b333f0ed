//! Entry point of a generation run.
//!
//! Resolves the paths, loads configuration, locates the structural parser
//! and hands over to the pipeline. Configuration problems, including a
//! missing parser, fail here before any file is touched.

use std::path::{self, Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::args::Arguments;
use crate::{
    config::{ConfigLoadResult, load_config},
    core::{GenerationSummary, SourceKitten, generate_headers},
    reporter,
};

pub fn run(
    Arguments {
        src_path,
        swift_bridging_path,
        intermediates,
    }: Arguments,
) -> Result<GenerationSummary> {
    let src_root = absolute(&src_path)?;
    let dst_root = absolute(&swift_bridging_path)?;

    if !src_root.is_dir() {
        bail!("Source path is not a directory: {}", src_root.display());
    }
    // The destination is deleted wholesale, so it must not contain the sources.
    if src_root.starts_with(&dst_root) {
        bail!(
            "Destination {} contains the source path {}",
            dst_root.display(),
            src_root.display()
        );
    }

    let ConfigLoadResult {
        config,
        path: config_path,
    } = load_config(&src_root)?;
    if let Some(config_path) = &config_path {
        reporter::progress("Using config:", config_path);
    }
    let source = SourceKitten::locate(&config.parser)?;

    generate_headers(&src_root, &dst_root, &config, &source, intermediates)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    path::absolute(path).with_context(|| format!("Invalid path: {}", path.display()))
}
