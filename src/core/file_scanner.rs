use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

use crate::{
    config::{Config, XCODEPROJ_SUFFIX},
    reporter,
};

/// A source directory that gets its own bridging header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDir {
    /// Directory name; also names the generated header.
    pub name: String,
    pub path: PathBuf,
}

/// List the directories to generate headers for.
///
/// Dependency directories (sorted by name, skipping Xcode project bundles and
/// plain files) come first, followed by the configured project directories
/// in configuration order. Project directories are listed even if they do not
/// exist; scanning them simply yields nothing.
pub fn discover_directories(src_root: &Path, config: &Config) -> Result<Vec<SourceDir>> {
    let mut dirs = dependency_directories(&src_root.join(&config.dependencies_dir))?;

    dirs.extend(config.project_dirs.iter().map(|name| SourceDir {
        name: name.clone(),
        path: src_root.join(name),
    }));

    Ok(dirs)
}

fn dependency_directories(deps_root: &Path) -> Result<Vec<SourceDir>> {
    let entries = match fs::read_dir(deps_root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            reporter::warning(&format!(
                "Dependencies directory does not exist: {}",
                deps_root.display()
            ));
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to read dependencies directory: {}", deps_root.display())
            });
        }
    };

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| {
            format!("Failed to read dependencies directory: {}", deps_root.display())
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(XCODEPROJ_SUFFIX) {
            continue;
        }
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        dirs.push(SourceDir { name, path });
    }
    dirs.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(dirs)
}

/// Recursively list the files under `dir` in a stable, name-sorted order.
///
/// Files whose path matches one of `ignores` are left out. A missing `dir`
/// yields no files.
pub fn scan_files(dir: &Path, ignores: &[Pattern]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk directory: {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if ignores.iter().any(|p| p.matches_path(path)) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    Ok(files)
}
