use std::{
    env,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result, bail};

use super::StructureSource;
use crate::reporter;

/// Structure source backed by `sourcekitten structure --file <path>`.
#[derive(Debug, Clone)]
pub struct SourceKitten {
    program: PathBuf,
}

impl SourceKitten {
    /// Use the parser binary at `program` as-is.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolve `name` on the search path.
    ///
    /// A missing parser is a configuration error: nothing can be generated
    /// without it, so this fails before any file is touched.
    pub fn locate(name: &str) -> Result<Self> {
        match find_executable(name) {
            Some(program) => Ok(Self::new(program)),
            None => bail!("Missing {name}. Install it (e.g. `brew install {name}`) and make sure it is on PATH."),
        }
    }
}

impl StructureSource for SourceKitten {
    fn dump(&self, file: &Path) -> Result<String> {
        let output = Command::new(&self.program)
            .arg("structure")
            .arg("--file")
            .arg(file)
            .output()
            .with_context(|| format!("Failed to run {}", self.program.display()))?;

        // The parser also exits non-zero for recoverable problems, so failures
        // are reported and whatever it printed is still used.
        if !output.status.success() {
            let status = match output.status.code() {
                Some(code) => format!("exit code {code}"),
                None => "terminated by signal".to_string(),
            };
            reporter::warning(&format!(
                "{} {} for {}",
                self.program.display(),
                status,
                file.display()
            ));
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            reporter::warning(&format!(
                "{} reported for {}:\n{}",
                self.program.display(),
                file.display(),
                stderr.trim_end()
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Find an executable by name on `PATH`.
///
/// Names containing a path separator are checked directly instead.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    let search_path = env::var_os("PATH")?;
    let file_name = format!("{name}{}", env::consts::EXE_SUFFIX);
    env::split_paths(&search_path)
        .map(|dir| dir.join(&file_name))
        .find(|path| is_executable(path))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
