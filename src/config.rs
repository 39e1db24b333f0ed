use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = ".bridgestubrc.json";

/// Dependency entries with this suffix are Xcode project bundles, not sources.
pub const XCODEPROJ_SUFFIX: &str = "xcodeproj";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_dependencies_dir")]
    pub dependencies_dir: String,
    #[serde(default = "default_project_dirs")]
    pub project_dirs: Vec<String>,
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    #[serde(default = "default_header_suffix")]
    pub header_suffix: String,
    #[serde(default = "default_intermediate_extension")]
    pub intermediate_extension: String,
    #[serde(default = "default_parser")]
    pub parser: String,
    #[serde(default = "default_base_class")]
    pub base_class: String,
    #[serde(default = "default_copyright")]
    pub copyright: String,
    #[serde(default = "default_regenerate_command")]
    pub regenerate_command: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_dependencies_dir() -> String {
    "Pods".to_string()
}

fn default_project_dirs() -> Vec<String> {
    ["SignalServiceKit", "SignalMessaging", "Signal"]
        .map(String::from)
        .to_vec()
}

fn default_source_extension() -> String {
    "swift".to_string()
}

fn default_header_suffix() -> String {
    "-Swift.h".to_string()
}

fn default_intermediate_extension() -> String {
    "ast".to_string()
}

fn default_parser() -> String {
    "sourcekitten".to_string()
}

fn default_base_class() -> String {
    "NSObject".to_string()
}

fn default_copyright() -> String {
    "Copyright (c) 2019 Signal. All rights reserved.".to_string()
}

fn default_regenerate_command() -> String {
    "sds_codegen.sh".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dependencies_dir: default_dependencies_dir(),
            project_dirs: default_project_dirs(),
            source_extension: default_source_extension(),
            header_suffix: default_header_suffix(),
            intermediate_extension: default_intermediate_extension(),
            parser: default_parser(),
            base_class: default_base_class(),
            copyright: default_copyright(),
            regenerate_command: default_regenerate_command(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid `ignores` globs, an empty source extension or parser,
    /// and project directory names that are not plain directory names.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.source_extension.is_empty() {
            bail!("'sourceExtension' must not be empty");
        }
        if self.parser.is_empty() {
            bail!("'parser' must not be empty");
        }

        for dir in &self.project_dirs {
            if !is_plain_dir_name(dir) {
                bail!("Invalid directory name in 'projectDirs': \"{}\"", dir);
            }
        }

        Ok(())
    }

    /// Compile the `ignores` globs. Call after [`Config::validate`].
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect()
    }

    /// Destination of the header generated for the source directory `dir_name`:
    /// `<dst_root>/<dir_name>/<dir_name><header_suffix>`.
    pub fn header_path(&self, dst_root: &Path, dir_name: &str) -> PathBuf {
        dst_root
            .join(dir_name)
            .join(format!("{}{}", dir_name, self.header_suffix))
    }
}

fn is_plain_dir_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// File the config was read from; `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
