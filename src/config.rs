//! Configuration management for genicodes.
//!
//! This module provides the [`Config`] struct which controls code generation.
//! Configuration can be loaded from:
//! - TOML files (`genicodes.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered by searching parent directories from the
//! input file up to the filesystem root, plus the user's home directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::format::{check_identifier, IntType, DEFAULT_INDENT};

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["genicodes.toml"];

/// Package (module) name used when none is given
pub const DEFAULT_PACKAGE: &str = "assets";

/// Integer type of the generated constants when none is given
pub const DEFAULT_VALUE_TYPE: &str = "u32";

/// Provenance comment placed at the top of every generated file
pub const DEFAULT_HEADER: &str = "\nThis file was generated from the original 'codepoints' file
from the material design icon fonts:
https://github.com/google/material-design-icons
";

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

// Serde default functions
fn default_package() -> String {
    DEFAULT_PACKAGE.to_string()
}
fn default_value_type() -> String {
    DEFAULT_VALUE_TYPE.to_string()
}
fn default_indent() -> usize {
    DEFAULT_INDENT
}
fn default_header() -> String {
    DEFAULT_HEADER.to_string()
}

/// Main configuration struct for genicodes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Name of the generated module (default: "assets")
    #[serde(default = "default_package")]
    pub package: String,

    /// Integer type of each constant (default: "u32")
    #[serde(default = "default_value_type")]
    pub value_type: String,

    /// Spaces per indent level in the output (default: 4)
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Treat malformed input lines as errors (default: false)
    #[serde(default)]
    pub strict: bool,

    /// Provenance comment text, one `//` line per text line
    #[serde(default = "default_header")]
    pub header: String,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    pub package: Option<String>,
    pub value_type: Option<String>,
    pub indent: Option<usize>,
    pub strict: Option<bool>,
    pub header: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            package: default_package(),
            value_type: default_value_type(),
            indent: DEFAULT_INDENT,
            strict: false,
            header: default_header(),
        }
    }
}

impl Config {
    /// Maximum indent size
    const MAX_INDENT: usize = 8;

    /// Validate configuration values
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.package.is_empty() {
            return Some("package must not be empty".to_string());
        }
        if let Err(e) = check_identifier(&self.package) {
            return Some(format!("package: {e}"));
        }
        if !IntType::NAMES.contains(&self.value_type.as_str()) {
            return Some(format!(
                "value_type `{}` is not one of {}",
                self.value_type,
                IntType::NAMES.join(", ")
            ));
        }
        if self.indent == 0 {
            return Some("indent must be at least 1".to_string());
        }
        if self.indent > Self::MAX_INDENT {
            return Some(format!(
                "indent {} exceeds maximum of {}",
                self.indent,
                Self::MAX_INDENT
            ));
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let mut config = Self::default();
        config.merge_toml_file(path)?;
        Ok(config)
    }

    /// Overlay the values set in a TOML file onto this config
    fn merge_toml_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let partial: PartialConfig = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        self.apply_partial(partial);
        Ok(())
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: PartialConfig) {
        if let Some(v) = partial.package {
            self.package = v;
        }
        if let Some(v) = partial.value_type {
            self.value_type = v;
        }
        if let Some(v) = partial.indent {
            self.indent = v;
        }
        if let Some(v) = partial.strict {
            self.strict = v;
        }
        if let Some(v) = partial.header {
            self.header = v;
        }
    }

    /// Discover config files from parent directories of a given path
    ///
    /// Searches from the root down to the file's directory, after the home
    /// directory config. Returns paths in order of priority (least specific first).
    #[must_use]
    pub fn discover_config_files(start_path: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        let start_dir = if start_path.is_file() {
            start_path.parent().map(Path::to_path_buf)
        } else if start_path.is_dir() {
            Some(start_path.to_path_buf())
        } else {
            std::env::current_dir().ok()
        };

        if let Some(dir) = start_dir {
            // A bare file name has an empty parent
            let dir = if dir.as_os_str().is_empty() {
                std::env::current_dir().unwrap_or(dir)
            } else {
                dir
            };
            let mut ancestors: Vec<PathBuf> = dir.ancestors().map(Path::to_path_buf).collect();
            ancestors.reverse();

            for ancestor in ancestors {
                for config_name in CONFIG_FILE_NAMES {
                    let config_path = ancestor.join(config_name);
                    if config_path.is_file() && !config_files.contains(&config_path) {
                        config_files.push(config_path);
                    }
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Returns the default config if no files are found.
    pub fn from_discovered_files(start_path: &Path) -> anyhow::Result<Self> {
        let mut config = Self::default();
        for path in Self::discover_config_files(start_path) {
            config.merge_toml_file(&path)?;
        }
        Ok(config)
    }
}
