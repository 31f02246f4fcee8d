//! Configuration system for incline.
//!
//! incline uses TOML configuration files named `.incline.toml`.
//! Configuration is resolved by walking up the directory tree from the
//! current working directory, collecting any `.incline.toml` files found,
//! then loading `~/.incline.toml` as the global config with lowest
//! precedence. The nearest definition of a setting or filetype profile
//! wins.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod roots;

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::merge_configs;
pub use parse::{RawConfig, RawProfile, RawSettings, parse_config_file, parse_config_str};
pub use roots::normalize_roots;

/// Top-level merged configuration for incline.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// General settings.
    pub settings: Settings,
    /// Per-filetype profiles keyed by filetype name.
    pub filetypes: HashMap<String, FiletypeProfile>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant
    /// `.incline.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence
    /// first. This is primarily useful for testing.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed: Vec<RawConfig> = files
            .iter()
            .map(|path| parse_config_file(path))
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(merge_configs(&parsed))
    }

    /// Returns the profile for a filetype, falling back to the built-in
    /// family defaults for unconfigured filetypes.
    pub fn profile(&self, filetype: &str) -> Result<FiletypeProfile, ConfigError> {
        if let Some(profile) = self.filetypes.get(filetype) {
            return Ok(profile.clone());
        }
        builtin_profile(filetype).ok_or_else(|| ConfigError::UnknownFiletype {
            filetype: filetype.to_string(),
        })
    }
}

/// General settings for incline.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory names excluded from indexing anywhere in the tree.
    pub ignore_dirs: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ignore_dirs: vec![String::from(".git")],
        }
    }
}

/// Accepted extensions and search roots for one filetype.
#[derive(Debug, Clone, Default)]
pub struct FiletypeProfile {
    /// Accepted file extensions, without the leading dot; `""` means "no
    /// extension" (extensionless headers).
    pub extensions: Vec<String>,
    /// Search roots configured for this filetype, in priority order.
    pub roots: Vec<PathBuf>,
}

/// Returns the built-in profile for the clang filetype family.
///
/// `c` accepts `.h`; `cpp` and `cuda` additionally accept `.hpp`, `.hxx`
/// and extensionless headers. Other filetypes have no built-in profile.
pub fn builtin_profile(filetype: &str) -> Option<FiletypeProfile> {
    let extensions: &[&str] = match filetype {
        "c" => &["h"],
        "cpp" | "cuda" => &["", "h", "hpp", "hxx"],
        _ => return None,
    };
    Some(FiletypeProfile {
        extensions: extensions.iter().map(|ext| (*ext).to_string()).collect(),
        roots: Vec::new(),
    })
}
