//! TOML parsing for `.incline.toml`.

use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw, unmerged contents of one configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// The `[settings]` table.
    pub settings: RawSettings,
    /// The `[filetypes.<name>]` tables.
    pub filetypes: HashMap<String, RawProfile>,
}

/// Raw `[settings]` table; unset fields fall through to the next file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    /// Directory names to exclude from indexing anywhere in the tree.
    pub ignore_dirs: Option<Vec<String>>,
}

/// Raw `[filetypes.<name>]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProfile {
    /// Accepted extensions, without the leading dot; `""` means no
    /// extension. Unset falls back to the built-in family default.
    pub extensions: Option<Vec<String>>,
    /// Search roots for this filetype.
    pub roots: Option<Vec<String>>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_str(&content).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string.
pub fn parse_config_str(content: &str) -> Result<RawConfig, toml::de::Error> {
    toml::from_str(content)
}
