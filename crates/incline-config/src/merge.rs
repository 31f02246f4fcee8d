//! Precedence merge of parsed configuration files.
//!
//! Files are provided highest precedence first (nearest to the working
//! directory, global last). The nearest definition of a setting or of a
//! filetype profile wins outright; profiles are not merged field-by-field
//! across files.

use std::{collections::HashMap, path::PathBuf};

use crate::{
    Config, FiletypeProfile, Settings, builtin_profile,
    parse::{RawConfig, RawProfile},
};

/// Merges parsed configurations into the effective [`Config`].
pub fn merge_configs(parsed: &[RawConfig]) -> Config {
    let mut settings = Settings::default();
    let mut ignore_seen = false;
    let mut filetypes: HashMap<String, FiletypeProfile> = HashMap::new();

    for raw in parsed {
        if !ignore_seen && let Some(dirs) = &raw.settings.ignore_dirs {
            settings.ignore_dirs = dirs.clone();
            ignore_seen = true;
        }
        for (name, profile) in &raw.filetypes {
            filetypes
                .entry(name.clone())
                .or_insert_with(|| resolve_profile(name, profile));
        }
    }

    Config {
        settings,
        filetypes,
    }
}

/// Fills a raw profile's unset fields from the built-in family defaults.
fn resolve_profile(name: &str, raw: &RawProfile) -> FiletypeProfile {
    let fallback = builtin_profile(name).unwrap_or_default();
    FiletypeProfile {
        extensions: raw.extensions.clone().unwrap_or(fallback.extensions),
        roots: raw
            .roots
            .clone()
            .unwrap_or_default()
            .iter()
            .map(PathBuf::from)
            .collect(),
    }
}
