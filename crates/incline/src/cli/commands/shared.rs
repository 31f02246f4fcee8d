//! Shared helpers for index-backed commands.

use std::env;

use incline_config::{Config, normalize_roots};
use incline_trie::ContextKey;

use crate::cli::args::ContextArgs;

/// Resolved inputs common to the index-backed commands.
pub struct CommandContext {
    /// Cache key for the indexing context.
    pub key: ContextKey,
    /// Directory names excluded from the walk.
    pub ignore_dirs: Vec<String>,
}

/// Loads configuration and resolves the indexing context for `args`.
///
/// Roots given on the command line are appended after the profile's
/// configured roots, then normalized (placeholders dropped, duplicates
/// removed).
pub fn resolve_context(args: &ContextArgs) -> Result<CommandContext, String> {
    let cwd = env::current_dir()
        .map_err(|e| format!("could not determine current directory: {e}"))?;
    let config = Config::load(&cwd).map_err(|e| e.to_string())?;
    let profile = config.profile(&args.filetype).map_err(|e| e.to_string())?;

    let mut roots = profile.roots;
    roots.extend(args.roots.iter().cloned());
    let roots = normalize_roots(&roots);

    Ok(CommandContext {
        key: ContextKey::new(args.filetype.clone(), roots, profile.extensions),
        ignore_dirs: config.settings.ignore_dirs,
    })
}
