//! Search-root normalization.
//!
//! Collaborator-supplied root lists can contain placeholder tokens (empty
//! string, `.`, `*`, `**`) and duplicates. The trie layer expects a clean,
//! ordered root set, so normalization happens here, before any path reaches
//! the index.

use std::path::PathBuf;

/// Placeholder tokens that never name a real search root.
const PLACEHOLDERS: &[&str] = &["", ".", "*", "**"];

/// Drops placeholder tokens and duplicate roots, preserving order.
///
/// The first occurrence of a duplicated root wins, keeping the caller's
/// priority order intact.
pub fn normalize_roots(roots: &[PathBuf]) -> Vec<PathBuf> {
    let mut normalized: Vec<PathBuf> = Vec::with_capacity(roots.len());
    for root in roots {
        let text = root.to_string_lossy();
        if PLACEHOLDERS.contains(&text.as_ref()) {
            continue;
        }
        if normalized.contains(root) {
            continue;
        }
        normalized.push(root.clone());
    }
    normalized
}
