//! Filesystem walking for the include trie.
//!
//! Walks a set of search roots, following symbolic links, and yields the
//! root-relative segment paths of every file whose extension is accepted.
//! Collection is best-effort: unreadable directories and walk errors are
//! skipped silently and never abort the walk.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use same_file::Handle;
use walkdir::WalkDir;

/// A file found under one search root.
#[derive(Debug, Clone)]
pub struct CollectedFile {
    /// The search root under which the file was found.
    pub root: PathBuf,
    /// Path segments relative to that root; the last segment is the file
    /// name.
    pub segments: Vec<String>,
}

/// Collects qualifying files under every root.
///
/// A file qualifies when its extension (see [`file_extension`]) is a member
/// of `extensions`; the empty string accepts extensionless files. Any
/// directory whose name appears in `ignore_dirs` is pruned along with its
/// entire subtree. Paths are rebased against the root they were found under,
/// so identical relative subtrees from different roots later merge into the
/// same trie location.
pub fn collect(
    roots: &[PathBuf],
    extensions: &[String],
    ignore_dirs: &[String],
) -> Vec<CollectedFile> {
    let mut files = Vec::new();
    for root in roots {
        collect_root(root, extensions, ignore_dirs, &mut files);
    }
    files
}

/// Walks a single root, appending qualifying files to `out`.
///
/// Symlink cycles are broken by tracking the identity of every directory
/// visited within this root's walk; a directory reached a second time
/// through another link is skipped rather than re-descended.
fn collect_root(
    root: &Path,
    extensions: &[String],
    ignore_dirs: &[String],
    out: &mut Vec<CollectedFile>,
) {
    // A root that itself lives under an ignored directory contributes
    // nothing.
    if root
        .components()
        .any(|c| ignore_dirs.iter().any(|d| c.as_os_str() == d.as_str()))
    {
        return;
    }

    let mut visited: HashSet<Handle> = HashSet::new();
    let mut walker = WalkDir::new(root).follow_links(true).into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            // Unreadable or looping entries are skipped; the walk continues.
            Err(_) => continue,
        };

        if entry.file_type().is_dir() {
            let name = entry.file_name().to_string_lossy();
            if ignore_dirs.iter().any(|d| d == name.as_ref()) {
                walker.skip_current_dir();
                continue;
            }
            if let Ok(handle) = Handle::from_path(entry.path())
                && !visited.insert(handle)
            {
                // Already walked this directory through another link.
                walker.skip_current_dir();
            }
            continue;
        }

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !extensions.iter().any(|ext| ext == file_extension(&name)) {
            continue;
        }

        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        let segments: Vec<String> = rel
            .iter()
            .map(|segment| segment.to_string_lossy().into_owned())
            .collect();
        if segments.is_empty() {
            continue;
        }

        out.push(CollectedFile {
            root: root.to_path_buf(),
            segments,
        });
    }
}

/// Returns a file name's extension: the suffix after the last `.`, without
/// the dot, or `""` when the name has no extension.
///
/// A leading dot does not start an extension (`.bashrc` is extensionless),
/// and a trailing dot yields the empty extension, so extensionless headers
/// and dotfiles both land on the `""` case.
pub fn file_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[idx + 1..],
        _ => "",
    }
}
