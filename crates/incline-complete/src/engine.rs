//! Candidate generation from the include trie.
//!
//! Navigates a built trie to the node addressed by a partial path and
//! returns its contents as ordered candidates: the full sorted file list
//! first, then the full sorted directory list, never interleaved.

use incline_trie::{Node, Trie};

use crate::{Candidate, Classification, IncludeSyntax};

/// Classifies `line` with `syntax` and, when eligible, returns candidates
/// from `trie` for the partial path on the line.
///
/// A closed or non-directive line yields no candidates.
pub fn complete(syntax: &dyn IncludeSyntax, trie: &Trie, line: &str) -> Vec<Candidate> {
    match syntax.classify(line) {
        Classification::Eligible { .. } => {}
        Classification::Closed | Classification::NotDirective => return Vec::new(),
    }
    let Some(partial) = syntax.partial_path(line) else {
        return Vec::new();
    };
    candidates(trie, partial)
}

/// Returns the candidates for a partial path within the trie.
///
/// The partial path is split on `/`; every segment except the last must
/// exactly match an existing child, one level per segment. A missing segment
/// resolves to no candidates rather than an error. The trailing partial
/// segment is deliberately NOT used to filter the result: the caller (or the
/// editor UI) narrows by prefix, this engine returns the full contents of
/// the resolved directory node.
pub fn candidates(trie: &Trie, partial: &str) -> Vec<Candidate> {
    let segments: Vec<&str> = partial.split('/').collect();
    let Some((_, dirs)) = segments.split_last() else {
        return Vec::new();
    };
    let Some(node) = descend(trie.root(), dirs) else {
        return Vec::new();
    };
    node_candidates(node)
}

/// Walks down one child per segment, or fails on the first miss.
fn descend<'a>(mut node: &'a Node, dirs: &[&str]) -> Option<&'a Node> {
    for dir in dirs {
        node = node.children.get(*dir)?;
    }
    Some(node)
}

/// Builds the ordered candidate list for one resolved node.
fn node_candidates(node: &Node) -> Vec<Candidate> {
    let mut files: Vec<&str> = node.files.iter().map(String::as_str).collect();
    files.sort_by_key(|name| swapcase_key(name));

    let mut dirs: Vec<&str> = node.children.keys().map(String::as_str).collect();
    dirs.sort_by_key(|name| swapcase_key(name));

    files
        .into_iter()
        .map(Candidate::file)
        .chain(dirs.into_iter().map(Candidate::directory))
        .collect()
}

/// Derives the fixed sort key for a name: every letter's case inverted.
///
/// `"apple.h"` keys as `"APPLE.H"` and `"Banana.h"` as `"bANANA.H"`, so
/// conventional case differences do not dominate plain ASCII ordering.
pub fn swapcase_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_uppercase() {
            key.extend(ch.to_lowercase());
        } else if ch.is_lowercase() {
            key.extend(ch.to_uppercase());
        } else {
            key.push(ch);
        }
    }
    key
}
