//! Trie structures for indexed include paths.
//!
//! A [`Trie`] maps root-relative paths to a tree of [`Node`]s, one node per
//! directory segment. Each node holds its child directories and the file
//! names that terminate at that directory. The root node represents the
//! merged union of all search roots for one indexing context.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single directory level in the include trie.
///
/// Within one node no two children share a segment name: identical relative
/// subtrees under different search roots merge into the same child. The file
/// list is append-only and may contain duplicates when the same relative path
/// exists under multiple roots; duplicates are deliberately preserved.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Node {
    /// Child directories keyed by segment name.
    pub children: BTreeMap<String, Self>,
    /// File names terminating at this directory, in insertion order.
    pub files: Vec<String>,
}

impl Node {
    /// Returns the total number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(Self::node_count).sum::<usize>()
    }

    /// Returns the total number of file entries in this subtree.
    pub fn file_count(&self) -> usize {
        self.files.len() + self.children.values().map(Self::file_count).sum::<usize>()
    }
}

/// The merged include trie for one indexing context.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Trie {
    /// Root node representing the union of all search roots.
    root: Node,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Inserts one root-relative path into the trie.
    ///
    /// Every segment except the last names a directory, created on demand;
    /// the last segment is a file name appended to that directory's file
    /// list. No uniqueness check is performed on file names. An empty
    /// segment sequence is ignored.
    pub fn insert(&mut self, segments: &[String]) {
        let Some((file, dirs)) = segments.split_last() else {
            return;
        };
        let mut node = &mut self.root;
        for dir in dirs {
            node = node.children.entry(dir.clone()).or_default();
        }
        node.files.push(file.clone());
    }

    /// Returns true if the trie indexes nothing.
    ///
    /// An empty trie is the signal that a (re)build is needed; see
    /// [`crate::TrieCache::ensure_built`].
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty() && self.root.files.is_empty()
    }

    /// Returns the total number of directory nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Returns the total number of file entries.
    pub fn file_count(&self) -> usize {
        self.root.file_count()
    }

    /// Returns every indexed relative path, `/`-joined, in trie order.
    ///
    /// Files at a node are listed before its subdirectories' contents.
    pub fn paths(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.file_count());
        collect_paths(&self.root, "", &mut out);
        out
    }
}

/// Appends the relative paths of `node`'s subtree to `out`.
fn collect_paths(node: &Node, prefix: &str, out: &mut Vec<String>) {
    for file in &node.files {
        out.push(format!("{prefix}{file}"));
    }
    for (name, child) in &node.children {
        let child_prefix = format!("{prefix}{name}/");
        collect_paths(child, &child_prefix, out);
    }
}
