//! Filesystem trie index for include-path completion.
//!
//! This crate builds an in-memory prefix tree over the files found beneath a
//! set of search roots. It handles:
//! - Walking roots with symlink-cycle protection and ignore-list pruning
//! - Extension filtering, including extensionless headers
//! - Merging identical relative subtrees from different roots
//! - Caching built tries per indexing context so the filesystem walk runs at
//!   most once per context
//!
//! The trie is a transient, best-effort index: unreadable directories are
//! skipped silently, and a built trie is never refreshed automatically when
//! the filesystem changes. Callers invalidate explicitly.

#![warn(missing_docs)]

mod cache;
mod collect;
mod node;

pub use cache::{ContextKey, TrieCache, build_trie};
pub use collect::{CollectedFile, collect, file_extension};
pub use node::{Node, Trie};
