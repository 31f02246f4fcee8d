//! Include-line classification and completion candidates.
//!
//! Given the raw text of a line being edited and a built include trie (from
//! `incline-trie`), this crate decides whether the line is in
//! include-directive position, where completion should begin, and which
//! files and directories to offer. All operations are stateless pure
//! functions over the current trie snapshot.

#![warn(missing_docs)]

mod candidate;
mod classify;
mod engine;
mod syntax;

pub use candidate::{Candidate, CandidateKind};
pub use classify::{Classification, classify, partial_path};
pub use engine::{candidates, complete, swapcase_key};
pub use syntax::{ClangSyntax, IncludeSyntax, syntax_for};
