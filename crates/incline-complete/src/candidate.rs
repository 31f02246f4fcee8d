//! Completion candidate records.

use std::fmt;

use serde::Serialize;

/// Whether a candidate names a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    /// A file terminating at the resolved trie node.
    File,
    /// A child directory of the resolved trie node.
    Directory,
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

/// One completion candidate, ready for direct presentation.
///
/// Candidates are ephemeral: produced fresh per query and owned by the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Text inserted when the candidate is accepted.
    pub word: String,
    /// Text shown in the completion menu; directories carry a trailing `/`.
    pub display: String,
    /// Whether this names a file or a directory.
    pub kind: CandidateKind,
}

impl Candidate {
    /// Creates a file candidate.
    pub fn file(name: &str) -> Self {
        Self {
            word: name.to_string(),
            display: name.to_string(),
            kind: CandidateKind::File,
        }
    }

    /// Creates a directory candidate, displayed with a trailing separator.
    pub fn directory(name: &str) -> Self {
        Self {
            word: name.to_string(),
            display: format!("{name}/"),
            kind: CandidateKind::Directory,
        }
    }
}
