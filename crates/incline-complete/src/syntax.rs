//! Per-filetype include syntax strategies.
//!
//! One completion engine serves every filetype family; the family-specific
//! parts (what an include directive looks like, how to pull the partial path
//! out of the line) sit behind the [`IncludeSyntax`] trait. The clang family
//! (`c`, `cpp`, `cuda`) ships here; other families plug in the same way.

use crate::{Classification, classify, partial_path};

/// Syntax rules for one filetype family's include-like construct.
pub trait IncludeSyntax {
    /// Classifies a raw input line: eligible (with completion offset),
    /// already closed, or not a directive.
    fn classify(&self, line: &str) -> Classification;

    /// Extracts the partial path being completed from an open directive.
    ///
    /// Returns `None` when the line does not open a directive.
    fn partial_path<'a>(&self, line: &'a str) -> Option<&'a str>;
}

/// `#include <...>` / `#include "..."` syntax for the c/cpp/cuda family.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClangSyntax;

impl IncludeSyntax for ClangSyntax {
    fn classify(&self, line: &str) -> Classification {
        classify(line)
    }

    fn partial_path<'a>(&self, line: &'a str) -> Option<&'a str> {
        partial_path(line)
    }
}

/// Returns the syntax strategy for a filetype, if its family is supported.
pub fn syntax_for(filetype: &str) -> Option<&'static dyn IncludeSyntax> {
    match filetype {
        "c" | "cpp" | "cuda" => Some(&ClangSyntax),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clang_family_filetypes_share_the_strategy() {
        assert!(syntax_for("c").is_some());
        assert!(syntax_for("cpp").is_some());
        assert!(syntax_for("cuda").is_some());
    }

    #[test]
    fn unknown_filetypes_have_no_strategy() {
        assert!(syntax_for("python").is_none());
        assert!(syntax_for("rust").is_none());
    }

    #[test]
    fn clang_syntax_forwards_to_the_classifier() {
        let syntax = ClangSyntax;
        assert!(matches!(
            syntax.classify("#include <sys/"),
            Classification::Eligible { .. }
        ));
        assert_eq!(syntax.partial_path("#include <sys/"), Some("sys/"));
    }
}
