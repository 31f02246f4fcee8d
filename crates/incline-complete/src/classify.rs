//! Include-line classification.
//!
//! Recognizes whether a line is in include-directive position, whether the
//! directive is already closed (no completion needed), and the byte offset
//! where completion should begin.

use std::{iter::Peekable, str::Chars};

/// Outcome of classifying an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The line is an open include directive; completion starts at `offset`.
    Eligible {
        /// Byte offset into the line where completion begins: one past the
        /// last path separator when present, otherwise just past the opening
        /// delimiter.
        offset: usize,
    },
    /// The directive is already closed by its matching delimiter.
    Closed,
    /// The line is not an include directive.
    NotDirective,
}

/// The delimiter opening an include argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    /// `<`, closed by `>`.
    Angle,
    /// `"`, closed by `"`.
    Quote,
}

impl Delimiter {
    /// Returns the closing character matching this opener.
    fn closer(self) -> char {
        match self {
            Self::Angle => '>',
            Self::Quote => '"',
        }
    }
}

/// A matched opening pattern.
struct Opening {
    /// Byte length of the match, including the delimiter.
    len: usize,
    /// Which delimiter opened the argument.
    delimiter: Delimiter,
}

/// Classifies a line for `#include` completion.
///
/// The opening pattern is optional whitespace, `#`, optional whitespace,
/// `include`, optional whitespace, then `<` or `"`. A line whose argument is
/// already terminated by the matching closing delimiter is [`Closed`]
/// (completion is suppressed once the include token is fully written).
///
/// [`Closed`]: Classification::Closed
pub fn classify(line: &str) -> Classification {
    let Some(opening) = match_opening(line) else {
        return Classification::NotDirective;
    };

    if line[opening.len..].contains(opening.delimiter.closer()) {
        return Classification::Closed;
    }

    // Only the trailing path component is replaced by completion.
    let offset = match line.rfind('/') {
        Some(idx) => idx + 1,
        None => opening.len,
    };
    Classification::Eligible { offset }
}

/// Extracts the partial path being completed, if the line opens a directive.
///
/// Returns the text after the opening delimiter, up to (but excluding) any
/// closing delimiter.
pub fn partial_path(line: &str) -> Option<&str> {
    let opening = match_opening(line)?;
    let rest = &line[opening.len..];
    let end = rest.find(['>', '"']).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Matches the opening pattern at the start of the line.
fn match_opening(line: &str) -> Option<Opening> {
    let mut scanner = Scanner::new(line);
    scanner.skip_whitespace();
    if !scanner.eat('#') {
        return None;
    }
    scanner.skip_whitespace();
    if !scanner.eat_keyword("include") {
        return None;
    }
    scanner.skip_whitespace();
    let delimiter = if scanner.eat('<') {
        Delimiter::Angle
    } else if scanner.eat('"') {
        Delimiter::Quote
    } else {
        return None;
    };
    Some(Opening {
        len: scanner.position,
        delimiter,
    })
}

/// Character scanner over the input line.
struct Scanner<'a> {
    /// Character iterator with one-character lookahead.
    chars: Peekable<Chars<'a>>,
    /// Current byte position in the line.
    position: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner at the start of `line`.
    fn new(line: &'a str) -> Self {
        Self {
            chars: line.chars().peekable(),
            position: 0,
        }
    }

    /// Consumes one character, advancing the byte position.
    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Skips any run of whitespace.
    fn skip_whitespace(&mut self) {
        while self.chars.peek().is_some_and(|ch| ch.is_whitespace()) {
            self.advance();
        }
    }

    /// Consumes `expected` if it is next.
    fn eat(&mut self, expected: char) -> bool {
        if self.chars.peek() == Some(&expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `keyword` if its characters are next, in order.
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        for expected in keyword.chars() {
            if !self.eat(expected) {
                return false;
            }
        }
        true
    }
}
