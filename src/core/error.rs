//! Error types for comment stripping.

use std::fmt;

/// A construct that was opened but never closed before end-of-input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    BlockComment,
    SingleQuoteString,
    DoubleQuoteString,
    TemplateLiteral,
    MarkupComment,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Construct::BlockComment => "block comment",
            Construct::SingleQuoteString => "single-quoted string",
            Construct::DoubleQuoteString => "double-quoted string",
            Construct::TemplateLiteral => "template literal",
            Construct::MarkupComment => "markup comment",
        };
        f.write_str(name)
    }
}

/// The tokenizer could not lex the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LexError {
    /// Human-readable reason reported by the tokenizer.
    pub message: String,
    /// Byte offset of the failure, when the tokenizer knows it.
    pub offset: Option<usize>,
}

impl LexError {
    pub fn new(message: impl Into<String>, offset: Option<usize>) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

/// Failure of a whole processing call. No partial output is ever returned.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum DecommentError {
    /// Locating regular-expression literals failed because the input could not be lexed.
    #[error("failed to tokenize input: {0}")]
    LexFailure(#[from] LexError),

    /// A string, template literal, block comment or markup comment was never closed.
    #[error("unterminated {construct} starting at byte {offset}")]
    UnterminatedConstruct {
        /// What was left open.
        construct: Construct,
        /// Byte offset of the opening delimiter.
        offset: usize,
    },
}

impl DecommentError {
    /// Byte offset the error points at, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            DecommentError::LexFailure(err) => err.offset,
            DecommentError::UnterminatedConstruct { offset, .. } => Some(*offset),
        }
    }
}

/// Convert a byte offset into a 1-based `(line, column)` pair.
///
/// Columns count characters, not bytes. Offsets past the end clamp to the end.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut end = offset.min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    let before = &source[..end];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}
