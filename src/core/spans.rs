//! Verbatim spans: source ranges the scanner copies without looking for
//! comments or quotes.
//!
//! The scanner must not mistake `/*` or `//` inside a regex literal for a
//! comment, nor an apostrophe in JSX text for a string. [`RegexSpanLocator`]
//! runs the tokenizer once over the whole input and records the interior of
//! every regex literal plus every JSX text run and attribute string;
//! [`VerbatimSpans`] then answers membership queries for individual offsets.

use tracing::debug;

use super::error::LexError;
use super::tokenizer::{Token, TokenKind, Tokenizer};

/// Closed interval `[start, end]` of byte offsets.
///
/// For a regex literal, `start` is the byte after the opening slash and `end`
/// is the last byte of the token (the closing slash, or the last flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbatimSpan {
    pub start: usize,
    pub end: usize,
}

/// Sorted, non-overlapping regex spans with logarithmic membership lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerbatimSpans {
    spans: Vec<VerbatimSpan>,
}

impl VerbatimSpans {
    /// No regex spans at all; every offset is outside.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from spans in any order. Overlapping spans are merged.
    pub fn new(mut spans: Vec<VerbatimSpan>) -> Self {
        spans.sort_by_key(|s| s.start);
        let mut merged: Vec<VerbatimSpan> = Vec::with_capacity(spans.len());
        for span in spans {
            match merged.last_mut() {
                Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
                _ => merged.push(span),
            }
        }
        Self { spans: merged }
    }

    /// Whether `offset` lies inside some span. Both ends are inclusive.
    pub fn contains(&self, offset: usize) -> bool {
        // Index of the first span starting after `offset`; only its predecessor can match.
        let idx = self.spans.partition_point(|s| s.start <= offset);
        idx > 0 && offset <= self.spans[idx - 1].end
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn as_slice(&self) -> &[VerbatimSpan] {
        &self.spans
    }
}

/// Projects the tokens of a [`Tokenizer`] onto [`VerbatimSpans`].
pub struct RegexSpanLocator<'t, T: Tokenizer + ?Sized> {
    tokenizer: &'t T,
}

impl<'t, T: Tokenizer + ?Sized> RegexSpanLocator<'t, T> {
    pub fn new(tokenizer: &'t T) -> Self {
        Self { tokenizer }
    }

    /// Tokenize `source` and collect every span the scanner must copy verbatim.
    ///
    /// Fails as a whole if the tokenizer fails; there is no best-effort mode.
    pub fn locate(&self, source: &str) -> Result<VerbatimSpans, LexError> {
        let spans: Vec<VerbatimSpan> = self
            .tokenizer
            .tokenize(source)?
            .into_iter()
            .filter_map(verbatim_span)
            .collect();

        debug!(count = spans.len(), "located verbatim spans");
        Ok(VerbatimSpans::new(spans))
    }
}

fn verbatim_span(token: Token) -> Option<VerbatimSpan> {
    match token.kind {
        TokenKind::RegularExpression if token.end >= token.start + 2 => {
            Some(VerbatimSpan {
                start: token.start + 1,
                end: token.end - 1,
            })
        }
        TokenKind::JsxText | TokenKind::JsxString if token.end > token.start => {
            Some(VerbatimSpan {
                start: token.start,
                end: token.end - 1,
            })
        }
        _ => None,
    }
}
