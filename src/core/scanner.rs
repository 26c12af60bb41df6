//! Single-pass comment removal for code.
//!
//! The scanner walks the source once, left to right, in exactly one
//! [`ScanMode`] at a time. Output is append-only: the indentation of a line is
//! held back in a pending buffer until the line gets real content, which is
//! what lets a line holding nothing but a comment disappear without any
//! rewriting of text already written.
//!
//! All delimiters are ASCII, so every position the scanner stops at is a char
//! boundary and slices of the source can be copied out directly.

use super::Options;
use super::error::{Construct, DecommentError};
use super::spans::VerbatimSpans;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    Single,
    Double,
    Backtick,
}

impl Quote {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'\'' => Some(Quote::Single),
            b'"' => Some(Quote::Double),
            b'`' => Some(Quote::Backtick),
            _ => None,
        }
    }

    fn byte(self) -> u8 {
        match self {
            Quote::Single => b'\'',
            Quote::Double => b'"',
            Quote::Backtick => b'`',
        }
    }

    fn construct(self) -> Construct {
        match self {
            Quote::Single => Construct::SingleQuoteString,
            Quote::Double => Construct::DoubleQuoteString,
            Quote::Backtick => Construct::TemplateLiteral,
        }
    }
}

/// Lexical context at the current offset. `start` is where the construct opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    Code,
    LineComment,
    BlockComment {
        start: usize,
    },
    SafeBlockComment {
        start: usize,
    },
    /// String or template literal; `escaped` is set right after a backslash.
    Literal {
        quote: Quote,
        start: usize,
        escaped: bool,
    },
}

/// Remove `//` and `/* */` comments from `source`.
///
/// Offsets inside `verbatim` (regex literals, JSX text) are never treated as
/// comment or string starts.
pub fn strip_code_comments(
    source: &str,
    verbatim: &VerbatimSpans,
    options: &Options,
) -> Result<String, DecommentError> {
    let mut scanner = CommentScanner::new(source, verbatim, options);
    let mut mode = ScanMode::Code;

    // A trailing `//` leaves us in LineComment at end-of-input; run it once more to close it.
    while scanner.pos < scanner.bytes.len() || mode == ScanMode::LineComment {
        mode = match mode {
            ScanMode::Code => scanner.code(),
            ScanMode::LineComment => scanner.line_comment(),
            ScanMode::BlockComment { start } => scanner.block_comment(start, false),
            ScanMode::SafeBlockComment { start } => scanner.block_comment(start, true),
            ScanMode::Literal {
                quote,
                start,
                escaped,
            } => scanner.literal(quote, start, escaped),
        };
    }

    match mode {
        ScanMode::Code | ScanMode::LineComment => Ok(scanner.finish()),
        ScanMode::BlockComment { start } | ScanMode::SafeBlockComment { start } => {
            Err(DecommentError::UnterminatedConstruct {
                construct: Construct::BlockComment,
                offset: start,
            })
        }
        ScanMode::Literal { quote, start, .. } => Err(DecommentError::UnterminatedConstruct {
            construct: quote.construct(),
            offset: start,
        }),
    }
}

struct CommentScanner<'a> {
    src: &'a str,
    bytes: &'a [u8],
    verbatim: &'a VerbatimSpans,
    options: &'a Options,
    pos: usize,
    out: String,
    /// Leading whitespace of the current line, not yet written.
    pending: String,
    /// Whether the current output line has anything besides whitespace.
    line_has_content: bool,
}

impl<'a> CommentScanner<'a> {
    fn new(src: &'a str, verbatim: &'a VerbatimSpans, options: &'a Options) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            verbatim,
            options,
            pos: 0,
            out: String::with_capacity(src.len()),
            pending: String::new(),
            line_has_content: false,
        }
    }

    fn code(&mut self) -> ScanMode {
        let pos = self.pos;
        let b = self.bytes[pos];
        if let Some(quote) = Quote::from_byte(b)
            && !self.verbatim.contains(pos)
        {
            self.emit_to(pos + 1);
            return ScanMode::Literal {
                quote,
                start: pos,
                escaped: false,
            };
        }

        match b {
            b'\n' | b'\r' => {
                self.line_break();
                ScanMode::Code
            }
            b' ' | b'\t' | 0x0b | 0x0c => {
                self.whitespace();
                ScanMode::Code
            }
            b'/' if !self.verbatim.contains(pos) => match self.bytes.get(pos + 1) {
                Some(b'/') => {
                    self.pos += 2;
                    ScanMode::LineComment
                }
                Some(b'*') => {
                    self.pos += 2;
                    if self.bytes.get(pos + 2) == Some(&b'!') {
                        ScanMode::SafeBlockComment { start: pos }
                    } else {
                        ScanMode::BlockComment { start: pos }
                    }
                }
                _ => {
                    self.emit_to(pos + 1);
                    ScanMode::Code
                }
            },
            // Plain content, or a slash or quote inside a verbatim span.
            _ => {
                let end = self.next_special(pos + 1);
                self.emit_to(end);
                ScanMode::Code
            }
        }
    }

    fn line_comment(&mut self) -> ScanMode {
        // The line break itself stays for `comment_removed` to decide on.
        self.pos = self.bytes[self.pos..]
            .iter()
            .position(|&b| b == b'\n' || b == b'\r')
            .map_or(self.bytes.len(), |i| self.pos + i);
        self.comment_removed();
        ScanMode::Code
    }

    fn block_comment(&mut self, start: usize, safe: bool) -> ScanMode {
        let Some(close) = self.src[self.pos..].find("*/") else {
            self.pos = self.bytes.len();
            return if safe {
                ScanMode::SafeBlockComment { start }
            } else {
                ScanMode::BlockComment { start }
            };
        };

        let end = self.pos + close + 2;
        if safe && self.options.safe {
            self.pos = start;
            self.emit_to(end);
        } else {
            self.pos = end;
            self.comment_removed();
        }
        ScanMode::Code
    }

    fn literal(&mut self, quote: Quote, start: usize, escaped: bool) -> ScanMode {
        let pos = self.pos;
        if escaped {
            let width = self.src[pos..].chars().next().map_or(1, char::len_utf8);
            self.emit_to(pos + width);
            return ScanMode::Literal {
                quote,
                start,
                escaped: false,
            };
        }

        let b = self.bytes[pos];
        if b == quote.byte() {
            self.emit_to(pos + 1);
            return ScanMode::Code;
        }
        if b == b'\\' {
            self.emit_to(pos + 1);
            return ScanMode::Literal {
                quote,
                start,
                escaped: true,
            };
        }

        let end = self.bytes[pos..]
            .iter()
            .position(|&c| c == b'\\' || c == quote.byte())
            .map_or(self.bytes.len(), |i| pos + i);
        self.emit_to(end);
        ScanMode::Literal {
            quote,
            start,
            escaped: false,
        }
    }

    /// Apply the blank-line policy after a comment has been dropped.
    ///
    /// A comment with nothing but whitespace before it on its line and nothing
    /// but whitespace after it up to a line break takes that break (and its
    /// indentation) with it. With `trim`, following blank lines go too.
    fn comment_removed(&mut self) {
        if self.line_has_content {
            return;
        }

        let after = self.skip_horizontal_whitespace(self.pos);
        if after == self.bytes.len() {
            self.pending.clear();
            self.pos = after;
            return;
        }

        if let Some(len) = self.break_len(after) {
            self.pending.clear();
            self.pos = after + len;
            if self.options.trim {
                self.pos = self.skip_blank_lines(self.pos);
            }
        }
    }

    fn line_break(&mut self) {
        let len = self.break_len(self.pos).unwrap_or(1);
        // Whitespace-only lines without comments are reproduced as they were.
        self.out.push_str(&self.pending);
        self.pending.clear();
        self.out.push_str(&self.src[self.pos..self.pos + len]);
        self.pos += len;
        self.line_has_content = false;
    }

    fn whitespace(&mut self) {
        let end = self.skip_horizontal_whitespace(self.pos);
        let ws = &self.src[self.pos..end];
        if self.line_has_content {
            self.out.push_str(ws);
        } else {
            self.pending.push_str(ws);
        }
        self.pos = end;
    }

    /// Copy `src[pos..end]` as line content.
    fn emit_to(&mut self, end: usize) {
        if !self.pending.is_empty() {
            self.out.push_str(&self.pending);
            self.pending.clear();
        }
        self.out.push_str(&self.src[self.pos..end]);
        self.line_has_content = true;
        self.pos = end;
    }

    fn finish(mut self) -> String {
        self.out.push_str(&self.pending);
        self.out
    }

    fn break_len(&self, at: usize) -> Option<usize> {
        match self.bytes.get(at) {
            Some(b'\r') if self.bytes.get(at + 1) == Some(&b'\n') => Some(2),
            Some(b'\r' | b'\n') => Some(1),
            _ => None,
        }
    }

    fn skip_horizontal_whitespace(&self, from: usize) -> usize {
        self.bytes[from..]
            .iter()
            .position(|b| !matches!(b, b' ' | b'\t' | 0x0b | 0x0c))
            .map_or(self.bytes.len(), |i| from + i)
    }

    fn skip_blank_lines(&self, from: usize) -> usize {
        let mut pos = from;
        loop {
            let after = self.skip_horizontal_whitespace(pos);
            match self.break_len(after) {
                Some(len) => pos = after + len,
                None => return pos,
            }
        }
    }

    /// Next offset at or after `from` where code mode has something to decide.
    fn next_special(&self, from: usize) -> usize {
        self.bytes[from..]
            .iter()
            .position(|b| {
                matches!(
                    b,
                    b'/' | b'\'' | b'"' | b'`' | b'\n' | b'\r' | b' ' | b'\t' | 0x0b | 0x0c
                )
            })
            .map_or(self.bytes.len(), |i| from + i)
    }
}
