//! Comment stripping engine.
//!
//! ## Pipeline
//!
//! 1. `classify`: markup (first non-blank char is `<`) or code
//! 2. Code: `spans` locates regex literals and JSX text with a grammar-aware
//!    [`Tokenizer`], then `scanner` removes `//` and `/* */` comments in one pass
//! 3. Markup: `markup` removes `<!-- -->` comments
//!
//! Every call is independent and owns all of its state, so calls can run on
//! as many threads as needed.

pub mod classify;
pub mod error;
pub mod markup;
pub mod scanner;
pub mod spans;
pub mod tokenizer;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use classify::{InputKind, classify};
pub use error::{Construct, DecommentError, LexError};
pub use spans::{RegexSpanLocator, VerbatimSpan, VerbatimSpans};
pub use tokenizer::{Dialect, SwcTokenizer, Token, TokenKind, Tokenizer};

use markup::strip_markup_comments;
use scanner::strip_code_comments;

/// Processing options. Unknown keys are ignored when deserializing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Options {
    /// Keep `/*! ... */` comments.
    pub safe: bool,
    /// Also drop every blank line that follows a removed comment line.
    pub trim: bool,
}

/// How a text should be treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Mode {
    /// Markup if the text starts with `<`, code otherwise.
    #[default]
    Auto,
    /// JavaScript-like code, with regex literal detection.
    Code,
    /// C-style comments without regex detection (CSS, JSONC, C).
    Text,
    /// `<!-- -->` comments only.
    Markup,
}

/// Strip comments from `text`, detecting markup and parsing code as JavaScript.
pub fn process(text: &str, options: &Options) -> Result<String, DecommentError> {
    process_with(text, options, &SwcTokenizer::default())
}

/// Like [`process`], with a caller-supplied tokenizer for the regex pre-pass.
pub fn process_with<T: Tokenizer + ?Sized>(
    text: &str,
    options: &Options,
    tokenizer: &T,
) -> Result<String, DecommentError> {
    process_as(text, Mode::Auto, options, tokenizer)
}

/// Strip comments from `text` using an explicit [`Mode`].
pub fn process_as<T: Tokenizer + ?Sized>(
    text: &str,
    mode: Mode,
    options: &Options,
    tokenizer: &T,
) -> Result<String, DecommentError> {
    match mode {
        Mode::Auto => match classify(text) {
            InputKind::Markup => {
                debug!("input classified as markup");
                process_markup(text)
            }
            InputKind::Code => process_code(text, options, tokenizer),
        },
        Mode::Code => process_code(text, options, tokenizer),
        Mode::Text => process_text(text, options),
        Mode::Markup => process_markup(text),
    }
}

/// Code mode: locate regex literals, then scan.
///
/// An unterminated construct is reported in preference to a tokenizer failure,
/// since it is the more precise diagnosis of the same broken input.
pub fn process_code<T: Tokenizer + ?Sized>(
    text: &str,
    options: &Options,
    tokenizer: &T,
) -> Result<String, DecommentError> {
    let verbatim = match RegexSpanLocator::new(tokenizer).locate(text) {
        Ok(spans) => spans,
        Err(err) => {
            debug!(error = %err, "tokenizer failed");
            strip_code_comments(text, &VerbatimSpans::empty(), options)?;
            return Err(err.into());
        }
    };
    strip_code_comments(text, &verbatim, options)
}

/// Code-style scanning without regex detection.
///
/// Suitable for any C-comment language that has no regex literals. Never
/// fails with [`DecommentError::LexFailure`].
pub fn process_text(text: &str, options: &Options) -> Result<String, DecommentError> {
    strip_code_comments(text, &VerbatimSpans::empty(), options)
}

/// Markup mode: remove `<!-- -->` comments. `safe` and `trim` do not apply.
pub fn process_markup(text: &str) -> Result<String, DecommentError> {
    strip_markup_comments(text)
}
