//! Decomment - strip comments from code and markup
//!
//! Removes `//` and `/* */` comments from JavaScript, TypeScript, CSS and
//! similar sources, and `<!-- -->` comments from HTML, leaving everything else
//! byte-for-byte intact. Lines that held nothing but a comment disappear.
//! Comment-like text inside strings, template literals and regular expression
//! literals is left alone; regex literals are found with a real JavaScript
//! parser (swc).
//!
//! ```
//! use decomment::{Options, process};
//!
//! let source = "let a = 1; // one\n/* gone */\nlet b = '//';\n";
//! let out = process(source, &Options::default()).unwrap();
//! assert_eq!(out, "let a = 1; \nlet b = '//';\n");
//! ```
//!
//! ## Module Structure
//!
//! - `core`: the comment stripping engine (classifier, regex spans, scanners)
//! - `cli`: command-line interface layer
//! - `config`: `.decommentrc.json` loading
//! - `files`: source file discovery
//! - `logging`: tracing subscriber setup

pub mod cli;
pub mod config;
pub mod core;
pub mod files;
pub mod logging;

pub use crate::core::{
    DecommentError, Dialect, Mode, Options, SwcTokenizer, Tokenizer, process, process_as,
    process_code, process_markup, process_text, process_with,
};
