//! Grammar-aware tokenization used to find literal spans.
//!
//! A `/` can open a regular expression, divide two numbers or be plain text,
//! and only a real lexer can tell which. The scanner consumes that knowledge
//! through the [`Tokenizer`] trait so tests can substitute a double.
//!
//! [`SwcTokenizer`] is the default implementation. It first parses the source
//! with swc and walks the AST, which also finds JSX text. Input that lexes but
//! does not parse (a stray `}`, an unfinished call) is then lexed on its own,
//! deciding each `/` from the token before it.

use std::path::Path;
use std::sync::Arc;

use swc_common::{FileName, GLOBALS, Globals, SourceFile, SourceMap, Span, Spanned};
use swc_ecma_ast::{EsVersion, JSXAttrValue, JSXText, Regex};
use swc_ecma_parser::{
    EsSyntax, Lexer, Parser, StringInput, Syntax, TsSyntax,
    error::Error as SwcError,
    input::Tokens,
    unstable::{Token as SwcToken, TokenValue},
};
use swc_ecma_visit::{Visit, VisitWith};
use tracing::{debug, trace};

use super::error::LexError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    RegularExpression,
    /// Text between JSX tags.
    JsxText,
    /// Quoted JSX attribute value; JSX strings have no escapes.
    JsxString,
}

/// A token with a half-open `[start, end)` byte range into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

/// Capability to lex a whole source text.
///
/// Implementations must be callable from several threads at once.
pub trait Tokenizer: Sync {
    fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError>;
}

/// Source language accepted by [`SwcTokenizer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    #[default]
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

impl Dialect {
    /// Pick a dialect from a file extension. Returns `None` for non-script files.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("js" | "mjs" | "cjs") => Some(Dialect::JavaScript),
            Some("jsx") => Some(Dialect::Jsx),
            Some("ts" | "mts" | "cts") => Some(Dialect::TypeScript),
            Some("tsx") => Some(Dialect::Tsx),
            _ => None,
        }
    }

    fn syntax(self) -> Syntax {
        match self {
            Dialect::JavaScript => Syntax::Es(EsSyntax::default()),
            Dialect::Jsx => Syntax::Es(EsSyntax {
                jsx: true,
                ..Default::default()
            }),
            Dialect::TypeScript => Syntax::Typescript(TsSyntax::default()),
            Dialect::Tsx => Syntax::Typescript(TsSyntax {
                tsx: true,
                ..Default::default()
            }),
        }
    }
}

/// [`Tokenizer`] backed by `swc_ecma_parser`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwcTokenizer {
    dialect: Dialect,
}

impl SwcTokenizer {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    fn parse(&self, source_file: &SourceFile) -> Result<Vec<Token>, LexError> {
        let base = source_file.start_pos.0;
        let mut parser = Parser::new(self.dialect.syntax(), StringInput::from(source_file), None);

        let program = parser.parse_program().map_err(|e| lex_error(&e, base))?;

        // Recoverable errors (e.g. `return` outside a function) still leave
        // every literal in place, so they are not failures here.
        let recovered = parser.take_errors();
        if !recovered.is_empty() {
            trace!(count = recovered.len(), "ignoring recoverable parse errors");
        }

        let mut collector = LiteralCollector {
            base,
            tokens: Vec::new(),
        };
        program.visit_with(&mut collector);
        collector.tokens.sort_by_key(|t| t.start);
        Ok(collector.tokens)
    }

    /// Lex without parsing. A `/` opens a regex wherever an expression may
    /// start; JSX is not recognized in this mode.
    fn lex(&self, source_file: &SourceFile) -> Result<Vec<Token>, LexError> {
        let base = source_file.start_pos.0;
        let mut lexer = Lexer::new(
            self.dialect.syntax(),
            EsVersion::latest(),
            StringInput::from(source_file),
            None,
        );
        let mut tokens = Vec::new();
        // One entry per open brace; `true` when it closes a template substitution.
        let mut braces: Vec<bool> = Vec::new();
        let mut prev: Option<SwcToken> = None;
        let mut next = lexer.first_token();

        loop {
            let (token, span) = (next.token, next.span);
            match token {
                SwcToken::Eof => break,
                SwcToken::Error => return Err(lexer_error(&mut lexer, span, base)),
                SwcToken::Slash | SwcToken::DivEq if regex_allowed(prev) => {
                    lexer.set_next_regexp(Some(span.lo));
                    let regex = lexer.next_token();
                    lexer.set_next_regexp(None);
                    if regex.token != SwcToken::Regex {
                        return Err(lexer_error(&mut lexer, regex.span, base));
                    }
                    push_token(&mut tokens, TokenKind::RegularExpression, regex.span, base);
                    prev = Some(SwcToken::Regex);
                    next = lexer.next_token();
                    continue;
                }
                SwcToken::LBrace => braces.push(false),
                SwcToken::TemplateHead | SwcToken::TemplateMiddle => braces.push(true),
                SwcToken::RBrace => {
                    if braces.pop() == Some(true) {
                        next = lexer.rescan_template_token(span.lo, false);
                        continue;
                    }
                }
                _ => {}
            }
            prev = Some(token);
            next = lexer.next_token();
        }

        Ok(tokens)
    }
}

impl Tokenizer for SwcTokenizer {
    fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError> {
        // Each call gets its own globals and source map so calls can run in parallel.
        GLOBALS.set(&Globals::new(), || {
            let source_map = Arc::new(SourceMap::default());
            let source_file =
                source_map.new_source_file(FileName::Anon.into(), source.to_string());

            self.parse(&source_file).or_else(|err| {
                debug!(error = %err, "parse failed, lexing instead");
                self.lex(&source_file)
            })
        })
    }
}

/// Whether a `/` after `prev` starts a regular expression.
///
/// A `}` usually ends a block, after which a new statement (and so a regex)
/// may begin.
fn regex_allowed(prev: Option<SwcToken>) -> bool {
    match prev {
        None | Some(SwcToken::RBrace) => true,
        Some(token) => token.before_expr(),
    }
}

fn lex_error(error: &SwcError, base: u32) -> LexError {
    let offset = error.span().lo.0.checked_sub(base).map(|o| o as usize);
    LexError::new(error.kind().msg(), offset)
}

fn lexer_error(lexer: &mut Lexer<'_>, span: Span, base: u32) -> LexError {
    match lexer.take_token_value() {
        Some(TokenValue::Error(error)) => lex_error(&error, base),
        _ => LexError::new(
            "unexpected token",
            span.lo.0.checked_sub(base).map(|o| o as usize),
        ),
    }
}

fn push_token(tokens: &mut Vec<Token>, kind: TokenKind, span: Span, base: u32) {
    // Synthesized nodes carry dummy spans that point outside the file.
    if span.lo.0 < base || span.hi.0 < span.lo.0 {
        return;
    }
    tokens.push(Token {
        kind,
        start: (span.lo.0 - base) as usize,
        end: (span.hi.0 - base) as usize,
    });
}

struct LiteralCollector {
    base: u32,
    tokens: Vec<Token>,
}

impl Visit for LiteralCollector {
    fn visit_regex(&mut self, node: &Regex) {
        push_token(&mut self.tokens, TokenKind::RegularExpression, node.span, self.base);
    }

    fn visit_jsx_text(&mut self, node: &JSXText) {
        push_token(&mut self.tokens, TokenKind::JsxText, node.span, self.base);
    }

    fn visit_jsx_attr_value(&mut self, node: &JSXAttrValue) {
        if let JSXAttrValue::Str(s) = node {
            push_token(&mut self.tokens, TokenKind::JsxString, s.span, self.base);
        }
        node.visit_children_with(self);
    }
}
