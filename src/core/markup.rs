//! `<!-- ... -->` removal for HTML-like input.
//!
//! Markup has no string or regex contexts that matter here, so this is a plain
//! search. Everything outside the comments is copied verbatim, line breaks
//! included; no blank-line collapsing happens in this mode.

use super::error::{Construct, DecommentError};

const OPEN: &str = "<!--";
const CLOSE: &str = "-->";

pub fn strip_markup_comments(text: &str) -> Result<String, DecommentError> {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(found) = text[pos..].find(OPEN) {
        let open = pos + found;
        out.push_str(&text[pos..open]);

        let body = open + OPEN.len();
        let Some(close) = text[body..].find(CLOSE) else {
            return Err(DecommentError::UnterminatedConstruct {
                construct: Construct::MarkupComment,
                offset: open,
            });
        };
        pos = body + close + CLOSE.len();
    }

    out.push_str(&text[pos..]);
    Ok(out)
}
