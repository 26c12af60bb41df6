//! Markup-vs-code detection.

/// Which scanning strategy a text needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Code,
    Markup,
}

/// Classify `text` by its first non-whitespace character.
///
/// Only space, tab, carriage return and line feed are skipped. A leading `<`
/// means markup; anything else, including an empty or all-blank text, is code.
pub fn classify(text: &str) -> InputKind {
    match text
        .bytes()
        .find(|b| !matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
    {
        Some(b'<') => InputKind::Markup,
        _ => InputKind::Code,
    }
}
