//! Leading markdown token detection
//!
//! Classifies the structural token at the start of a line (bullet,
//! checkbox, block quote) so the wrap/unwrap resolver knows where
//! marker insertion should begin.

/// The kind of leading structural token on a line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Paragraph,
    Bullet,
    Checkbox,
    Quote,
}

/// Result of classifying a line's leading token
///
/// `boundary` is `None` for a paragraph (no leading token); otherwise the
/// byte offset one past the last byte of the matched token, usable
/// directly as a slice bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenClassification {
    pub kind: TokenKind,
    pub boundary: Option<usize>,
}

/// Classify the leading markdown token of a line.
///
/// Precedence is checkbox, then bullet, then quote, then paragraph.
/// Checkbox must be tested before bullet: a checkbox is syntactically a
/// bullet, so testing bullet first would misclassify every checkbox.
pub fn classify(line: &str) -> TokenClassification {
    if let Some(end) = match_checkbox(line) {
        return TokenClassification {
            kind: TokenKind::Checkbox,
            boundary: Some(end),
        };
    }
    if let Some(end) = match_bullet(line) {
        return TokenClassification {
            kind: TokenKind::Bullet,
            boundary: Some(end),
        };
    }
    if let Some(end) = match_quote(line) {
        return TokenClassification {
            kind: TokenKind::Quote,
            boundary: Some(end),
        };
    }
    TokenClassification {
        kind: TokenKind::Paragraph,
        boundary: None,
    }
}

/// Match `^>*\s*[*-] ` and return the byte offset past the match
fn match_bullet(line: &str) -> Option<usize> {
    let after_quotes = line.trim_start_matches('>');
    let rest = after_quotes.trim_start();
    let mut end = line.len() - rest.len();

    match rest.chars().next() {
        Some('*') | Some('-') => end += 1,
        _ => return None,
    }
    if rest[1..].starts_with(' ') {
        Some(end + 1)
    } else {
        None
    }
}

/// Match `^>*\s*[*-] \[[x ]\]` by extending the bullet match
fn match_checkbox(line: &str) -> Option<usize> {
    let end = match_bullet(line)?;
    let rest = &line[end..];
    if rest.starts_with("[x]") || rest.starts_with("[ ]") {
        Some(end + 3)
    } else {
        None
    }
}

/// Match `^\s*> ` and return the byte offset past the match
fn match_quote(line: &str) -> Option<usize> {
    let rest = line.trim_start();
    let leading = line.len() - rest.len();
    if rest.starts_with("> ") {
        Some(leading + 2)
    } else {
        None
    }
}
