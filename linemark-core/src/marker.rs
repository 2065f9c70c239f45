//! Marker pair toggling
//!
//! The wrap/unwrap resolver: decides whether content is already wrapped
//! in a marker pair and either strips the markers or inserts them after
//! the leading markdown token.

use crate::token::{self, TokenKind};

/// A (prefix, postfix) delimiter pair, e.g. `==...==` for highlights.
///
/// `identifying_substring` overrides `prefix` for presence detection,
/// which supports markers whose opening token varies (an HTML tag with
/// attributes still opens with the same tag name).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerSpec {
    pub prefix: String,
    pub postfix: String,
    pub identifying_substring: Option<String>,
}

impl MarkerSpec {
    pub fn new(prefix: impl Into<String>, postfix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            postfix: postfix.into(),
            identifying_substring: None,
        }
    }

    pub fn with_identifying_substring(mut self, substring: impl Into<String>) -> Self {
        self.identifying_substring = Some(substring.into());
        self
    }

    /// The substring used to detect marker presence
    fn needle(&self) -> &str {
        self.identifying_substring.as_deref().unwrap_or(&self.prefix)
    }
}

/// Toggle a marker pair on a line or selection.
///
/// If the markers are already present they are removed; otherwise the
/// content is wrapped, with any leading bullet/checkbox/quote token kept
/// outside the wrapped region. Pure function; the caller guarantees
/// `content` is not blank.
pub fn toggle(content: &str, spec: &MarkerSpec) -> String {
    let prefix_idx = content.find(spec.needle());
    let postfix_idx = content.rfind(&spec.postfix);

    // Wrapped iff both markers are found at distinct positions. Equal
    // positions mean a single occurrence of a one-character marker used
    // as both prefix and postfix, which is not a wrap.
    match (prefix_idx, postfix_idx) {
        (Some(p), Some(q)) if p != q => unwrap_at(content, spec, p, q),
        _ => wrap(content, spec),
    }
}

fn unwrap_at(content: &str, spec: &MarkerSpec, prefix_idx: usize, postfix_idx: usize) -> String {
    let before = &content[..prefix_idx];
    // Clamp so degenerate overlaps (markers closer than the prefix is
    // long) yield an empty inner region instead of a reversed range.
    let mut inner_start = (prefix_idx + spec.prefix.len()).min(postfix_idx);
    // When the identifying substring matched an occurrence whose opening
    // token differs from the canonical prefix, skipping prefix.len()
    // bytes can land inside a multibyte character.
    while !content.is_char_boundary(inner_start) {
        inner_start -= 1;
    }
    let inner = &content[inner_start..postfix_idx];
    let after = &content[postfix_idx + spec.postfix.len()..];

    let mut result = String::with_capacity(before.len() + inner.len() + after.len());
    result.push_str(before);
    result.push_str(inner);
    result.push_str(after);
    result
}

fn wrap(content: &str, spec: &MarkerSpec) -> String {
    let classification = token::classify(content);

    let (head, payload) = match classification.boundary {
        Some(end) if classification.kind != TokenKind::Paragraph => {
            (Some(content[..end].trim_end()), content[end..].trim())
        }
        _ => (None, content.trim()),
    };

    let mut result = String::new();
    if let Some(head) = head {
        result.push_str(head);
        result.push(' ');
    }
    result.push_str(&spec.prefix);
    result.push_str(payload);
    result.push_str(&spec.postfix);
    result
}
