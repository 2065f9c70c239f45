//! Host editor seam
//!
//! The toggle engine never touches the document buffer directly; the
//! host supplies the current line or selection and applies the result
//! back. This trait is the whole surface the host must provide.

use log::debug;

use crate::marker::{self, MarkerSpec};

/// Editor operations the host application exposes to the toggle engine
pub trait HostEditor {
    /// Line index and text of the line under the cursor
    fn cursor_line(&self) -> (usize, String);

    /// Active selection text; empty when nothing is selected
    fn selection(&self) -> String;

    fn replace_line(&mut self, line: usize, text: &str);

    fn replace_selection(&mut self, text: &str);
}

/// Run one toggle against the host's cursor line or selection.
///
/// A non-blank selection takes priority over the cursor line and is
/// written back with a selection replace; otherwise the whole line is
/// replaced. Blank-only content is a no-op, which keeps the engine's
/// non-blank precondition unreachable from any host. Returns whether a
/// replacement was applied.
pub fn handle_toggle<H: HostEditor>(host: &mut H, spec: &MarkerSpec) -> bool {
    let (line_number, line_text) = host.cursor_line();

    let selection = host.selection();
    let use_selection = !selection.trim().is_empty();
    let content = if use_selection { selection } else { line_text };

    if content.trim().is_empty() {
        // Only whitespace, nothing to wrap
        return false;
    }

    let resolved = marker::toggle(&content, spec);
    debug!("toggle {:?} -> {:?}", content, resolved);

    if use_selection {
        host.replace_selection(&resolved);
    } else {
        host.replace_line(line_number, &resolved);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal in-memory host over a single line plus optional selection
    struct FakeHost {
        line: String,
        selection: String,
        replaced_line: Option<String>,
        replaced_selection: Option<String>,
    }

    impl FakeHost {
        fn new(line: &str, selection: &str) -> Self {
            Self {
                line: line.to_string(),
                selection: selection.to_string(),
                replaced_line: None,
                replaced_selection: None,
            }
        }
    }

    impl HostEditor for FakeHost {
        fn cursor_line(&self) -> (usize, String) {
            (0, self.line.clone())
        }

        fn selection(&self) -> String {
            self.selection.clone()
        }

        fn replace_line(&mut self, _line: usize, text: &str) {
            self.replaced_line = Some(text.to_string());
        }

        fn replace_selection(&mut self, text: &str) {
            self.replaced_selection = Some(text.to_string());
        }
    }

    #[test]
    fn test_line_mode_replaces_line() {
        let mut host = FakeHost::new("- item", "");
        let applied = handle_toggle(&mut host, &MarkerSpec::new("==", "=="));

        assert!(applied);
        assert_eq!(host.replaced_line.as_deref(), Some("- ==item=="));
        assert!(host.replaced_selection.is_none());
    }

    #[test]
    fn test_selection_takes_priority() {
        let mut host = FakeHost::new("full line text", "line");
        let applied = handle_toggle(&mut host, &MarkerSpec::new("==", "=="));

        assert!(applied);
        assert_eq!(host.replaced_selection.as_deref(), Some("==line=="));
        assert!(host.replaced_line.is_none());
    }

    #[test]
    fn test_whitespace_selection_falls_back_to_line() {
        let mut host = FakeHost::new("text", "   ");
        let applied = handle_toggle(&mut host, &MarkerSpec::new("==", "=="));

        assert!(applied);
        assert_eq!(host.replaced_line.as_deref(), Some("==text=="));
    }

    #[test]
    fn test_blank_line_is_noop() {
        let mut host = FakeHost::new("   ", "");
        let applied = handle_toggle(&mut host, &MarkerSpec::new("==", "=="));

        assert!(!applied);
        assert!(host.replaced_line.is_none());
        assert!(host.replaced_selection.is_none());
    }
}
