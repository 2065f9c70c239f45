//! Rope-backed document buffer
//!
//! Holds file text for the CLI adapter and implements the host editor
//! seam over a cursor position.

use anyhow::{Context, Result};
use ropey::Rope;
use std::fs;
use std::path::{Path, PathBuf};

use crate::host::HostEditor;

/// An editable text buffer loaded from a file
#[derive(Clone)]
pub struct Buffer {
    pub path: Option<PathBuf>,
    pub rope: Rope,
}

impl Buffer {
    /// Load a buffer from a file path
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self {
            path: Some(path.to_path_buf()),
            rope: Rope::from_str(&content),
        })
    }

    /// Create a buffer from in-memory text (tests, stdin)
    pub fn from_str(content: &str) -> Self {
        Self {
            path: None,
            rope: Rope::from_str(content),
        }
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Text of one line, without its line terminator
    pub fn line(&self, idx: usize) -> Option<String> {
        if idx >= self.line_count() {
            return None;
        }
        let line: String = self.rope.line(idx).chunks().collect();
        let content = line
            .strip_suffix("\r\n")
            .or_else(|| line.strip_suffix('\n'))
            .or_else(|| line.strip_suffix('\r'))
            .unwrap_or(&line);
        Some(content.to_string())
    }

    /// Replace one line, keeping its original line terminator
    pub fn set_line(&mut self, idx: usize, text: &str) {
        if idx >= self.line_count() {
            return;
        }
        let start = self.rope.line_to_char(idx);
        let line = self.rope.line(idx);
        let line_len = line.len_chars();
        let terminator_len = if line_len >= 2
            && line.char(line_len - 2) == '\r'
            && line.char(line_len - 1) == '\n'
        {
            2
        } else if line_len >= 1 && matches!(line.char(line_len - 1), '\n' | '\r') {
            1
        } else {
            0
        };

        let end = start + line_len - terminator_len;
        self.rope.remove(start..end);
        self.rope.insert(start, text);
    }

    /// Write the buffer back to the file it was loaded from
    pub fn save(&self) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .context("Buffer has no backing file to save to")?;
        fs::write(path, self.rope.to_string())
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}

impl std::fmt::Display for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rope)
    }
}

/// Host editor over a buffer plus a cursor line and optional selection
pub struct CursorHost<'a> {
    buffer: &'a mut Buffer,
    line: usize,
    selection: Option<String>,
}

impl<'a> CursorHost<'a> {
    pub fn new(buffer: &'a mut Buffer, line: usize, selection: Option<String>) -> Self {
        Self {
            buffer,
            line,
            selection,
        }
    }

    /// Selection text after a replace, for selection-mode output
    pub fn into_selection(self) -> Option<String> {
        self.selection
    }
}

impl HostEditor for CursorHost<'_> {
    fn cursor_line(&self) -> (usize, String) {
        (self.line, self.buffer.line(self.line).unwrap_or_default())
    }

    fn selection(&self) -> String {
        self.selection.clone().unwrap_or_default()
    }

    fn replace_line(&mut self, line: usize, text: &str) {
        self.buffer.set_line(line, text);
    }

    fn replace_selection(&mut self, text: &str) {
        // The CLI has no real selection range in the buffer; record the
        // replacement so the caller can print it.
        self.selection = Some(text.to_string());
    }
}
