//! Editor panel state.
//!
//! The editor owns a local text buffer decoupled from the shared DOT slot:
//! edits accumulate here and reach the slot only on explicit apply. This
//! module also tracks the word-wrap preference and the file the buffer was
//! loaded from or last saved to.

use std::path::{Path, PathBuf};

use crate::state::dot_source::DEFAULT_DOT_SOURCE;

/// State related to the Write.. panel's text buffer.
pub struct EditorState {
    /// The local, not-yet-applied source text.
    buffer: String,
    /// Whether the buffer diverges from the last applied source.
    dirty: bool,
    /// Word wrap preference for the editor widget.
    word_wrap: bool,
    /// File the buffer is associated with, if any.
    file_path: Option<PathBuf>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            buffer: DEFAULT_DOT_SOURCE.to_string(),
            dirty: false,
            word_wrap: true,
            file_path: None,
        }
    }

    /// Restores a persisted buffer and word-wrap preference at startup.
    pub fn with_restored(buffer: Option<String>, word_wrap: bool) -> Self {
        Self {
            buffer: buffer.unwrap_or_else(|| DEFAULT_DOT_SOURCE.to_string()),
            dirty: false,
            word_wrap,
            file_path: None,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Mutable access for the text widget. The caller marks the state
    /// edited when the widget reports a change.
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.buffer
    }

    /// Replaces the buffer wholesale (file load, sample load, clear).
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called when the text widget reports an edit.
    pub fn mark_edited(&mut self) {
        self.dirty = true;
    }

    /// Called after the buffer was applied to the shared slot or saved.
    pub fn mark_applied(&mut self) {
        self.dirty = false;
    }

    pub fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    pub fn set_word_wrap(&mut self, wrap: bool) {
        self.word_wrap = wrap;
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn set_file_path(&mut self, path: Option<PathBuf>) {
        self.file_path = path;
    }

    /// Appends a snippet to the buffer, ensuring it lands on its own line.
    pub fn append_snippet(&mut self, snippet: &str) {
        if !self.buffer.ends_with('\n') && !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(snippet);
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_clean_with_default_source() {
        let editor = EditorState::new();
        assert_eq!(editor.buffer(), DEFAULT_DOT_SOURCE);
        assert!(!editor.is_dirty());
        assert!(editor.word_wrap());
    }

    #[test]
    fn test_set_buffer_marks_dirty_until_applied() {
        let mut editor = EditorState::new();
        editor.set_buffer("digraph D {}");
        assert!(editor.is_dirty());
        editor.mark_applied();
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_append_snippet_adds_newline_separator() {
        let mut editor = EditorState::new();
        editor.set_buffer("graph G {");
        editor.append_snippet("  a -- b;");
        assert_eq!(editor.buffer(), "graph G {\n  a -- b;");
    }

    #[test]
    fn test_with_restored_prefers_saved_buffer() {
        let editor = EditorState::with_restored(Some("digraph R {}".to_string()), false);
        assert_eq!(editor.buffer(), "digraph R {}");
        assert!(!editor.word_wrap());

        let editor = EditorState::with_restored(None, true);
        assert_eq!(editor.buffer(), DEFAULT_DOT_SOURCE);
    }
}
