//! Core editor document trait and implementations.
//!
//! Defines the `EditorDocument` trait for abstracting editor behavior,
//! allowing different storage strategies (plain fields, a browser textarea
//! mirror) while sharing the core editing logic.

use std::ops::Range;

use smol_str::SmolStr;

use crate::text::TextBuffer;
use crate::types::{EditInfo, Selection};
use crate::undo::UndoManager;

/// Core trait for editor documents.
///
/// The trait is generic over the buffer type, which must implement both
/// `TextBuffer` (for text operations) and `UndoManager` (for undo/redo).
///
/// Every text mutation funnels through [`EditorDocument::replace_range`],
/// which applies the change and sets the resulting selection together.
pub trait EditorDocument {
    /// The buffer type used for text storage and undo.
    type Buffer: TextBuffer + UndoManager;

    // === Required: Buffer access ===

    /// Get a reference to the underlying buffer.
    fn buffer(&self) -> &Self::Buffer;

    /// Get a mutable reference to the underlying buffer.
    fn buffer_mut(&mut self) -> &mut Self::Buffer;

    // === Required: Selection state ===

    /// Get the current selection. A collapsed selection is the caret.
    fn selection(&self) -> Selection;

    /// Set the selection.
    fn set_selection(&mut self, selection: Selection);

    // === Required: Edit tracking ===

    /// Get the last edit info, if any.
    fn last_edit(&self) -> Option<EditInfo>;

    /// Set the last edit info.
    fn set_last_edit(&mut self, edit: Option<EditInfo>);

    // === Provided: Convenience accessors ===

    /// Get the full content as a String.
    fn content_string(&self) -> String {
        self.buffer().to_string()
    }

    /// Get length in characters.
    fn len_chars(&self) -> usize {
        self.buffer().len_chars()
    }

    /// Check if document is empty.
    fn is_empty(&self) -> bool {
        self.buffer().len_chars() == 0
    }

    /// Get a slice of the content.
    fn slice(&self, range: Range<usize>) -> Option<SmolStr> {
        self.buffer().slice(range)
    }

    /// Get character at offset.
    fn char_at(&self, offset: usize) -> Option<char> {
        self.buffer().char_at(offset)
    }

    /// Get selected text. Empty when the selection is collapsed.
    fn selected_text(&self) -> SmolStr {
        self.buffer()
            .slice(self.selection().to_range())
            .unwrap_or_default()
    }

    // === Provided: Text operations ===

    /// Replace `range` with `text` and set the selection afterwards.
    ///
    /// `range` must lie within the document. The new selection is clamped
    /// to the resulting length.
    fn replace_range(&mut self, range: Range<usize>, text: &str, selection: Selection) -> EditInfo {
        debug_assert!(
            range.start <= range.end && range.end <= self.len_chars(),
            "replace range {range:?} outside document of {} chars",
            self.len_chars()
        );

        let deleted_contains_newline = self
            .buffer()
            .slice(range.clone())
            .is_some_and(|s| s.contains('\n'));
        let deleted_len = range.end - range.start;

        self.buffer_mut().replace(range.clone(), text);

        let doc_len_after = self.buffer().len_chars();
        let edit = EditInfo {
            edit_char_pos: range.start,
            inserted_len: text.chars().count(),
            deleted_len,
            contains_newline: text.contains('\n') || deleted_contains_newline,
            doc_len_after,
        };

        self.set_selection(selection.clamp_to(doc_len_after));
        self.set_last_edit(Some(edit.clone()));
        edit
    }

    /// Replace the whole document, dropping history and parking the caret at 0.
    fn load(&mut self, content: &str) {
        let len = self.len_chars();
        self.buffer_mut().replace(0..len, content);
        self.buffer_mut().clear_history();
        self.set_selection(Selection::collapsed(0));
        self.set_last_edit(None);
    }

    // === Provided: Undo/Redo ===

    /// Undo one step, placing the caret after the restored text.
    fn undo(&mut self) -> bool {
        match self.buffer_mut().undo() {
            Some(caret) => {
                let len = self.len_chars();
                self.set_selection(Selection::collapsed(caret.min(len)));
                true
            }
            None => false,
        }
    }

    /// Redo one step, placing the caret after the reapplied text.
    fn redo(&mut self) -> bool {
        match self.buffer_mut().redo() {
            Some(caret) => {
                let len = self.len_chars();
                self.set_selection(Selection::collapsed(caret.min(len)));
                true
            }
            None => false,
        }
    }

    fn can_undo(&self) -> bool {
        self.buffer().can_undo()
    }

    fn can_redo(&self) -> bool {
        self.buffer().can_redo()
    }

    fn clear_history(&mut self) {
        self.buffer_mut().clear_history();
    }
}

/// Simple field-based implementation of EditorDocument.
///
/// Stores selection and edit state as plain fields.
#[derive(Clone)]
pub struct PlainEditor<T: TextBuffer + UndoManager> {
    buffer: T,
    selection: Selection,
    last_edit: Option<EditInfo>,
}

impl<T: TextBuffer + UndoManager + Default> Default for PlainEditor<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: TextBuffer + UndoManager> PlainEditor<T> {
    /// Create a new editor with the given buffer, caret at the start.
    pub fn new(buffer: T) -> Self {
        Self {
            buffer,
            selection: Selection::default(),
            last_edit: None,
        }
    }
}

impl<T: TextBuffer + UndoManager> EditorDocument for PlainEditor<T> {
    type Buffer = T;

    fn buffer(&self) -> &Self::Buffer {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut Self::Buffer {
        &mut self.buffer
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    fn last_edit(&self) -> Option<EditInfo> {
        self.last_edit.clone()
    }

    fn set_last_edit(&mut self, edit: Option<EditInfo>) {
        self.last_edit = edit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EditorRope, UndoableBuffer};

    type TestEditor = PlainEditor<UndoableBuffer<EditorRope>>;

    fn make_editor(content: &str) -> TestEditor {
        let rope = EditorRope::from_str(content);
        let buf = UndoableBuffer::new(rope, 100);
        PlainEditor::new(buf)
    }

    #[test]
    fn test_replace_range() {
        let mut editor = make_editor("hello world");

        let edit = editor.replace_range(6..11, "rust", Selection::collapsed(10));
        assert_eq!(editor.content_string(), "hello rust");
        assert_eq!(edit.deleted_len, 5);
        assert_eq!(edit.inserted_len, 4);
        assert_eq!(edit.doc_len_after, 10);
        assert_eq!(editor.selection(), Selection::collapsed(10));
        assert_eq!(editor.last_edit(), Some(edit));
    }

    #[test]
    fn test_replace_range_clamps_selection() {
        let mut editor = make_editor("abc");
        editor.replace_range(0..3, "x", Selection::new(0, 9));
        assert_eq!(editor.selection(), Selection::new(0, 1));
    }

    #[test]
    fn test_replace_range_tracks_newlines() {
        let mut editor = make_editor("a\nb");
        let edit = editor.replace_range(1..2, "", Selection::collapsed(1));
        assert!(edit.contains_newline);
        assert_eq!(editor.content_string(), "ab");
    }

    #[test]
    fn test_undo_redo() {
        let mut editor = make_editor("hello");

        editor.replace_range(5..5, " world", Selection::collapsed(11));
        assert_eq!(editor.content_string(), "hello world");

        assert!(editor.undo());
        assert_eq!(editor.content_string(), "hello");
        assert_eq!(editor.selection(), Selection::collapsed(5));

        assert!(editor.redo());
        assert_eq!(editor.content_string(), "hello world");
        assert_eq!(editor.selection(), Selection::collapsed(11));

        assert!(!editor.redo());
    }

    #[test]
    fn test_selected_text() {
        let mut editor = make_editor("hello world");

        editor.set_selection(Selection::new(5, 0));
        assert_eq!(editor.selected_text(), "hello");

        editor.set_selection(Selection::collapsed(3));
        assert_eq!(editor.selected_text(), "");
    }

    #[test]
    fn test_load_resets_history() {
        let mut editor = make_editor("draft");
        editor.replace_range(5..5, "!", Selection::collapsed(6));

        editor.load("fresh note");
        assert_eq!(editor.content_string(), "fresh note");
        assert_eq!(editor.selection(), Selection::collapsed(0));
        assert!(!editor.can_undo());
        assert!(editor.last_edit().is_none());
    }

    #[test]
    fn test_multibyte_offsets() {
        let mut editor = make_editor("héllo wörld");
        assert_eq!(editor.len_chars(), 11);

        editor.set_selection(Selection::new(6, 11));
        assert_eq!(editor.selected_text(), "wörld");
    }
}
