//! Undo/redo management for editor operations.
//!
//! Provides:
//! - `UndoManager` trait for abstracting undo implementations
//! - `UndoableBuffer<T>` - wraps a TextBuffer and provides undo/redo

use std::ops::Range;

use smol_str::{SmolStr, ToSmolStr};

use crate::text::TextBuffer;

/// Default number of undo steps kept per note.
pub const DEFAULT_MAX_UNDO_STEPS: usize = 100;

/// Trait for managing undo/redo operations.
///
/// Implementations must actually perform the undo/redo, not just track state.
/// `undo` and `redo` return the caret offset that should follow the restored
/// text, or `None` when there was nothing to do.
pub trait UndoManager {
    /// Check if undo is available.
    fn can_undo(&self) -> bool;

    /// Check if redo is available.
    fn can_redo(&self) -> bool;

    /// Perform undo.
    fn undo(&mut self) -> Option<usize>;

    /// Perform redo.
    fn redo(&mut self) -> Option<usize>;

    /// Clear all undo/redo history.
    fn clear_history(&mut self);
}

/// A recorded edit operation for undo/redo.
#[derive(Debug, Clone)]
struct EditOperation {
    /// Character position where edit occurred
    pos: usize,
    /// Text that was deleted (empty for pure insertions)
    deleted: SmolStr,
    /// Text that was inserted (empty for pure deletions)
    inserted: SmolStr,
}

/// A TextBuffer wrapper that tracks edits and provides undo/redo.
///
/// All mutations go through this wrapper, which records them for undo.
/// A `replace` is recorded as a single step, so one toolbar command or
/// one indent undoes in one go.
#[derive(Clone)]
pub struct UndoableBuffer<T> {
    buffer: T,
    undo_stack: Vec<EditOperation>,
    redo_stack: Vec<EditOperation>,
    max_steps: usize,
}

impl<T: TextBuffer + Default> Default for UndoableBuffer<T> {
    fn default() -> Self {
        Self::new(T::default(), DEFAULT_MAX_UNDO_STEPS)
    }
}

impl<T: TextBuffer> UndoableBuffer<T> {
    /// Create a new undoable buffer wrapping the given buffer.
    pub fn new(buffer: T, max_steps: usize) -> Self {
        Self {
            buffer,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_steps,
        }
    }

    fn record_op(&mut self, pos: usize, deleted: &str, inserted: &str) {
        if deleted.is_empty() && inserted.is_empty() {
            return;
        }
        self.redo_stack.clear();

        self.undo_stack.push(EditOperation {
            pos,
            deleted: deleted.to_smolstr(),
            inserted: inserted.to_smolstr(),
        });

        if self.undo_stack.len() > self.max_steps {
            let excess = self.undo_stack.len() - self.max_steps;
            self.undo_stack.drain(..excess);
        }
    }

    fn deleted_text(&self, char_range: Range<usize>) -> SmolStr {
        self.buffer.slice(char_range).unwrap_or_default()
    }
}

impl<T: TextBuffer> TextBuffer for UndoableBuffer<T> {
    fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    fn insert(&mut self, char_offset: usize, text: &str) {
        self.record_op(char_offset, "", text);
        self.buffer.insert(char_offset, text);
    }

    fn delete(&mut self, char_range: Range<usize>) {
        let deleted = self.deleted_text(char_range.clone());
        self.record_op(char_range.start, &deleted, "");
        self.buffer.delete(char_range);
    }

    fn replace(&mut self, char_range: Range<usize>, text: &str) {
        let deleted = self.deleted_text(char_range.clone());
        self.record_op(char_range.start, &deleted, text);
        self.buffer.replace(char_range, text);
    }

    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr> {
        self.buffer.slice(char_range)
    }

    fn char_at(&self, char_offset: usize) -> Option<char> {
        self.buffer.char_at(char_offset)
    }

    fn to_string(&self) -> String {
        self.buffer.to_string()
    }

    fn char_to_utf16(&self, char_offset: usize) -> usize {
        self.buffer.char_to_utf16(char_offset)
    }

    fn utf16_to_char(&self, utf16_offset: usize) -> usize {
        self.buffer.utf16_to_char(utf16_offset)
    }
}

impl<T: TextBuffer> UndoManager for UndoableBuffer<T> {
    fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn undo(&mut self) -> Option<usize> {
        let op = self.undo_stack.pop()?;

        // Apply inverse: swap the inserted text back for what was deleted
        let inserted_chars = op.inserted.chars().count();
        self.buffer
            .replace(op.pos..op.pos + inserted_chars, &op.deleted);

        let caret = op.pos + op.deleted.chars().count();
        self.redo_stack.push(op);
        Some(caret)
    }

    fn redo(&mut self) -> Option<usize> {
        let op = self.redo_stack.pop()?;

        let deleted_chars = op.deleted.chars().count();
        self.buffer
            .replace(op.pos..op.pos + deleted_chars, &op.inserted);

        let caret = op.pos + op.inserted.chars().count();
        self.undo_stack.push(op);
        Some(caret)
    }

    fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EditorRope;

    #[test]
    fn test_undoable_buffer_insert_undo() {
        let rope = EditorRope::from_str("hello");
        let mut buf = UndoableBuffer::new(rope, 100);

        assert_eq!(buf.to_string(), "hello");
        assert!(!buf.can_undo());

        buf.insert(5, " world");
        assert_eq!(buf.to_string(), "hello world");
        assert!(buf.can_undo());

        assert_eq!(buf.undo(), Some(5));
        assert_eq!(buf.to_string(), "hello");
        assert!(!buf.can_undo());
        assert!(buf.can_redo());

        assert_eq!(buf.redo(), Some(11));
        assert_eq!(buf.to_string(), "hello world");
        assert!(buf.can_undo());
        assert!(!buf.can_redo());
    }

    #[test]
    fn test_undoable_buffer_delete_undo() {
        let rope = EditorRope::from_str("hello world");
        let mut buf = UndoableBuffer::new(rope, 100);

        buf.delete(5..11);
        assert_eq!(buf.to_string(), "hello");

        // Caret lands after the restored text
        assert_eq!(buf.undo(), Some(11));
        assert_eq!(buf.to_string(), "hello world");
    }

    #[test]
    fn test_replace_is_single_step() {
        let rope = EditorRope::from_str("hello world");
        let mut buf = UndoableBuffer::new(rope, 100);

        buf.replace(6..11, "rust");
        assert_eq!(buf.to_string(), "hello rust");

        assert_eq!(buf.undo(), Some(11));
        assert_eq!(buf.to_string(), "hello world");
        assert!(!buf.can_undo());

        assert_eq!(buf.redo(), Some(10));
        assert_eq!(buf.to_string(), "hello rust");
    }

    #[test]
    fn test_noop_replace_not_recorded() {
        let mut buf = UndoableBuffer::new(EditorRope::from_str("abc"), 100);
        buf.replace(1..1, "");
        assert!(!buf.can_undo());
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let rope = EditorRope::from_str("abc");
        let mut buf = UndoableBuffer::new(rope, 100);

        buf.insert(3, "d");
        assert!(buf.undo().is_some());
        assert!(buf.can_redo());

        buf.insert(3, "e");
        assert!(!buf.can_redo());
    }

    #[test]
    fn test_max_steps() {
        let rope = EditorRope::from_str("");
        let mut buf = UndoableBuffer::new(rope, 3);

        buf.insert(0, "a");
        buf.insert(1, "b");
        buf.insert(2, "c");
        buf.insert(3, "d"); // should evict "a"

        assert_eq!(buf.to_string(), "abcd");

        assert!(buf.undo().is_some()); // removes d
        assert!(buf.undo().is_some()); // removes c
        assert!(buf.undo().is_some()); // removes b
        assert_eq!(buf.undo(), None); // a was evicted

        assert_eq!(buf.to_string(), "a");
    }

    #[test]
    fn test_clear_history() {
        let mut buf = UndoableBuffer::new(EditorRope::from_str(""), 100);
        buf.insert(0, "x");
        buf.clear_history();
        assert!(!buf.can_undo());
        assert_eq!(buf.undo(), None);
        assert_eq!(buf.to_string(), "x");
    }
}
