//! Textarea ↔ document synchronisation.
//!
//! The DOM reports selection offsets in UTF-16 code units; the core works in
//! chars. Everything crossing this boundary is converted here.

use togglenote_editor_core::{EditorDocument, Selection, TextBuffer};
use web_sys::HtmlTextAreaElement;

/// Convert a UTF-16 selection from the DOM into char offsets.
pub fn selection_from_utf16<D: EditorDocument>(
    doc: &D,
    start: u32,
    end: u32,
    backward: bool,
) -> Selection {
    let buffer = doc.buffer();
    let start = buffer.utf16_to_char(start as usize);
    let end = buffer.utf16_to_char(end as usize);
    if backward {
        Selection::new(end, start)
    } else {
        Selection::new(start, end)
    }
}

/// Selection bounds in UTF-16 code units, ordered.
pub fn selection_to_utf16<D: EditorDocument>(doc: &D) -> (u32, u32) {
    let sel = doc.selection();
    let buffer = doc.buffer();
    (
        buffer.char_to_utf16(sel.start()) as u32,
        buffer.char_to_utf16(sel.end()) as u32,
    )
}

/// Read the textarea's current selection into char offsets.
pub fn read_selection<D: EditorDocument>(doc: &D, textarea: &HtmlTextAreaElement) -> Selection {
    let start = textarea.selection_start().ok().flatten().unwrap_or(0);
    let end = textarea.selection_end().ok().flatten().unwrap_or(start);
    let backward = textarea
        .selection_direction()
        .ok()
        .flatten()
        .is_some_and(|d| d == "backward");
    selection_from_utf16(doc, start, end, backward)
}

/// Push the document's text and selection into the textarea.
pub fn write_back<D: EditorDocument>(doc: &D, textarea: &HtmlTextAreaElement) {
    let text = doc.content_string();
    if textarea.value() != text {
        textarea.set_value(&text);
    }

    let (start, end) = selection_to_utf16(doc);
    let direction = if doc.selection().is_backwards() {
        "backward"
    } else {
        "forward"
    };
    if let Err(err) = textarea.set_selection_range_with_direction(start, end, direction) {
        tracing::warn!(?err, "failed to restore textarea selection");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use togglenote_editor_core::{EditorRope, NoteDocument, PlainEditor, UndoableBuffer};

    fn make_doc(content: &str) -> NoteDocument {
        PlainEditor::new(UndoableBuffer::new(EditorRope::from_str(content), 100))
    }

    #[test]
    fn test_astral_chars_convert() {
        // 🙈 is one char but two UTF-16 units
        let mut doc = make_doc("a🙈b");
        let sel = selection_from_utf16(&doc, 3, 4, false);
        assert_eq!(sel, Selection::new(2, 3));

        doc.set_selection(sel);
        assert_eq!(selection_to_utf16(&doc), (3, 4));
    }

    #[test]
    fn test_backward_selection() {
        let doc = make_doc("hello");
        let sel = selection_from_utf16(&doc, 1, 4, true);
        assert_eq!(sel.anchor, 4);
        assert_eq!(sel.head, 1);
    }
}
