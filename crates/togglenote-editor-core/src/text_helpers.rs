//! Text navigation and analysis helpers.
//!
//! These functions work with the `EditorDocument` trait to provide
//! line-boundary lookups for the line-wise edit operations.

use crate::document::EditorDocument;
use crate::types::LineRange;

/// Find start of line containing offset.
pub fn find_line_start<D: EditorDocument>(doc: &D, offset: usize) -> usize {
    let mut pos = offset.min(doc.len_chars());
    while pos > 0 {
        if let Some('\n') = doc.char_at(pos - 1) {
            return pos;
        }
        pos -= 1;
    }
    0
}

/// Find end of line containing offset (position of newline or end of doc).
pub fn find_line_end<D: EditorDocument>(doc: &D, offset: usize) -> usize {
    let len = doc.len_chars();
    let mut pos = offset;
    while pos < len {
        if let Some('\n') = doc.char_at(pos) {
            return pos;
        }
        pos += 1;
    }
    len
}

/// Line span touched by the current selection.
///
/// Runs from the start of the line holding the selection start to the end
/// of the line holding the selection end.
pub fn line_range<D: EditorDocument>(doc: &D) -> LineRange {
    let sel = doc.selection();
    LineRange::new(find_line_start(doc, sel.start()), find_line_end(doc, sel.end()))
}

/// Start offsets of every line in `range`, in document order.
pub fn line_starts<D: EditorDocument>(doc: &D, range: LineRange) -> Vec<usize> {
    let mut starts = vec![range.start];
    for pos in range.start..range.end {
        if let Some('\n') = doc.char_at(pos) {
            starts.push(pos + 1);
        }
    }
    starts
}

/// Count the run of `' '` characters beginning at `line_start`.
pub fn leading_spaces<D: EditorDocument>(doc: &D, line_start: usize) -> usize {
    let mut count = 0;
    while let Some(' ') = doc.char_at(line_start + count) {
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EditorRope, PlainEditor, Selection, UndoableBuffer};

    type TestEditor = PlainEditor<UndoableBuffer<EditorRope>>;

    fn make_editor(content: &str) -> TestEditor {
        let rope = EditorRope::from_str(content);
        let buf = UndoableBuffer::new(rope, 100);
        PlainEditor::new(buf)
    }

    #[test]
    fn test_find_line_start() {
        let editor = make_editor("hello\nworld\ntest");

        assert_eq!(find_line_start(&editor, 0), 0);
        assert_eq!(find_line_start(&editor, 3), 0);
        assert_eq!(find_line_start(&editor, 5), 0); // at newline
        assert_eq!(find_line_start(&editor, 6), 6); // start of "world"
        assert_eq!(find_line_start(&editor, 8), 6);
        assert_eq!(find_line_start(&editor, 16), 12); // end of buffer
    }

    #[test]
    fn test_find_line_end() {
        let editor = make_editor("hello\nworld\ntest");

        assert_eq!(find_line_end(&editor, 0), 5);
        assert_eq!(find_line_end(&editor, 5), 5);
        assert_eq!(find_line_end(&editor, 6), 11);
        assert_eq!(find_line_end(&editor, 12), 16);
        assert_eq!(find_line_end(&editor, 16), 16);
    }

    #[test]
    fn test_boundaries_of_empty_buffer() {
        let editor = make_editor("");
        assert_eq!(find_line_start(&editor, 0), 0);
        assert_eq!(find_line_end(&editor, 0), 0);
        assert_eq!(line_range(&editor), LineRange::new(0, 0));
    }

    #[test]
    fn test_line_range_spans_selection() {
        let mut editor = make_editor("one\ntwo\nthree");
        editor.set_selection(Selection::new(9, 1));
        assert_eq!(line_range(&editor), LineRange::new(0, 13));

        editor.set_selection(Selection::collapsed(5));
        assert_eq!(line_range(&editor), LineRange::new(4, 7));
    }

    #[test]
    fn test_line_starts() {
        let editor = make_editor("one\ntwo\n\nfour");
        assert_eq!(
            line_starts(&editor, LineRange::new(0, 13)),
            vec![0, 4, 8, 9]
        );
        assert_eq!(line_starts(&editor, LineRange::new(4, 7)), vec![4]);
    }

    #[test]
    fn test_leading_spaces() {
        let editor = make_editor("  a\n\tb\n      ");
        assert_eq!(leading_spaces(&editor, 0), 2);
        assert_eq!(leading_spaces(&editor, 4), 0); // tabs don't count
        assert_eq!(leading_spaces(&editor, 7), 6);
    }
}
