//! Markdown text edit operations.
//!
//! Each operation reads the document's buffer and selection, then commits
//! exactly one [`EditorDocument::replace_range`] so it undoes as one step.
//! None of them can fail: buffer boundaries are ordinary line boundaries.

use crate::document::EditorDocument;
use crate::text_helpers::{
    find_line_end, find_line_start, leading_spaces, line_range, line_starts,
};
use crate::types::{EditInfo, Selection};

/// Surround the selection with `prefix`/`suffix`.
///
/// With a non-empty selection the original text stays selected inside the
/// markers. With a caret, `prefix + placeholder + suffix` is inserted and
/// either the placeholder is selected (`select_result`) or the caret lands
/// after the inserted text.
pub fn wrap_insert<D: EditorDocument>(
    doc: &mut D,
    prefix: &str,
    suffix: &str,
    placeholder: &str,
    select_result: bool,
) -> EditInfo {
    let sel = doc.selection();
    let start = sel.start();
    let prefix_len = prefix.chars().count();

    if !sel.is_collapsed() {
        let selected = doc.selected_text();
        let inner_start = start + prefix_len;
        let inner_end = inner_start + selected.chars().count();
        let text = format!("{prefix}{selected}{suffix}");
        return doc.replace_range(sel.to_range(), &text, Selection::new(inner_start, inner_end));
    }

    let text = format!("{prefix}{placeholder}{suffix}");
    let new_sel = if select_result {
        let inner_start = start + prefix_len;
        Selection::new(inner_start, inner_start + placeholder.chars().count())
    } else {
        Selection::collapsed(start + text.chars().count())
    };
    doc.replace_range(sel.to_range(), &text, new_sel)
}

/// Insert `line` as a line of its own in place of the selection.
///
/// A `\n` is prepended unless the insertion point already starts a line, and
/// one is always appended. The first occurrence of `placeholder` inside
/// `line` gets selected; without one the caret goes after the block.
pub fn insert_line<D: EditorDocument>(
    doc: &mut D,
    line: &str,
    placeholder: Option<&str>,
) -> EditInfo {
    let sel = doc.selection();
    let pos = sel.start();
    let needs_break = pos > 0 && doc.char_at(pos - 1) != Some('\n');

    let mut text = String::with_capacity(line.len() + 2);
    if needs_break {
        text.push('\n');
    }
    text.push_str(line);
    text.push('\n');

    let line_start = pos + usize::from(needs_break);
    let found = placeholder
        .filter(|p| !p.is_empty())
        .and_then(|p| line.find(p).map(|byte_idx| (byte_idx, p)));
    let new_sel = match found {
        Some((byte_idx, p)) => {
            let from = line_start + line[..byte_idx].chars().count();
            Selection::new(from, from + p.chars().count())
        }
        None => Selection::collapsed(pos + text.chars().count()),
    };

    doc.replace_range(sel.to_range(), &text, new_sel)
}

/// Prepend `unit` spaces to every line the selection touches.
///
/// The selection keeps covering the same content: a bound moves right by
/// `unit` for each line start at or before it.
pub fn indent<D: EditorDocument>(doc: &mut D, unit: usize) -> EditInfo {
    let lines = line_range(doc);
    let starts = line_starts(doc, lines);
    let pad = " ".repeat(unit);

    let original = doc.slice(lines.to_range()).unwrap_or_default();
    let text = format!("{pad}{}", original.replace('\n', &format!("\n{pad}")));

    let shift = |pos: usize| pos + unit * starts.iter().filter(|&&s| s <= pos).count();
    let sel = doc.selection();
    let new_sel = Selection::new(shift(sel.anchor), shift(sel.head));

    tracing::trace!(
        target: "togglenote::edit",
        unit,
        lines = starts.len(),
        "indent"
    );
    doc.replace_range(lines.to_range(), &text, new_sel)
}

/// Remove up to `unit` leading spaces from every line the selection touches.
///
/// Lines with fewer spaces lose what they have; lines with none are left
/// alone. Each selection bound moves left by the spaces removed before it
/// and never past the start of its own line. Returns `None` when no line
/// had anything to remove.
pub fn dedent<D: EditorDocument>(doc: &mut D, unit: usize) -> Option<EditInfo> {
    let lines = line_range(doc);
    let removals: Vec<(usize, usize)> = line_starts(doc, lines)
        .into_iter()
        .map(|start| (start, leading_spaces(doc, start).min(unit)))
        .collect();

    if removals.iter().all(|&(_, removed)| removed == 0) {
        return None;
    }

    let original = doc.slice(lines.to_range()).unwrap_or_default();
    let text = original
        .split('\n')
        .zip(&removals)
        .map(|(line, &(_, removed))| &line[removed..])
        .collect::<Vec<_>>()
        .join("\n");

    // Earlier lines count in full, the bound's own line only up to the bound.
    let shift = |pos: usize| {
        let removed_before: usize = removals
            .iter()
            .take_while(|&&(start, _)| start <= pos)
            .map(|&(start, removed)| removed.min(pos - start))
            .sum();
        pos - removed_before
    };
    let sel = doc.selection();
    let new_sel = Selection::new(shift(sel.anchor), shift(sel.head));

    tracing::trace!(
        target: "togglenote::edit",
        unit,
        lines = removals.len(),
        "dedent"
    );
    Some(doc.replace_range(lines.to_range(), &text, new_sel))
}

/// Open an empty line after the current one without splitting it.
pub fn insert_line_below<D: EditorDocument>(doc: &mut D) -> EditInfo {
    let end = find_line_end(doc, doc.selection().end());
    doc.replace_range(end..end, "\n", Selection::collapsed(end + 1))
}

/// Open an empty line before the current one, caret on the new line.
pub fn insert_line_above<D: EditorDocument>(doc: &mut D) -> EditInfo {
    let start = find_line_start(doc, doc.selection().start());
    doc.replace_range(start..start, "\n", Selection::collapsed(start))
}

/// Bring the buffer up to date with text typed directly into the host field.
///
/// Only the differing middle is replaced, so the typing lands in the undo
/// history as one step and earlier steps stay valid. The caret goes after
/// the replaced text. Returns `None` when the texts already match.
pub fn sync_text<D: EditorDocument>(doc: &mut D, text: &str) -> Option<EditInfo> {
    let current = doc.content_string();
    if current == text {
        return None;
    }

    let prefix = current
        .chars()
        .zip(text.chars())
        .take_while(|(a, b)| a == b)
        .count();
    let old_len = current.chars().count();
    let new_len = text.chars().count();
    let suffix = current
        .chars()
        .rev()
        .zip(text.chars().rev())
        .take(old_len.min(new_len) - prefix)
        .take_while(|(a, b)| a == b)
        .count();

    let inserted: String = text
        .chars()
        .skip(prefix)
        .take(new_len - prefix - suffix)
        .collect();
    let caret = Selection::collapsed(new_len - suffix);

    tracing::trace!(
        target: "togglenote::edit",
        pos = prefix,
        deleted = old_len - prefix - suffix,
        inserted = new_len - prefix - suffix,
        "sync typed text"
    );
    Some(doc.replace_range(prefix..old_len - suffix, &inserted, caret))
}
