//! Action execution for editor documents.
//!
//! This module provides the `execute_action` function that applies `EditorAction`
//! operations to any type implementing `EditorDocument`, and the table that
//! maps toolbar commands onto those actions.

use crate::actions::{EditorAction, ToolbarCommand};
use crate::config::EditorConfig;
use crate::document::EditorDocument;
use crate::edit;

const TABLE_TEMPLATE: &str = "| Header | Header |\n| ------ | ------ |\n| Cell   | Cell   |";
const CODE_BLOCK_TEMPLATE: &str = "```\ncode\n```";

/// Execute an editor action on a document.
///
/// This is the central dispatch point for all editor operations.
/// Returns true if the action was handled. A dedent over lines with no
/// leading spaces is still handled, it just leaves the text alone.
pub fn execute_action<D: EditorDocument>(
    doc: &mut D,
    action: &EditorAction,
    config: &EditorConfig,
) -> bool {
    let unit = config.indent_unit.get();
    match action {
        EditorAction::InsertLineBelow => {
            edit::insert_line_below(doc);
            true
        }
        EditorAction::InsertLineAbove => {
            edit::insert_line_above(doc);
            true
        }
        EditorAction::Indent => {
            edit::indent(doc, unit);
            true
        }
        EditorAction::Dedent => {
            edit::dedent(doc, unit);
            true
        }
        EditorAction::WrapInsert {
            prefix,
            suffix,
            placeholder,
            select_result,
        } => {
            edit::wrap_insert(doc, prefix, suffix, placeholder, *select_result);
            true
        }
        EditorAction::InsertLine { line, placeholder } => {
            edit::insert_line(doc, line, placeholder.as_deref());
            true
        }
        EditorAction::Undo => doc.undo(),
        EditorAction::Redo => doc.redo(),
    }
}

/// The action a toolbar button performs.
pub fn toolbar_action(command: ToolbarCommand) -> EditorAction {
    match command {
        ToolbarCommand::Bold => EditorAction::wrap("**", "**", "bold text"),
        ToolbarCommand::Italic => EditorAction::wrap("*", "*", "italic text"),
        ToolbarCommand::Strikethrough => EditorAction::wrap("~~", "~~", "strikethrough text"),
        ToolbarCommand::Code => EditorAction::wrap("`", "`", "code"),
        ToolbarCommand::Link => EditorAction::wrap("[", "](https://)", "link text"),
        ToolbarCommand::Image => EditorAction::wrap("![", "](https://)", "alt text"),
        ToolbarCommand::Spoiler => EditorAction::wrap("||", "||", "spoiler"),
        ToolbarCommand::Heading => EditorAction::line("## Heading", "Heading"),
        ToolbarCommand::UnorderedList => EditorAction::line("- List item", "List item"),
        ToolbarCommand::OrderedList => EditorAction::line("1. List item", "List item"),
        ToolbarCommand::Blockquote => EditorAction::line("> Quote", "Quote"),
        ToolbarCommand::CodeBlock => EditorAction::line(CODE_BLOCK_TEMPLATE, "code"),
        ToolbarCommand::Table => EditorAction::line(TABLE_TEMPLATE, "Header"),
        ToolbarCommand::Undo => EditorAction::Undo,
        ToolbarCommand::Redo => EditorAction::Redo,
    }
}
