//! Keyboard shortcut dispatch.
//!
//! Only a handful of structural keys are bound, plus undo/redo so the
//! editor's own history is the one the user steps through. Everything else
//! is left to the host text field.

use crate::actions::{EditorAction, Key, KeyCombo, KeydownResult};
use crate::config::EditorConfig;
use crate::document::EditorDocument;
use crate::execute::execute_action;

/// Resolves key combinations for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeybindingConfig {
    /// Cmd is the primary modifier instead of Ctrl.
    pub primary_is_meta: bool,
}

impl KeybindingConfig {
    pub fn default_for_platform(is_mac: bool) -> Self {
        Self {
            primary_is_meta: is_mac,
        }
    }

    /// Look up the action bound to `combo`.
    ///
    /// Only the key, the primary modifier and shift are considered.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<EditorAction> {
        let primary = combo.modifiers.has_primary(self.primary_is_meta);
        let shift = combo.modifiers.shift;

        match (&combo.key, primary, shift) {
            (Key::Enter, true, false) => Some(EditorAction::InsertLineBelow),
            (Key::Enter, true, true) => Some(EditorAction::InsertLineAbove),
            (Key::Tab, false, false) => Some(EditorAction::Indent),
            (Key::Tab, false, true) => Some(EditorAction::Dedent),
            (Key::Character(c), true, false) if c.eq_ignore_ascii_case("z") => {
                Some(EditorAction::Undo)
            }
            (Key::Character(c), true, true) if c.eq_ignore_ascii_case("z") => {
                Some(EditorAction::Redo)
            }
            (Key::Character(c), true, false) if c.eq_ignore_ascii_case("y") => {
                Some(EditorAction::Redo)
            }
            _ => None,
        }
    }
}

/// Handle a keydown event using the keybinding configuration.
///
/// Bound combinations are executed and reported as `Handled` so the host
/// prevents the default action. Navigation and bare modifier presses pass
/// through; everything else is left to the text field.
pub fn handle_keydown<D: EditorDocument>(
    doc: &mut D,
    bindings: &KeybindingConfig,
    config: &EditorConfig,
    combo: &KeyCombo,
) -> KeydownResult {
    if let Some(action) = bindings.lookup(combo) {
        tracing::debug!(target: "togglenote::edit", ?action, "keybinding");
        execute_action(doc, &action, config);
        return KeydownResult::Handled;
    }

    if combo.key.is_navigation() || combo.key.is_modifier() {
        return KeydownResult::PassThrough;
    }

    KeydownResult::NotHandled
}
