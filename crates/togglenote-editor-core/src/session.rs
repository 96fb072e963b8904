//! Editing session: one document, its configuration, and change delivery.
//!
//! Keyboard shortcuts and toolbar commands both enter here, and both end with
//! the same [`ContentChange`] notification so the host cannot tell them apart.

use crate::actions::{CommandError, EditorAction, KeyCombo, KeydownResult, ToolbarCommand};
use crate::config::{EditorConfig, IndentUnit};
use crate::document::EditorDocument;
use crate::edit;
use crate::execute::{execute_action, toolbar_action};
use crate::keybindings::{KeybindingConfig, handle_keydown};
use crate::types::{EditInfo, Selection};

/// Snapshot delivered after every committed edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentChange {
    /// Full buffer text after the edit.
    pub text: String,
    pub selection: Selection,
    /// The edit that produced this state, if the command changed anything.
    pub edit: Option<EditInfo>,
}

/// Receives content-changed notifications.
pub trait ContentObserver {
    fn content_changed(&mut self, change: &ContentChange);
}

impl<F: FnMut(&ContentChange)> ContentObserver for F {
    fn content_changed(&mut self, change: &ContentChange) {
        self(change)
    }
}

/// Owns a document and routes input to it.
pub struct EditorSession<D: EditorDocument> {
    doc: D,
    config: EditorConfig,
    bindings: KeybindingConfig,
    observer: Option<Box<dyn ContentObserver>>,
}

impl<D: EditorDocument> EditorSession<D> {
    pub fn new(doc: D, config: EditorConfig, bindings: KeybindingConfig) -> Self {
        Self {
            doc,
            config,
            bindings,
            observer: None,
        }
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EditorConfig) {
        self.config = config;
    }

    pub fn set_indent_unit(&mut self, indent_unit: IndentUnit) {
        self.config.indent_unit = indent_unit;
    }

    pub fn set_observer(&mut self, observer: impl ContentObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn text(&self) -> String {
        self.doc.content_string()
    }

    pub fn selection(&self) -> Selection {
        self.doc.selection()
    }

    /// Switch to new content. The note store already knows it, so no
    /// notification is sent.
    pub fn load(&mut self, content: &str) {
        tracing::debug!(target: "togglenote::edit", chars = content.chars().count(), "load");
        self.doc.load(content);
    }

    /// Mirror a selection reported by the host, clamped to the buffer.
    pub fn set_selection(&mut self, selection: Selection) {
        let len = self.doc.len_chars();
        self.doc.set_selection(selection.clamp_to(len));
    }

    /// Apply text the user typed into the host field since the last sync.
    ///
    /// Unlike [`load`](Self::load) this keeps undo history, and it notifies
    /// like any other edit. Returns whether anything changed.
    pub fn sync_text(&mut self, text: &str) -> bool {
        if edit::sync_text(&mut self.doc, text).is_none() {
            return false;
        }
        self.notify();
        true
    }

    pub fn handle_keydown(&mut self, combo: &KeyCombo) -> KeydownResult {
        let result = handle_keydown(&mut self.doc, &self.bindings, &self.config, combo);
        if result == KeydownResult::Handled {
            self.notify();
        }
        result
    }

    /// Run a toolbar command by its symbolic name.
    pub fn run_command(&mut self, name: &str) -> Result<bool, CommandError> {
        let command = name.parse::<ToolbarCommand>()?;
        Ok(self.run_toolbar_command(command))
    }

    /// Run a toolbar command. Always notifies, even when undo/redo had
    /// nothing to do.
    pub fn run_toolbar_command(&mut self, command: ToolbarCommand) -> bool {
        tracing::debug!(target: "togglenote::edit", %command, "toolbar command");
        let handled = execute_action(&mut self.doc, &toolbar_action(command), &self.config);
        self.notify();
        handled
    }

    /// Execute an action directly and notify.
    pub fn execute(&mut self, action: &EditorAction) -> bool {
        let handled = execute_action(&mut self.doc, action, &self.config);
        self.notify();
        handled
    }

    fn notify(&mut self) {
        let Some(observer) = self.observer.as_mut() else {
            return;
        };
        let change = ContentChange {
            text: self.doc.content_string(),
            selection: self.doc.selection(),
            edit: self.doc.last_edit(),
        };
        tracing::trace!(
            target: "togglenote::edit",
            len = change.text.len(),
            start = change.selection.start(),
            end = change.selection.end(),
            "content changed"
        );
        observer.content_changed(&change);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::actions::Key;
    use crate::{EditorRope, PlainEditor, UndoableBuffer};

    type TestSession = EditorSession<PlainEditor<UndoableBuffer<EditorRope>>>;

    fn make_session(content: &str) -> (TestSession, Rc<RefCell<Vec<ContentChange>>>) {
        let doc = PlainEditor::new(UndoableBuffer::new(EditorRope::from_str(content), 100));
        let mut session =
            EditorSession::new(doc, EditorConfig::default(), KeybindingConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        session.set_observer(move |change: &ContentChange| sink.borrow_mut().push(change.clone()));
        (session, seen)
    }

    #[test]
    fn test_keyboard_and_toolbar_notify_alike() {
        let (mut keyboard, key_seen) = make_session("note");
        let (mut toolbar, bar_seen) = make_session("note");
        for session in [&mut keyboard, &mut toolbar] {
            session.set_selection(Selection::new(0, 4));
            session.run_command("bold").unwrap();
        }
        key_seen.borrow_mut().clear();
        bar_seen.borrow_mut().clear();

        let result = keyboard.handle_keydown(&KeyCombo::primary(Key::character("z"), false));
        assert_eq!(result, KeydownResult::Handled);
        assert!(toolbar.run_command("undo").unwrap());

        let key_seen = key_seen.borrow();
        assert_eq!(key_seen.len(), 1);
        assert_eq!(key_seen[0].text, "note");
        assert_eq!(key_seen.as_slice(), bar_seen.borrow().as_slice());
    }

    #[test]
    fn test_tab_keydown_matches_dispatched_indent() {
        let (mut keyboard, key_seen) = make_session("a\nb");
        let (mut dispatched, cmd_seen) = make_session("a\nb");
        keyboard.set_selection(Selection::new(0, 3));
        dispatched.set_selection(Selection::new(0, 3));

        keyboard.handle_keydown(&KeyCombo::new(Key::Tab));
        dispatched.execute(&EditorAction::Indent);

        let key_seen = key_seen.borrow();
        assert_eq!(key_seen.len(), 1);
        assert_eq!(key_seen[0].text, "    a\n    b");
        assert_eq!(key_seen[0].selection, Selection::new(4, 11));
        assert!(key_seen[0].edit.as_ref().is_some_and(|e| e.contains_newline));
        assert_eq!(key_seen.as_slice(), cmd_seen.borrow().as_slice());
    }

    #[test]
    fn test_sync_text_keeps_undo() {
        let (mut session, seen) = make_session("hi ");
        session.set_selection(Selection::collapsed(3));
        session.run_command("bold").unwrap();

        assert!(session.sync_text("hi **bold text**!"));
        assert!(!session.sync_text("hi **bold text**!"));
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(session.selection(), Selection::collapsed(17));

        assert!(session.run_command("undo").unwrap());
        assert_eq!(session.text(), "hi **bold text**");
        assert!(session.run_command("undo").unwrap());
        assert_eq!(session.text(), "hi ");
    }

    #[test]
    fn test_keydown_notifies_only_when_handled() {
        let (mut session, seen) = make_session("x");
        session.set_selection(Selection::collapsed(1));

        let result = session.handle_keydown(&KeyCombo::new(Key::character("y")));
        assert_eq!(result, KeydownResult::NotHandled);
        assert!(seen.borrow().is_empty());

        let result = session.handle_keydown(&KeyCombo::primary(Key::Enter, false));
        assert_eq!(result, KeydownResult::Handled);
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].text, "x\n");
        assert_eq!(seen[0].selection, Selection::collapsed(2));
        assert!(seen[0].edit.as_ref().is_some_and(|e| e.contains_newline));
    }

    #[test]
    fn test_unknown_command_does_not_notify() {
        let (mut session, seen) = make_session("");
        assert!(matches!(session.run_command("sparkle"), Err(CommandError::Unknown(_))));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_load_and_clamped_selection() {
        let (mut session, seen) = make_session("old");
        session.load("new note");
        assert_eq!(session.text(), "new note");
        assert_eq!(session.selection(), Selection::collapsed(0));

        session.set_selection(Selection::new(4, 99));
        assert_eq!(session.selection(), Selection::new(4, 8));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_undo_without_history_still_notifies() {
        let (mut session, seen) = make_session("keep");
        assert!(!session.run_toolbar_command(ToolbarCommand::Undo));
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].text, "keep");
    }
}
