//! The `NoteEditor` class exported to JavaScript.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlTextAreaElement, KeyboardEvent};

use togglenote_editor_core::{
    ContentChange, DEFAULT_MAX_UNDO_STEPS, EditorConfig, EditorDocument, EditorRope,
    EditorSession, IndentUnit, Key, KeyCombo, KeybindingConfig, KeydownResult, Modifiers,
    NoteDocument, PlainEditor, UndoableBuffer,
};
use togglenote_renderer::PreviewRenderer;

use crate::platform::platform;
use crate::textarea;

/// Result of handling an event.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled, call preventDefault.
    Handled,
    /// Event should pass through to browser.
    PassThrough,
}

impl From<KeydownResult> for EventResult {
    fn from(r: KeydownResult) -> Self {
        match r {
            KeydownResult::Handled => EventResult::Handled,
            KeydownResult::PassThrough | KeydownResult::NotHandled => EventResult::PassThrough,
        }
    }
}

/// Second argument passed to the change callback.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsChangeDetail {
    selection_start: usize,
    selection_end: usize,
    inserted_len: Option<usize>,
    deleted_len: Option<usize>,
}

impl From<&ContentChange> for JsChangeDetail {
    fn from(change: &ContentChange) -> Self {
        Self {
            selection_start: change.selection.start(),
            selection_end: change.selection.end(),
            inserted_len: change.edit.as_ref().map(|e| e.inserted_len),
            deleted_len: change.edit.as_ref().map(|e| e.deleted_len),
        }
    }
}

type ChangeCallback = Rc<RefCell<Option<js_sys::Function>>>;

/// A note being edited, plus its preview renderer.
///
/// The change callback is invoked as `callback(text, detail)` after every
/// handled keystroke, every toolbar command and every sync that picked up
/// typed text. It runs while the editor is still busy, so it must not call
/// back into this editor.
#[wasm_bindgen]
pub struct NoteEditor {
    session: EditorSession<NoteDocument>,
    preview: PreviewRenderer,
    on_change: ChangeCallback,
}

#[wasm_bindgen]
impl NoteEditor {
    /// Create an empty editor with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_editor_config(EditorConfig::default())
    }

    /// Create an editor from a `{ indent_unit, theme }` config object.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<NoteEditor, JsError> {
        let config: EditorConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?;
        Ok(Self::with_editor_config(config))
    }

    /// Replace the config from a `{ indent_unit, theme }` object.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsError> {
        let config: EditorConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?;
        self.session.set_config(config);
        Ok(())
    }

    /// Current config as a plain object.
    #[wasm_bindgen(js_name = getConfig)]
    pub fn get_config(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.session.config())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = getMarkdown)]
    pub fn get_markdown(&self) -> String {
        self.session.text()
    }

    /// Switch to another note's content. Clears undo history.
    #[wasm_bindgen(js_name = setMarkdown)]
    pub fn set_markdown(&mut self, content: &str) {
        self.session.load(content);
    }

    /// Record text the user typed since the last sync as one undoable edit.
    ///
    /// For hosts driving `handleKeydown` themselves: call this from the
    /// field's `input` handler, or at least before every `handleKeydown` and
    /// `runCommand`. Returns whether the text changed.
    #[wasm_bindgen(js_name = syncText)]
    pub fn sync_text(&mut self, text: &str) -> bool {
        self.session.sync_text(text)
    }

    /// Pull a bound textarea's value and selection into the editor.
    ///
    /// `handleTextareaKeydown` and `runTextareaCommand` do this first, so
    /// wiring it to `input` only keeps change notifications live while typing.
    #[wasm_bindgen(js_name = syncFromTextarea)]
    pub fn sync_from_textarea(&mut self, textarea: &HtmlTextAreaElement) -> bool {
        let changed = self.session.sync_text(&textarea.value());
        let sel = textarea::read_selection(self.session.document(), textarea);
        self.session.set_selection(sel);
        changed
    }

    /// Mirror the host's selection, in UTF-16 code units.
    #[wasm_bindgen(js_name = setSelection)]
    pub fn set_selection(&mut self, start: u32, end: u32) {
        let sel = textarea::selection_from_utf16(self.session.document(), start, end, false);
        self.session.set_selection(sel);
    }

    #[wasm_bindgen(js_name = getSelectionStart)]
    pub fn get_selection_start(&self) -> u32 {
        textarea::selection_to_utf16(self.session.document()).0
    }

    #[wasm_bindgen(js_name = getSelectionEnd)]
    pub fn get_selection_end(&self) -> u32 {
        textarea::selection_to_utf16(self.session.document()).1
    }

    /// Handle a keydown by key value and modifier flags.
    ///
    /// Returns whether to preventDefault.
    #[wasm_bindgen(js_name = handleKeydown)]
    pub fn handle_keydown(
        &mut self,
        key: &str,
        ctrl: bool,
        alt: bool,
        shift: bool,
        meta: bool,
    ) -> EventResult {
        let combo = KeyCombo::with_modifiers(
            Key::parse(key),
            Modifiers {
                ctrl,
                alt,
                shift,
                meta,
            },
        );
        self.session.handle_keydown(&combo).into()
    }

    /// Handle a keydown on a bound textarea.
    ///
    /// Syncs the textarea's value and selection first, and on a handled key
    /// prevents the default action and writes text and selection back.
    #[wasm_bindgen(js_name = handleTextareaKeydown)]
    pub fn handle_textarea_keydown(
        &mut self,
        textarea: &HtmlTextAreaElement,
        event: &KeyboardEvent,
    ) -> EventResult {
        if event.is_composing() {
            return EventResult::PassThrough;
        }
        self.sync_from_textarea(textarea);

        let result = self.handle_keydown(
            &event.key(),
            event.ctrl_key(),
            event.alt_key(),
            event.shift_key(),
            event.meta_key(),
        );
        if result == EventResult::Handled {
            event.prevent_default();
            textarea::write_back(self.session.document(), textarea);
        }
        result
    }

    /// Run a toolbar command by name (`bold`, `heading`, `undo`, ...).
    #[wasm_bindgen(js_name = runCommand)]
    pub fn run_command(&mut self, name: &str) -> Result<bool, JsError> {
        self.session
            .run_command(name)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Run a toolbar command against a bound textarea and refocus it.
    #[wasm_bindgen(js_name = runTextareaCommand)]
    pub fn run_textarea_command(
        &mut self,
        textarea: &HtmlTextAreaElement,
        name: &str,
    ) -> Result<bool, JsError> {
        self.sync_from_textarea(textarea);
        let handled = self.run_command(name)?;
        textarea::write_back(self.session.document(), textarea);
        if let Err(err) = textarea.focus() {
            tracing::warn!(?err, "failed to refocus textarea");
        }
        Ok(handled)
    }

    /// Set the indent unit (1..=8 spaces).
    #[wasm_bindgen(js_name = setIndentSize)]
    pub fn set_indent_size(&mut self, size: i32) -> Result<(), JsError> {
        let unit = IndentUnit::new(i64::from(size)).map_err(|e| JsError::new(&e.to_string()))?;
        self.session.set_indent_unit(unit);
        Ok(())
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.session.document().can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.session.document().can_redo()
    }

    /// Sanitized preview HTML for the current content.
    #[wasm_bindgen(js_name = renderPreview)]
    pub fn render_preview(&mut self) -> Result<String, JsError> {
        let text = self.session.text();
        self.preview
            .render(Some(&text))
            .map(str::to_owned)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Render the preview straight into `target`.
    ///
    /// Replacing the markup resets every revealed spoiler.
    #[wasm_bindgen(js_name = renderPreviewInto)]
    pub fn render_preview_into(&mut self, target: &Element) -> Result<(), JsError> {
        let html = self.render_preview()?;
        target.set_inner_html(&html);
        Ok(())
    }

    /// Set or clear the change callback.
    #[wasm_bindgen(js_name = setOnChange)]
    pub fn set_on_change(&mut self, callback: Option<js_sys::Function>) {
        *self.on_change.borrow_mut() = callback;
    }
}

impl Default for NoteEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteEditor {
    fn with_editor_config(config: EditorConfig) -> Self {
        let doc = PlainEditor::new(UndoableBuffer::new(EditorRope::new(), DEFAULT_MAX_UNDO_STEPS));
        let bindings = KeybindingConfig::default_for_platform(platform().primary_is_meta());
        let mut session = EditorSession::new(doc, config, bindings);

        let on_change: ChangeCallback = Rc::new(RefCell::new(None));
        let callback = on_change.clone();
        session.set_observer(move |change: &ContentChange| notify_change(&callback, change));

        Self {
            session,
            preview: PreviewRenderer::default(),
            on_change,
        }
    }

    /// The session, for Rust hosts embedding the editor directly.
    pub fn session(&self) -> &EditorSession<NoteDocument> {
        &self.session
    }
}

fn notify_change(on_change: &ChangeCallback, change: &ContentChange) {
    let on_change = on_change.borrow();
    let Some(callback) = on_change.as_ref() else {
        return;
    };
    let detail = match serde_wasm_bindgen::to_value(&JsChangeDetail::from(change)) {
        Ok(detail) => detail,
        Err(err) => {
            tracing::warn!(%err, "failed to serialize change detail");
            JsValue::NULL
        }
    };
    if let Err(err) = callback.call2(&JsValue::NULL, &JsValue::from_str(&change.text), &detail) {
        tracing::error!(?err, "change callback threw");
    }
}
