//! togglenote-editor-core: Pure Rust note editing logic without framework dependencies.
//!
//! This crate provides:
//! - `TextBuffer` trait for text storage abstraction
//! - `EditorRope` - ropey-backed implementation
//! - `EditorDocument` - buffer + selection with a single `replace_range` primitive
//! - Markdown edit operations, toolbar commands and keybindings, all generic
//!   over `EditorDocument`
//! - `EditorSession` - routes input and delivers content-changed notifications

pub mod actions;
pub mod config;
pub mod document;
pub mod edit;
pub mod execute;
pub mod keybindings;
pub mod platform;
pub mod session;
pub mod text;
pub mod text_helpers;
pub mod types;
pub mod undo;

pub use actions::{
    CommandError, EditorAction, Key, KeyCombo, KeydownResult, Modifiers, ToolbarCommand,
};
pub use config::{ConfigError, EditorConfig, IndentUnit, Theme};
pub use document::{EditorDocument, PlainEditor};
pub use execute::{execute_action, toolbar_action};
pub use keybindings::{KeybindingConfig, handle_keydown};
pub use platform::Platform;
pub use session::{ContentChange, ContentObserver, EditorSession};
pub use smol_str::SmolStr;
pub use text::{EditorRope, TextBuffer};
pub use types::{EditInfo, LineRange, Selection};
pub use undo::{DEFAULT_MAX_UNDO_STEPS, UndoManager, UndoableBuffer};

/// The document type used by hosts that don't need a custom buffer.
pub type NoteDocument = PlainEditor<UndoableBuffer<EditorRope>>;
