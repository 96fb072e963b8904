//! Editor actions and input types.
//!
//! Platform-agnostic definitions for editor operations. `EditorAction`
//! represents semantic editing operations, `ToolbarCommand` the symbolic
//! names the toolbar invokes them by, and `Key`/`Modifiers`/`KeyCombo` the
//! keyboard input that the dispatcher classifies.

use std::fmt;
use std::str::FromStr;

use miette::Diagnostic;
use smol_str::SmolStr;
use thiserror::Error;

/// All possible editor actions.
///
/// These represent semantic operations on the document, decoupled from
/// how they're triggered (keyboard or toolbar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// Open an empty line after the current one.
    InsertLineBelow,

    /// Open an empty line before the current one.
    InsertLineAbove,

    /// Indent the selected lines by the configured unit.
    Indent,

    /// Dedent the selected lines by the configured unit.
    Dedent,

    /// Surround the selection (or a placeholder) with markers.
    WrapInsert {
        prefix: SmolStr,
        suffix: SmolStr,
        placeholder: SmolStr,
        select_result: bool,
    },

    /// Insert a self-contained line, selecting its placeholder if present.
    InsertLine {
        line: SmolStr,
        placeholder: Option<SmolStr>,
    },

    /// Undo the last change.
    Undo,

    /// Redo the last undone change.
    Redo,
}

impl EditorAction {
    /// Wrap-insert that selects the placeholder.
    pub fn wrap(prefix: &str, suffix: &str, placeholder: &str) -> Self {
        Self::WrapInsert {
            prefix: prefix.into(),
            suffix: suffix.into(),
            placeholder: placeholder.into(),
            select_result: true,
        }
    }

    /// Line insert with a placeholder to select.
    pub fn line(line: &str, placeholder: &str) -> Self {
        Self::InsertLine {
            line: line.into(),
            placeholder: Some(placeholder.into()),
        }
    }
}

/// Symbolic toolbar command names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarCommand {
    Bold,
    Italic,
    Strikethrough,
    Heading,
    UnorderedList,
    OrderedList,
    Blockquote,
    Code,
    CodeBlock,
    Link,
    Image,
    Table,
    Spoiler,
    Undo,
    Redo,
}

impl ToolbarCommand {
    pub const ALL: [ToolbarCommand; 15] = [
        Self::Bold,
        Self::Italic,
        Self::Strikethrough,
        Self::Heading,
        Self::UnorderedList,
        Self::OrderedList,
        Self::Blockquote,
        Self::Code,
        Self::CodeBlock,
        Self::Link,
        Self::Image,
        Self::Table,
        Self::Spoiler,
        Self::Undo,
        Self::Redo,
    ];

    /// The name the host uses for this command.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Strikethrough => "strikethrough",
            Self::Heading => "heading",
            Self::UnorderedList => "ul",
            Self::OrderedList => "ol",
            Self::Blockquote => "blockquote",
            Self::Code => "code",
            Self::CodeBlock => "codeblock",
            Self::Link => "link",
            Self::Image => "image",
            Self::Table => "table",
            Self::Spoiler => "spoiler",
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }
}

impl fmt::Display for ToolbarCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolbarCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.name() == s)
            .ok_or_else(|| CommandError::Unknown(s.into()))
    }
}

/// Errors from resolving toolbar commands.
#[derive(Debug, Error, Diagnostic)]
pub enum CommandError {
    #[error("unknown toolbar command `{0}`")]
    #[diagnostic(
        code(togglenote::command::unknown),
        help(
            "expected one of bold, italic, strikethrough, heading, ul, ol, blockquote, \
             code, codeblock, link, image, table, spoiler, undo, redo"
        )
    )]
    Unknown(SmolStr),
}

/// Key values for keyboard input.
///
/// Platform-agnostic key representation. Platform-specific code converts
/// from native key events to this enum with [`Key::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key.
    Character(SmolStr),

    /// Unknown/unidentified key.
    Unidentified,

    // === Structural ===
    Enter,
    Tab,

    // === Navigation ===
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,

    // === Modifiers ===
    Alt,
    AltGraph,
    CapsLock,
    Control,
    Meta,
    Shift,
}

impl Key {
    /// Create a character key.
    pub fn character(s: impl Into<SmolStr>) -> Self {
        Self::Character(s.into())
    }

    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn parse(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            "Tab" => Self::Tab,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Alt" => Self::Alt,
            "AltGraph" => Self::AltGraph,
            "CapsLock" => Self::CapsLock,
            "Control" => Self::Control,
            "Meta" => Self::Meta,
            "Shift" => Self::Shift,
            s if s.chars().count() == 1 => Self::character(s),
            _ => Self::Unidentified,
        }
    }

    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::ArrowLeft
                | Self::ArrowRight
                | Self::ArrowUp
                | Self::ArrowDown
                | Self::Home
                | Self::End
                | Self::PageUp
                | Self::PageDown
        )
    }

    /// Check if this is a modifier key.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Self::Alt | Self::AltGraph | Self::CapsLock | Self::Control | Self::Meta | Self::Shift
        )
    }
}

/// Modifier key state for a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    pub const META: Self = Self {
        meta: true,
        ..Self::NONE
    };

    /// Get the primary modifier for the platform (Cmd on Mac, Ctrl elsewhere).
    pub fn primary(is_mac: bool) -> Self {
        if is_mac { Self::META } else { Self::CTRL }
    }

    /// Get the primary modifier + Shift for the platform.
    pub fn primary_shift(is_mac: bool) -> Self {
        Self {
            shift: true,
            ..Self::primary(is_mac)
        }
    }

    /// Whether the platform's primary modifier is held.
    pub fn has_primary(&self, is_mac: bool) -> bool {
        if is_mac { self.meta } else { self.ctrl }
    }
}

/// A key combination for triggering an action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn shift(key: Key) -> Self {
        Self::with_modifiers(key, Modifiers::SHIFT)
    }

    pub fn primary(key: Key, is_mac: bool) -> Self {
        Self::with_modifiers(key, Modifiers::primary(is_mac))
    }

    pub fn primary_shift(key: Key, is_mac: bool) -> Self {
        Self::with_modifiers(key, Modifiers::primary_shift(is_mac))
    }
}

/// Result of handling a keydown event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeydownResult {
    /// Event was handled, prevent default.
    Handled,
    /// Event was not a keybinding, let platform handle it.
    NotHandled,
    /// Event should be passed through (navigation, etc.).
    PassThrough,
}
