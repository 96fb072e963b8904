//! Click-to-reveal for rendered spoilers.
//!
//! Revealed state lives only on the rendered element. A re-render recreates
//! the elements and every spoiler starts hidden again.

use smol_str::SmolStr;

use crate::spoiler::{REVEALED_CLASS, SPOILER_CLASS};

/// The class list of a rendered element.
pub trait ClassList {
    fn contains(&self, class: &str) -> bool;

    /// Flip `class`, returning whether it is present afterwards.
    fn toggle(&mut self, class: &str) -> bool;
}

/// What a preview click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealToggle {
    Revealed,
    Hidden,
    /// The target was not a spoiler.
    Ignored,
}

/// Toggle the revealed class on a clicked spoiler span.
///
/// Only the clicked element itself is inspected; clicks on anything without
/// the spoiler class are ignored.
pub fn handle_preview_click<C: ClassList + ?Sized>(target: &mut C) -> RevealToggle {
    if !target.contains(SPOILER_CLASS) {
        return RevealToggle::Ignored;
    }
    let state = if target.toggle(REVEALED_CLASS) {
        RevealToggle::Revealed
    } else {
        RevealToggle::Hidden
    };
    tracing::trace!(target: "togglenote::render", ?state, "spoiler toggled");
    state
}

/// In-memory class list, for hosts without a DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementClasses(Vec<SmolStr>);

impl ElementClasses {
    /// Parse a `class` attribute value.
    pub fn parse(class_attr: &str) -> Self {
        let mut classes = Self::default();
        for class in class_attr.split_ascii_whitespace() {
            if !classes.contains(class) {
                classes.0.push(class.into());
            }
        }
        classes
    }

    /// Render back to a `class` attribute value.
    pub fn to_attr(&self) -> String {
        self.0.join(" ")
    }
}

impl ClassList for ElementClasses {
    fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    fn toggle(&mut self, class: &str) -> bool {
        if let Some(idx) = self.0.iter().position(|c| c == class) {
            self.0.remove(idx);
            false
        } else {
            self.0.push(class.into());
            true
        }
    }
}
