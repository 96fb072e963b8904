//! Preview element glue: spoiler reveal clicks and theme detection.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{DomTokenList, Element, MouseEvent};

use togglenote_editor_core::Theme;
use togglenote_renderer::{ClassList, RevealToggle, reveal};

/// A live DOM class list.
pub struct DomClassList(pub DomTokenList);

impl DomClassList {
    pub fn of(element: &Element) -> Self {
        Self(element.class_list())
    }
}

impl ClassList for DomClassList {
    fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    fn toggle(&mut self, class: &str) -> bool {
        match self.0.toggle(class) {
            Ok(present) => present,
            Err(err) => {
                tracing::warn!(?err, class, "classList.toggle failed");
                self.0.contains(class)
            }
        }
    }
}

/// Click handler for the preview container.
///
/// Toggles the revealed state of the clicked spoiler. Returns whether the
/// click landed on a spoiler.
#[wasm_bindgen(js_name = handlePreviewClick)]
pub fn handle_preview_click(event: &MouseEvent) -> bool {
    let Some(element) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return false;
    };
    let mut classes = DomClassList::of(&element);
    reveal::handle_preview_click(&mut classes) != RevealToggle::Ignored
}

/// Initial theme name: a valid saved preference, else the OS dark-mode query.
#[wasm_bindgen(js_name = detectTheme)]
pub fn detect_theme(saved: Option<String>) -> String {
    Theme::from_preference(saved.as_deref(), prefers_dark())
        .as_str()
        .to_owned()
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mql| mql.matches())
}
