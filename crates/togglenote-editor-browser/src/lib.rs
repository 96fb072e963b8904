//! Browser bindings for the togglenote editor.
//!
//! Binds the editing core to a plain `<textarea>` and the preview pipeline to
//! a preview element. It assumes a `wasm32-unknown-unknown` target.
//!
//! # Architecture
//!
//! - `editor`: the `NoteEditor` class exported to JavaScript
//! - `textarea`: textarea selection/value sync (UTF-16 ↔ char offsets)
//! - `preview`: spoiler click handling and theme detection
//! - `platform`: OS detection for the primary modifier key
//!
//! # Re-exports
//!
//! The core and renderer crates are re-exported so consumers only need to
//! depend on `togglenote-editor-browser`.

pub use togglenote_editor_core;
pub use togglenote_renderer;

pub mod editor;
pub mod platform;
pub mod preview;
pub mod textarea;

pub use editor::{EventResult, NoteEditor};
pub use platform::platform;
pub use preview::{DomClassList, detect_theme, handle_preview_click};

use wasm_bindgen::prelude::*;

/// Install the panic hook and console tracing.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    {
        use tracing::Level;
        use tracing::subscriber::set_global_default;
        use tracing_subscriber::Registry;
        use tracing_subscriber::layer::SubscriberExt;

        let console_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };

        let wasm_layer = tracing_wasm::WASMLayer::new(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(console_level)
                .build(),
        );

        // Already set when the host initialises twice
        let _ = set_global_default(Registry::default().with(wasm_layer));
    }
}
