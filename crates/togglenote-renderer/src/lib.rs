//! togglenote-renderer: the live preview pipeline.
//!
//! Note source goes through three stages, in order:
//! - `||spoiler||` preprocessing into spoiler spans
//! - markdown to HTML (`pulldown-cmark`)
//! - sanitization behind the [`Sanitizer`] seam (`ammonia` by default)
//!
//! [`PreviewRenderer`] memoizes the last render; [`handle_preview_click`]
//! implements click-to-reveal on the rendered spoilers.

pub mod error;
pub mod markdown;
pub mod pipeline;
pub mod render_cache;
pub mod reveal;
pub mod sanitize;
pub mod spoiler;

pub use error::RenderError;
pub use markdown::{default_md_options, markdown_to_html};
pub use pipeline::RenderPipeline;
pub use render_cache::PreviewRenderer;
pub use reveal::{ClassList, ElementClasses, RevealToggle, handle_preview_click};
pub use sanitize::{AmmoniaSanitizer, Sanitizer};
pub use spoiler::{REVEALED_CLASS, SPOILER_CLASS, preprocess_spoilers};
