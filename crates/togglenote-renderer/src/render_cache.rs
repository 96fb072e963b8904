//! Single-entry memo over the render pipeline.
//!
//! Only the note being edited is ever previewed, so remembering the last
//! source string and its output is enough to make re-renders of unchanged
//! content free.

use crate::error::RenderError;
use crate::pipeline::RenderPipeline;
use crate::sanitize::{AmmoniaSanitizer, Sanitizer};

#[derive(Debug, Clone)]
struct CachedRender {
    source: String,
    html: String,
}

/// Render pipeline plus a cache keyed by the exact input string.
pub struct PreviewRenderer<S = AmmoniaSanitizer> {
    pipeline: RenderPipeline<S>,
    cache: Option<CachedRender>,
    renders: usize,
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new(RenderPipeline::new())
    }
}

impl<S: Sanitizer> PreviewRenderer<S> {
    pub fn new(pipeline: RenderPipeline<S>) -> Self {
        Self {
            pipeline,
            cache: None,
            renders: 0,
        }
    }

    /// Render `source`, reusing the previous output when the input is
    /// byte-for-byte unchanged. A failed render leaves the previous entry
    /// in place.
    pub fn render(&mut self, source: Option<&str>) -> Result<&str, RenderError> {
        let key = source.unwrap_or_default();

        if self.cache.as_ref().is_none_or(|c| c.source != key) {
            let html = self.pipeline.render(Some(key))?;
            self.renders += 1;
            self.cache = Some(CachedRender {
                source: key.to_owned(),
                html,
            });
        } else {
            tracing::trace!(target: "togglenote::render", "preview cache hit");
        }

        Ok(self.cache.as_ref().map_or("", |c| c.html.as_str()))
    }

    /// How many times the underlying pipeline actually ran.
    pub fn render_count(&self) -> usize {
        self.renders
    }
}
