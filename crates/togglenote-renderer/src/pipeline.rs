//! Spoiler preprocess, markdown, sanitize.

use crate::error::RenderError;
use crate::markdown::markdown_to_html;
use crate::sanitize::{AmmoniaSanitizer, Sanitizer};
use crate::spoiler::preprocess_spoilers;

/// Turns note source into markup that is safe to inject into the preview.
pub struct RenderPipeline<S = AmmoniaSanitizer> {
    sanitizer: S,
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPipeline {
    pub fn new() -> Self {
        Self {
            sanitizer: AmmoniaSanitizer::new(),
        }
    }
}

impl<S: Sanitizer> RenderPipeline<S> {
    pub fn with_sanitizer(sanitizer: S) -> Self {
        Self { sanitizer }
    }

    /// Render from scratch. Absent source renders as empty markup.
    ///
    /// A sanitizer failure is returned as-is; unsanitized markup never leaves
    /// this function.
    pub fn render(&self, source: Option<&str>) -> Result<String, RenderError> {
        let source = match source {
            Some(s) if !s.is_empty() => s,
            _ => return Ok(String::new()),
        };

        let preprocessed = preprocess_spoilers(source);
        let html = markdown_to_html(&preprocessed);
        let safe = self.sanitizer.sanitize(&html)?;

        tracing::trace!(
            target: "togglenote::render",
            source_len = source.len(),
            html_len = safe.len(),
            "rendered preview"
        );
        Ok(safe)
    }
}
