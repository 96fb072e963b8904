use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    /// The sanitizer could not produce safe markup. Nothing is rendered.
    #[error("sanitizer failed: {reason}")]
    #[diagnostic(code(togglenote::render::sanitize))]
    Sanitize {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RenderError {
    pub fn sanitize(reason: impl Into<String>) -> Self {
        Self::Sanitize {
            reason: reason.into(),
            source: None,
        }
    }
}
