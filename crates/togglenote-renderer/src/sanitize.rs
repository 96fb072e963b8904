//! HTML sanitization: the only trust boundary between note text and the page.

use std::borrow::Cow;

use ammonia::Builder;

use crate::error::RenderError;
use crate::spoiler::SPOILER_CLASS;

/// Strips executable or unsafe markup from rendered HTML.
///
/// Implementations either return safe markup or fail; they never hand back
/// their input unchanged on error.
pub trait Sanitizer {
    fn sanitize(&self, html: &str) -> Result<String, RenderError>;
}

impl<S: Sanitizer + ?Sized> Sanitizer for &S {
    fn sanitize(&self, html: &str) -> Result<String, RenderError> {
        (**self).sanitize(html)
    }
}

impl<S: Sanitizer + ?Sized> Sanitizer for Box<S> {
    fn sanitize(&self, html: &str) -> Result<String, RenderError> {
        (**self).sanitize(html)
    }
}

/// `ammonia`-backed sanitizer.
///
/// Keeps ammonia's defaults (no scripts, no event handlers, no `javascript:`
/// URLs) and additionally allows the spoiler class on `span`, `language-*`
/// classes on `code`, and task-list checkboxes.
pub struct AmmoniaSanitizer {
    builder: Builder<'static>,
}

impl Default for AmmoniaSanitizer {
    fn default() -> Self {
        let mut builder = Builder::default();
        builder
            .add_tags(["input"])
            .add_tag_attributes("span", ["class"])
            .add_tag_attributes("code", ["class"])
            .add_tag_attributes("input", ["type", "checked", "disabled"])
            .attribute_filter(filter_attribute);
        Self { builder }
    }
}

impl AmmoniaSanitizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sanitizer for AmmoniaSanitizer {
    fn sanitize(&self, html: &str) -> Result<String, RenderError> {
        Ok(self.builder.clean(html).to_string())
    }
}

/// Narrow the attributes opened up above to the values the preview emits.
fn filter_attribute<'u>(element: &str, attribute: &str, value: &'u str) -> Option<Cow<'u, str>> {
    match (element, attribute) {
        ("span", "class") => keep_classes(value, |class| class == SPOILER_CLASS),
        ("code", "class") => keep_classes(value, |class| class.starts_with("language-")),
        ("input", "type") => (value == "checkbox").then_some(Cow::Borrowed(value)),
        _ => Some(Cow::Borrowed(value)),
    }
}

fn keep_classes<'u>(value: &'u str, keep: impl Fn(&str) -> bool) -> Option<Cow<'u, str>> {
    let kept: Vec<&str> = value.split_ascii_whitespace().filter(|c| keep(c)).collect();
    if kept.is_empty() {
        None
    } else {
        Some(Cow::Owned(kept.join(" ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(html: &str) -> String {
        AmmoniaSanitizer::new().sanitize(html).unwrap()
    }

    #[test]
    fn test_removes_scripts() {
        let out = clean("<p>hi</p><script>alert(1)</script>");
        assert_eq!(out, "<p>hi</p>");
    }

    #[test]
    fn test_removes_event_handlers_and_js_urls() {
        let html = r#"<img src="x.png" onerror="alert(1)"><a href="javascript:alert(1)">x</a>"#;
        let out = clean(html);
        assert!(!out.contains("onerror"));
        assert!(!out.contains("javascript:"));
        assert!(out.contains(r#"src="x.png""#));
    }

    #[test]
    fn test_keeps_spoiler_class_only() {
        insta::assert_snapshot!(
            clean(r#"<span class="spoiler-text evil" style="color:red">s</span>"#),
            @r#"<span class="spoiler-text">s</span>"#
        );
        assert_eq!(clean(r#"<span class="other">s</span>"#), "<span>s</span>");
    }

    #[test]
    fn test_keeps_code_language() {
        let out = clean(r#"<pre><code class="language-rust">fn main() {}</code></pre>"#);
        assert!(out.contains(r#"<code class="language-rust">"#));
    }

    #[test]
    fn test_task_list_checkbox() {
        let out = clean(r#"<li><input disabled="" type="checkbox" checked=""> done</li>"#);
        assert!(out.contains(r#"type="checkbox""#));
        assert!(out.contains("checked"));

        let out = clean(r#"<input type="text" value="x">"#);
        assert!(!out.contains("text"));
    }
}
