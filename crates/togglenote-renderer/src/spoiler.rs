//! `||spoiler||` inline syntax.
//!
//! Runs before markdown parsing, so the span wraps raw source and markdown
//! inside a spoiler is still parsed as inline content.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Class carried by every rendered spoiler span.
pub const SPOILER_CLASS: &str = "spoiler-text";

/// Class toggled on a spoiler span once the reader clicks it.
pub const REVEALED_CLASS: &str = "revealed";

/// Shortest `||...||` pair, matching across line breaks.
pub static SPOILER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\|\|(.*?)\|\|").unwrap());

/// Rewrite each `||text||` pair into a spoiler span, left to right.
///
/// Unpaired delimiters stay as literal text. Borrows the input when there is
/// nothing to rewrite.
pub fn preprocess_spoilers(source: &str) -> Cow<'_, str> {
    SPOILER_RE.replace_all(source, |caps: &Captures| {
        format!(r#"<span class="{SPOILER_CLASS}">{}</span>"#, &caps[1])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pair() {
        insta::assert_snapshot!(
            preprocess_spoilers("a||b||c"),
            @r#"a<span class="spoiler-text">b</span>c"#
        );
    }

    #[test]
    fn test_unpaired_is_untouched() {
        let out = preprocess_spoilers("a||b");
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, "a||b");
    }

    #[test]
    fn test_pairs_are_minimal_and_ordered() {
        insta::assert_snapshot!(
            preprocess_spoilers("||a||, ||b|| ||"),
            @r#"<span class="spoiler-text">a</span>, <span class="spoiler-text">b</span> ||"#
        );
    }

    #[test]
    fn test_spans_line_breaks() {
        assert_eq!(
            preprocess_spoilers("||first\nsecond||"),
            "<span class=\"spoiler-text\">first\nsecond</span>"
        );
    }

    #[test]
    fn test_content_kept_verbatim() {
        assert_eq!(
            preprocess_spoilers("||**bold** $1||"),
            "<span class=\"spoiler-text\">**bold** $1</span>"
        );
        assert_eq!(preprocess_spoilers("||||"), "<span class=\"spoiler-text\"></span>");
    }
}
