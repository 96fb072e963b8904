//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

/// CommonMark plus the GFM extensions notes use: tables, strikethrough and
/// task lists.
pub fn default_md_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Convert markdown to (unsanitized) HTML.
pub fn markdown_to_html(source: &str) -> String {
    let parser = Parser::new_ext(source, default_md_options());
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(markdown_to_html(""), "");
    }

    #[test]
    fn test_inline_markup() {
        insta::assert_snapshot!(
            markdown_to_html("**x** and ~~y~~").trim_end(),
            @"<p><strong>x</strong> and <del>y</del></p>"
        );
    }

    #[test]
    fn test_blocks() {
        let html = markdown_to_html(concat!(
            "## Title\n\n",
            "- [x] done\n\n",
            "> quote\n\n",
            "| a | b |\n|---|---|\n| 1 | 2 |\n",
        ));
        assert!(html.contains("<h2>Title</h2>"));
        assert!(html.contains(r#"type="checkbox""#));
        assert!(html.contains("checked"));
        assert!(html.contains("<blockquote>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>2</td>"));
    }

    #[test]
    fn test_inline_html_passes_through() {
        let html = markdown_to_html(r#"a<span class="spoiler-text">*b*</span>c"#);
        assert_eq!(
            html,
            "<p>a<span class=\"spoiler-text\"><em>b</em></span>c</p>\n"
        );
    }
}
