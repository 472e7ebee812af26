//! Markdown to sanitized HTML.
//!
//! Conversion runs with GitHub-flavored extensions and line-break-preserving
//! soft breaks; the resulting HTML always goes through the sanitizer before it
//! reaches the preview pane.

use pulldown_cmark::{Event, Options, Parser};

/// Parser options for the preview.
///
/// Heading attributes stay off so no `id`s are generated for headings.
pub fn default_md_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
}

/// Converts markdown to HTML that is safe to assign to `innerHTML`.
///
/// Pure and idempotent: the same input always yields the same output, and no
/// input makes it fail.
pub struct MarkdownRenderer {
    options: Options,
    sanitizer: ammonia::Builder<'static>,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let mut sanitizer = ammonia::Builder::default();
        // Task list checkboxes; everything else is ammonia's allow-list.
        sanitizer
            .add_tags(&["input"])
            .add_tag_attributes("input", &["type", "checked", "disabled"]);
        Self {
            options: default_md_options(),
            sanitizer,
        }
    }

    /// Unsanitized conversion. Single newlines become `<br>`.
    pub fn to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options).map(|event| match event {
            Event::SoftBreak => Event::HardBreak,
            other => other,
        });
        let mut html = String::with_capacity(markdown.len() + markdown.len() / 2);
        pulldown_cmark::html::push_html(&mut html, parser);
        html
    }

    /// Strip executable content, keep structural and formatting markup.
    pub fn sanitize(&self, html: &str) -> String {
        self.sanitizer.clean(html).to_string()
    }

    /// Full pipeline: convert, then sanitize.
    pub fn render(&self, markdown: &str) -> String {
        self.sanitize(&self.to_html(markdown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str) -> String {
        MarkdownRenderer::new().render(markdown)
    }

    #[test]
    fn test_heading_without_id() {
        let html = render("# Hi");
        assert!(html.contains("<h1>Hi</h1>"), "{html}");
        assert!(!html.contains("id="));
    }

    #[test]
    fn test_single_newline_is_line_break() {
        let html = render("first\nsecond");
        assert!(html.contains("first<br>"), "{html}");
        assert!(html.contains("second"));
    }

    #[test]
    fn test_gfm_extensions() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~\n\n- [x] done\n- [ ] todo\n");
        assert!(html.contains("<table>"), "{html}");
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("type=\"checkbox\""));
        assert!(html.contains("checked"));
    }

    #[test]
    fn test_script_is_stripped() {
        let html = render("before\n\n<script>alert('x')</script>\n\nafter");
        assert!(!html.contains("<script"), "{html}");
        assert!(!html.contains("alert('x')"));
        assert!(html.contains("before"));
        assert!(html.contains("after"));
    }

    #[test]
    fn test_event_handlers_are_stripped() {
        let html = render("<img src=\"x.png\" onerror=\"alert(1)\">\n\n<p onclick=\"steal()\">hi</p>");
        assert!(!html.contains("onerror"), "{html}");
        assert!(!html.contains("onclick"));
        assert!(html.contains("<img"));
    }

    #[test]
    fn test_javascript_links_are_stripped() {
        let html = render("[click](javascript:alert(1))");
        assert!(!html.contains("javascript:"), "{html}");
        assert!(html.contains("click"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let renderer = MarkdownRenderer::new();
        let source = "# Title\n\nSome *text* with `code`\nand a break.\n";
        assert_eq!(renderer.render(source), renderer.render(source));
    }

    #[test]
    fn test_malformed_input_degrades_to_text() {
        for source in ["[unclosed", "**bold", "```\nno fence end", "<div", "| a |\n|-", "\0", ""] {
            let _ = render(source);
        }
        assert!(render("[unclosed").contains("[unclosed"));
    }
}
