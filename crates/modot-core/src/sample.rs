//! Welcome document shown when nothing has been saved yet.

const WELCOME_SOURCE: &str = "# modot

    Welcome to your new streamlined Markdown editor!

    ## Core Features
    - **Live Preview**: See your rendered Markdown as you type.
    - **Resizable Panes**: Drag the central divider to adjust the view.
    - **Syntax Highlighting**: Powered by the Monaco Editor (the engine behind VS Code).
    - **GitHub Flavored Markdown**: Tables, task lists and strikethrough render as on GitHub.
    - **Security**: Rendered HTML is sanitized before display, preventing XSS attacks.
    - **Layout Modes**: Switch between Edit, Preview, and Side-by-Side views.
";

/// The welcome document, normalized.
pub fn welcome_document() -> String {
    strip_line_indent(WELCOME_SOURCE)
}

/// Strip leading whitespace from every line and drop whitespace-only lines.
///
/// A trailing newline on the input is kept.
pub fn strip_line_indent(text: &str) -> String {
    let mut out = text
        .lines()
        .map(str::trim_start)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    if text.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_indent() {
        assert_eq!(strip_line_indent("  a\n\n    b\n"), "a\nb\n");
        assert_eq!(strip_line_indent("a\n \t\nb"), "a\nb");
        assert_eq!(strip_line_indent(""), "");
    }

    #[test]
    fn test_welcome_document() {
        let doc = welcome_document();
        assert!(doc.starts_with("# modot\nWelcome"));
        assert!(doc.contains("\n## Core Features\n- **Live Preview**"));
        assert!(doc.ends_with("views.\n"));
        assert!(!doc.lines().any(|l| l.starts_with(' ')));
    }
}
