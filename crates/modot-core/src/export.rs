//! Exporting the document as a markdown file.

/// MIME type of exported documents.
pub const MARKDOWN_MIME: &str = "text/markdown;charset=utf-8";

/// Extension appended to export filenames that lack it.
pub const MARKDOWN_EXTENSION: &str = ".md";

/// A file ready to hand to the platform downloader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime: &'static str,
    pub contents: String,
}

impl ExportFile {
    /// Build an export from the filename field and the current document.
    pub fn markdown(filename_input: &str, default_filename: &str, contents: String) -> Self {
        Self {
            filename: normalize_filename(filename_input, default_filename),
            mime: MARKDOWN_MIME,
            contents,
        }
    }
}

/// Trim the user's filename, default it when blank, and make sure it ends in
/// `.md` (compared case-insensitively, so `notes.MD` is left alone).
pub fn normalize_filename(input: &str, default_filename: &str) -> String {
    let trimmed = input.trim();
    let mut filename = if trimmed.is_empty() {
        default_filename.to_owned()
    } else {
        trimmed.to_owned()
    };
    if !filename.to_lowercase().ends_with(MARKDOWN_EXTENSION) {
        filename.push_str(MARKDOWN_EXTENSION);
    }
    filename
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_filename() {
        assert_eq!(normalize_filename("", "Untitled.md"), "Untitled.md");
        assert_eq!(normalize_filename("   ", "Untitled.md"), "Untitled.md");
        assert_eq!(normalize_filename("notes", "Untitled.md"), "notes.md");
        assert_eq!(normalize_filename("notes.MD", "Untitled.md"), "notes.MD");
        assert_eq!(normalize_filename("  notes.md  ", "Untitled.md"), "notes.md");
        assert_eq!(normalize_filename("notes.txt", "Untitled.md"), "notes.txt.md");
    }

    #[test]
    fn test_default_without_extension_gets_one() {
        assert_eq!(normalize_filename("", "Untitled"), "Untitled.md");
    }

    #[test]
    fn test_export_file() {
        let file = ExportFile::markdown("draft", "Untitled.md", "# Draft".to_owned());
        assert_eq!(file.filename, "draft.md");
        assert_eq!(file.mime, "text/markdown;charset=utf-8");
        assert_eq!(file.contents, "# Draft");
    }
}
