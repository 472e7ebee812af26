//! Platform abstraction traits for the editor shell.
//!
//! These traits define the interface between the session controller and the
//! platform-specific implementations (browser DOM, Monaco, blob downloads).
//! The controller only ever talks to these, so the same sequencing runs in the
//! browser and under native tests.

use miette::Diagnostic;

use crate::export::ExportFile;
use crate::layout::{ContainerMetrics, PaneWidths};
use crate::mode::ModePresentation;

/// Error type for platform operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum PlatformError {
    /// A required element is not in the document.
    #[error("element #{0} not found")]
    #[diagnostic(
        code(modot::dom::missing_element),
        help("the host page must contain every element id the editor mounts on")
    )]
    MissingElement(String),

    /// An element exists but is not of the expected type.
    #[error("element #{id} is not a {expected}")]
    #[diagnostic(code(modot::dom::element_type))]
    WrongElementType { id: String, expected: &'static str },

    /// The code editor widget could not be created.
    #[error("editor widget failed to start: {0}")]
    #[diagnostic(
        code(modot::editor::init),
        help("check that the Monaco bundle loaded before the editor was mounted")
    )]
    EditorInit(String),

    /// Mount options could not be read.
    #[error("invalid mount options: {0}")]
    #[diagnostic(code(modot::options))]
    InvalidOptions(String),

    /// Any other failure reported by the host environment.
    #[error("{0}")]
    #[diagnostic(code(modot::platform))]
    Js(String),
}

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError::Js(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError::Js(s)
    }
}

/// The page surrounding the editor: panes, divider, buttons, preview output.
///
/// Methods are best-effort; a view that cannot apply a change ignores it.
pub trait View {
    /// Current wrapper and divider dimensions.
    fn container_metrics(&self) -> ContainerMetrics;

    /// Set the edit and preview pane widths.
    fn set_pane_widths(&self, widths: PaneWidths);

    /// Clear every mode-specific class and indicator, then apply `presentation`.
    fn apply_mode(&self, presentation: ModePresentation);

    /// Toggle the global "dragging" indicator.
    fn set_dragging(&self, dragging: bool);

    /// Replace the preview pane's HTML. The input is already sanitized.
    fn set_preview_html(&self, html: &str);

    /// Raw contents of the filename field.
    fn filename_input(&self) -> String;

    /// Mark the wrapper as initialized so gated CSS transitions kick in.
    fn mark_initialized(&self);
}

/// The embedded code editor.
pub trait EditorWidget {
    /// Full current text.
    fn value(&self) -> String;

    /// Replace the whole text.
    fn set_value(&self, text: &str);

    /// Recompute the widget's internal layout now.
    fn layout(&self);

    /// Recompute layout once pending reflow has settled.
    ///
    /// Automatic layout is off, so this must follow every size or visibility
    /// change. The default runs immediately; browser widgets defer it to the
    /// next animation frame.
    fn request_layout(&self) {
        self.layout();
    }
}

/// Hands a finished export to the user.
pub trait Downloader {
    fn download(&self, file: &ExportFile) -> Result<(), PlatformError>;
}

impl<T: View> View for &T {
    fn container_metrics(&self) -> ContainerMetrics {
        (*self).container_metrics()
    }

    fn set_pane_widths(&self, widths: PaneWidths) {
        (*self).set_pane_widths(widths)
    }

    fn apply_mode(&self, presentation: ModePresentation) {
        (*self).apply_mode(presentation)
    }

    fn set_dragging(&self, dragging: bool) {
        (*self).set_dragging(dragging)
    }

    fn set_preview_html(&self, html: &str) {
        (*self).set_preview_html(html)
    }

    fn filename_input(&self) -> String {
        (*self).filename_input()
    }

    fn mark_initialized(&self) {
        (*self).mark_initialized()
    }
}

impl<T: EditorWidget> EditorWidget for &T {
    fn value(&self) -> String {
        (*self).value()
    }

    fn set_value(&self, text: &str) {
        (*self).set_value(text)
    }

    fn layout(&self) {
        (*self).layout()
    }

    fn request_layout(&self) {
        (*self).request_layout()
    }
}

impl<T: Downloader> Downloader for &T {
    fn download(&self, file: &ExportFile) -> Result<(), PlatformError> {
        (*self).download(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PlatformError::MissingElement("preview".into()).to_string(),
            "element #preview not found"
        );
        assert_eq!(
            PlatformError::WrongElementType {
                id: "filename-input".into(),
                expected: "HTMLInputElement"
            }
            .to_string(),
            "element #filename-input is not a HTMLInputElement"
        );
        assert_eq!(PlatformError::from("boom").to_string(), "boom");
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = PlatformError::EditorInit("no monaco".into());
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("modot::editor::init")
        );
        assert!(err.help().is_some());
    }
}
