//! Recording fakes for driving the controller without a browser.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use modot_core::{
    ContainerMetrics, Downloader, EditorWidget, ExportFile, ModePresentation, PaneWidths,
    PlatformError, View,
};

pub const NS: &str = "com.markdownlivepreview";

pub struct RecordingView {
    pub metrics: Cell<ContainerMetrics>,
    pub widths: RefCell<Vec<PaneWidths>>,
    pub presentation: Cell<Option<ModePresentation>>,
    pub dragging: Cell<bool>,
    pub preview_html: RefCell<String>,
    pub filename: RefCell<String>,
    pub initialized: Cell<bool>,
}

impl RecordingView {
    /// A wrapper at x = 0 whose panes share `available` pixels around a 4px divider.
    pub fn with_available(available: f64) -> Self {
        Self {
            metrics: Cell::new(ContainerMetrics {
                left: 0.0,
                width: available + 4.0,
                divider_width: 4.0,
            }),
            widths: RefCell::new(Vec::new()),
            presentation: Cell::new(None),
            dragging: Cell::new(false),
            preview_html: RefCell::new(String::new()),
            filename: RefCell::new(String::new()),
            initialized: Cell::new(false),
        }
    }

    pub fn last_widths(&self) -> PaneWidths {
        *self.widths.borrow().last().expect("no widths applied")
    }

    pub fn preview(&self) -> String {
        self.preview_html.borrow().clone()
    }
}

impl View for RecordingView {
    fn container_metrics(&self) -> ContainerMetrics {
        self.metrics.get()
    }

    fn set_pane_widths(&self, widths: PaneWidths) {
        self.widths.borrow_mut().push(widths);
    }

    fn apply_mode(&self, presentation: ModePresentation) {
        self.presentation.set(Some(presentation));
    }

    fn set_dragging(&self, dragging: bool) {
        self.dragging.set(dragging);
    }

    fn set_preview_html(&self, html: &str) {
        *self.preview_html.borrow_mut() = html.to_owned();
    }

    fn filename_input(&self) -> String {
        self.filename.borrow().clone()
    }

    fn mark_initialized(&self) {
        self.initialized.set(true);
    }
}

#[derive(Default)]
pub struct FakeEditor {
    pub text: RefCell<String>,
    pub layout_requests: Cell<usize>,
}

impl FakeEditor {
    /// Simulate the user replacing the document.
    pub fn type_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_owned();
    }
}

impl EditorWidget for FakeEditor {
    fn value(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_value(&self, text: &str) {
        *self.text.borrow_mut() = text.to_owned();
    }

    fn layout(&self) {
        self.layout_requests.set(self.layout_requests.get() + 1);
    }
}

#[derive(Default)]
pub struct RecordingDownloader {
    pub files: RefCell<Vec<ExportFile>>,
    pub fail: bool,
}

impl Downloader for RecordingDownloader {
    fn download(&self, file: &ExportFile) -> Result<(), PlatformError> {
        if self.fail {
            return Err(PlatformError::from("blob construction failed"));
        }
        self.files.borrow_mut().push(file.clone());
        Ok(())
    }
}
