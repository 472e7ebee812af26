//! The layout and session controller.
//!
//! Owns the session state (view mode, split ratio, drag flag) and sequences
//! every reaction to user input: render and persist on edit, live layout while
//! dragging, persistence on release, mode transitions, shortcuts and export.
//! Platform work goes through the traits in [`crate::platform`].

use crate::config::ModotConfig;
use crate::export::ExportFile;
use crate::keymap::{KeyChord, Shortcut};
use crate::layout::{SplitLayout, SplitRatio};
use crate::mode::ViewMode;
use crate::platform::{Downloader, EditorWidget, View};
use crate::render::MarkdownRenderer;
use crate::sample::welcome_document;
use crate::storage::{KeyValueStore, Persistence};

/// Mutable UI state for one page session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub mode: ViewMode,
    /// Ratio last applied, including live (unsaved) drag positions.
    pub ratio: SplitRatio,
    pub dragging: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            mode: ViewMode::SideBySide,
            ratio: SplitRatio::EVEN,
            dragging: false,
        }
    }
}

pub struct Controller<S, V, E, D> {
    persistence: Persistence<S>,
    view: V,
    editor: E,
    downloader: D,
    renderer: MarkdownRenderer,
    layout: SplitLayout,
    default_filename: String,
    state: SessionState,
}

impl<S, V, E, D> Controller<S, V, E, D>
where
    S: KeyValueStore,
    V: View,
    E: EditorWidget,
    D: Downloader,
{
    pub fn new(config: &ModotConfig, store: S, view: V, editor: E, downloader: D) -> Self {
        Self {
            persistence: Persistence::new(store, config),
            view,
            editor,
            downloader,
            renderer: MarkdownRenderer::new(),
            layout: SplitLayout::new(config.min_pane_width, config.fallback_divider_width),
            default_filename: config.default_filename.clone(),
            state: SessionState::default(),
        }
    }

    /// Run the startup sequence.
    ///
    /// Restores the split ratio, loads the saved document (or the welcome
    /// document), renders and persists it, forces side-by-side mode and marks
    /// the UI initialized. The saved view mode is intentionally not restored.
    ///
    /// Hosts must attach the editor's change listener only after this returns;
    /// the initial text is rendered and persisted here.
    pub fn start(&mut self) {
        self.state.ratio = self.persistence.load_ratio();
        self.apply_ratio(self.state.ratio);

        let initial = self
            .persistence
            .load_content()
            .unwrap_or_else(welcome_document);
        self.editor.set_value(&initial);
        self.publish(&initial);

        self.set_view_mode(ViewMode::SideBySide);
        self.view.mark_initialized();
        tracing::info!(ratio = %self.state.ratio, "editor session started");
    }

    /// The editor reported a content change.
    pub fn content_changed(&mut self) {
        let text = self.editor.value();
        self.publish(&text);
    }

    fn publish(&self, text: &str) {
        self.view.set_preview_html(&self.renderer.render(text));
        self.persistence.save_content(text);
    }

    /// Size the panes for `ratio` and schedule an editor re-layout.
    pub fn apply_ratio(&self, ratio: SplitRatio) {
        let metrics = self.view.container_metrics();
        self.view
            .set_pane_widths(self.layout.pane_widths(ratio, &metrics));
        self.editor.request_layout();
    }

    /// Pointer went down on the divider.
    pub fn begin_drag(&mut self) {
        self.state.dragging = true;
        self.view.set_dragging(true);
        tracing::debug!("divider drag started");
    }

    /// Pointer moved to `pointer_x` (viewport coordinates). Ignored unless dragging.
    pub fn drag_to(&mut self, pointer_x: f64) {
        if !self.state.dragging {
            return;
        }
        let metrics = self.view.container_metrics();
        if let Some(ratio) = self.layout.ratio_at(pointer_x, &metrics) {
            self.state.ratio = ratio;
            self.apply_ratio(ratio);
        }
    }

    /// Pointer released or cancelled. Persists the last live ratio.
    pub fn end_drag(&mut self) {
        if !self.state.dragging {
            return;
        }
        self.state.dragging = false;
        self.view.set_dragging(false);
        self.persistence.save_ratio(self.state.ratio);
        tracing::debug!(ratio = %self.state.ratio, "divider drag ended");
    }

    /// Double-click on the divider: back to an even split, saved immediately.
    pub fn reset_ratio(&mut self) {
        self.state.ratio = SplitRatio::EVEN;
        self.apply_ratio(self.state.ratio);
        self.persistence.save_ratio(self.state.ratio);
    }

    /// Window resized: re-fit the last persisted ratio, not the live one.
    pub fn window_resized(&self) {
        self.apply_ratio(self.persistence.load_ratio());
    }

    /// Switch to `mode`, update the DOM and persist it.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.apply_mode(mode.presentation());
        if mode == ViewMode::SideBySide {
            self.apply_ratio(self.persistence.load_ratio());
        }
        self.editor.request_layout();
        self.state.mode = mode;
        self.persistence.save_view_mode(mode);
        tracing::debug!(%mode, "view mode changed");
    }

    /// The toggle button: edit <-> preview, side-by-side -> edit.
    pub fn toggle_view(&mut self) {
        self.set_view_mode(self.state.mode.toggled());
    }

    /// Window-level keydown. Returns `true` if the event was consumed and its
    /// default action should be suppressed.
    pub fn key_pressed(&mut self, chord: &KeyChord) -> bool {
        match Shortcut::from_chord(chord) {
            Some(Shortcut::ToggleView) => {
                self.toggle_view();
                true
            }
            None => false,
        }
    }

    /// Export the current document under the name in the filename field.
    pub fn download(&self) {
        let file = ExportFile::markdown(
            &self.view.filename_input(),
            &self.default_filename,
            self.editor.value(),
        );
        if let Err(e) = self.downloader.download(&file) {
            tracing::warn!(filename = %file.filename, "download failed: {}", e);
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.mode
    }

    pub fn ratio(&self) -> SplitRatio {
        self.state.ratio
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    /// The mode last written to storage. Never read back at startup.
    pub fn persisted_view_mode(&self) -> Option<ViewMode> {
        self.persistence.load_view_mode()
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }
}
