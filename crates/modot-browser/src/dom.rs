//! DOM implementation of the editor view.
//!
//! Looks every element up once at mount time by id and keeps the handles.
//! Mutations are best-effort: a failed style or class update is ignored.

use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use modot_core::{
    ContainerMetrics, MODE_CLASSES, ModePresentation, PaneWidths, PlatformError, View,
};

/// Class on the side-by-side button while that mode is active.
pub const ACTIVE_CLASS: &str = "active";
/// Class on `<body>` during a divider drag.
pub const DRAGGING_CLASS: &str = "dragging";
/// Class on the wrapper once setup has finished.
pub const INITIALIZED_CLASS: &str = "initialized";

/// Element ids the editor mounts on.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub edit_pane: String,
    pub preview_pane: String,
    pub divider: String,
    pub wrapper: String,
    pub toggle_button: String,
    pub side_by_side_button: String,
    pub filename_input: String,
    pub download_button: String,
    /// Host element the code editor is created in.
    pub editor: String,
    /// Element whose HTML is replaced with the rendered preview.
    pub output: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            edit_pane: "edit".to_owned(),
            preview_pane: "preview".to_owned(),
            divider: "split-divider".to_owned(),
            wrapper: "editor-wrapper".to_owned(),
            toggle_button: "btn-toggle-view".to_owned(),
            side_by_side_button: "btn-side-by-side".to_owned(),
            filename_input: "filename-input".to_owned(),
            download_button: "btn-download".to_owned(),
            editor: "editor".to_owned(),
            output: "output".to_owned(),
        }
    }
}

/// Get the page document.
pub fn document() -> Result<Document, PlatformError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PlatformError::from("no document"))
}

/// Look up an element by id and cast it to `T`.
pub fn element_by_id<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, PlatformError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PlatformError::MissingElement(id.to_owned()))?
        .dyn_into::<T>()
        .map_err(|_| PlatformError::WrongElementType {
            id: id.to_owned(),
            expected,
        })
}

/// Elements event handlers attach to.
///
/// Cloned out of the view before it moves into the controller; element
/// handles are cheap JS references.
#[derive(Clone, Debug)]
pub struct EventTargets {
    pub divider: HtmlElement,
    pub toggle_button: HtmlElement,
    pub side_by_side_button: HtmlElement,
    pub download_button: HtmlElement,
}

pub struct DomView {
    body: Option<HtmlElement>,
    wrapper: HtmlElement,
    edit_pane: HtmlElement,
    preview_pane: HtmlElement,
    divider: HtmlElement,
    output: Element,
    toggle_button: HtmlElement,
    side_by_side_button: HtmlElement,
    download_button: HtmlElement,
    filename_input: HtmlInputElement,
}

impl DomView {
    /// Resolve every element. Fails on the first missing or mistyped id.
    pub fn new(document: &Document, ids: &ElementIds) -> Result<Self, PlatformError> {
        Ok(Self {
            body: document.body(),
            wrapper: element_by_id(document, &ids.wrapper, "HTMLElement")?,
            edit_pane: element_by_id(document, &ids.edit_pane, "HTMLElement")?,
            preview_pane: element_by_id(document, &ids.preview_pane, "HTMLElement")?,
            divider: element_by_id(document, &ids.divider, "HTMLElement")?,
            output: element_by_id(document, &ids.output, "Element")?,
            toggle_button: element_by_id(document, &ids.toggle_button, "HTMLElement")?,
            side_by_side_button: element_by_id(
                document,
                &ids.side_by_side_button,
                "HTMLElement",
            )?,
            download_button: element_by_id(document, &ids.download_button, "HTMLElement")?,
            filename_input: element_by_id(document, &ids.filename_input, "HTMLInputElement")?,
        })
    }

    pub fn event_targets(&self) -> EventTargets {
        EventTargets {
            divider: self.divider.clone(),
            toggle_button: self.toggle_button.clone(),
            side_by_side_button: self.side_by_side_button.clone(),
            download_button: self.download_button.clone(),
        }
    }
}

fn set_width_px(element: &HtmlElement, width: f64) {
    let _ = element
        .style()
        .set_property("width", &format!("{}px", width));
}

impl View for DomView {
    fn container_metrics(&self) -> ContainerMetrics {
        let rect = self.wrapper.get_bounding_client_rect();
        ContainerMetrics {
            left: rect.left(),
            width: rect.width(),
            divider_width: self.divider.get_bounding_client_rect().width(),
        }
    }

    fn set_pane_widths(&self, widths: PaneWidths) {
        set_width_px(&self.edit_pane, widths.edit);
        set_width_px(&self.preview_pane, widths.preview);
    }

    fn apply_mode(&self, presentation: ModePresentation) {
        let wrapper_classes = self.wrapper.class_list();
        for class in MODE_CLASSES {
            let _ = wrapper_classes.remove_1(class);
        }
        let button_classes = self.side_by_side_button.class_list();
        let _ = button_classes.remove_1(ACTIVE_CLASS);

        if let Some(class) = presentation.wrapper_class {
            let _ = wrapper_classes.add_1(class);
        }
        self.toggle_button
            .set_text_content(Some(presentation.toggle_label));
        if presentation.side_by_side_active {
            let _ = button_classes.add_1(ACTIVE_CLASS);
        }
    }

    fn set_dragging(&self, dragging: bool) {
        let Some(body) = &self.body else {
            return;
        };
        let classes = body.class_list();
        let _ = if dragging {
            classes.add_1(DRAGGING_CLASS)
        } else {
            classes.remove_1(DRAGGING_CLASS)
        };
    }

    fn set_preview_html(&self, html: &str) {
        self.output.set_inner_html(html);
    }

    fn filename_input(&self) -> String {
        self.filename_input.value()
    }

    fn mark_initialized(&self) {
        let _ = self.wrapper.class_list().add_1(INITIALIZED_CLASS);
    }
}
