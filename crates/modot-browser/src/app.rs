//! Mounting the editor shell on a page.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use modot_core::{Controller, ModotConfig, PlatformError, SplitRatio, ViewMode};

use crate::dom::{self, DomView, ElementIds};
use crate::download::BrowserDownloader;
use crate::events::{self, BrowserController, Listeners, SharedController};
use crate::monaco::MonacoWidget;
use crate::storage::LocalStore;

/// Everything a host can pass to `mount`. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MountOptions {
    pub config: ModotConfig,
    pub ids: ElementIds,
}

impl MountOptions {
    /// Read options from a JS value; `undefined` and `null` mean defaults.
    pub fn from_js(value: JsValue) -> Result<Self, PlatformError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| PlatformError::InvalidOptions(e.to_string()))
    }
}

/// A mounted editor. Listeners stay attached until [`App::dispose`] or drop.
pub struct App {
    controller: SharedController,
    listeners: Option<Listeners>,
}

impl App {
    /// Look up the page elements, create the editor, run the startup sequence
    /// and attach listeners.
    pub fn mount(options: MountOptions) -> Result<Self, PlatformError> {
        let document = dom::document()?;
        let view = DomView::new(&document, &options.ids)?;
        let targets = view.event_targets();
        let host: HtmlElement = dom::element_by_id(&document, &options.ids.editor, "HTMLElement")?;
        let editor = MonacoWidget::create(&host)?;

        let controller = Controller::new(
            &options.config,
            LocalStore::new(),
            view,
            editor,
            BrowserDownloader::new(),
        );
        let controller = Rc::new(RefCell::new(controller));
        controller.borrow_mut().start();

        let listeners = events::attach(&controller, &targets);
        tracing::info!(namespace = %options.config.namespace, "editor mounted");

        Ok(Self {
            controller,
            listeners: Some(listeners),
        })
    }

    /// Detach every listener. The page keeps its current state.
    pub fn dispose(&mut self) {
        if self.listeners.take().is_some() {
            tracing::info!("editor disposed");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.listeners.is_none()
    }

    /// Run `f` against the controller. Returns `None`, dropping the call, when
    /// an event handler further up the stack holds the controller.
    pub fn update<R>(&self, f: impl FnOnce(&mut BrowserController) -> R) -> Option<R> {
        events::with_controller(&self.controller, f)
    }

    /// Current view mode, or `None` while the controller is busy.
    pub fn view_mode(&self) -> Option<ViewMode> {
        self.controller.try_borrow().ok().map(|c| c.view_mode())
    }

    /// Current split ratio, or `None` while the controller is busy.
    pub fn ratio(&self) -> Option<SplitRatio> {
        self.controller.try_borrow().ok().map(|c| c.ratio())
    }
}
