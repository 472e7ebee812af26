//! JsEditor - the mounted editor handle exposed to JavaScript.

use wasm_bindgen::prelude::*;

use modot_browser::{App, MountOptions, ViewMode};

/// A mounted editor shell.
#[wasm_bindgen]
pub struct JsEditor {
    app: App,
}

/// Mount the editor on the current page.
///
/// `options` may be omitted; otherwise `{ config?, ids? }` overrides the
/// storage namespace/keys, minimum pane width and element ids.
#[wasm_bindgen]
pub fn mount(options: JsValue) -> Result<JsEditor, JsError> {
    let options = MountOptions::from_js(options).map_err(|e| JsError::new(&e.to_string()))?;
    let app = App::mount(options).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(JsEditor { app })
}

#[wasm_bindgen]
impl JsEditor {
    /// Detach every listener registered by `mount`.
    pub fn dispose(&mut self) {
        self.app.dispose();
    }

    #[wasm_bindgen(getter, js_name = isDisposed)]
    pub fn is_disposed(&self) -> bool {
        self.app.is_disposed()
    }

    /// Current view mode: `"edit"`, `"preview"` or `"side-by-side"`.
    ///
    /// `undefined` when called from inside one of the editor's own handlers.
    #[wasm_bindgen(js_name = viewMode)]
    pub fn view_mode(&self) -> Option<String> {
        self.app.view_mode().map(|mode| mode.as_str().to_owned())
    }

    /// Switch view mode by name.
    #[wasm_bindgen(js_name = setViewMode)]
    pub fn set_view_mode(&self, mode: &str) -> Result<(), JsError> {
        let mode: ViewMode = mode.parse().map_err(|e| JsError::new(&format!("{}", e)))?;
        self.app.update(|c| c.set_view_mode(mode));
        Ok(())
    }

    /// Same as clicking the toggle button.
    #[wasm_bindgen(js_name = toggleView)]
    pub fn toggle_view(&self) {
        self.app.update(|c| c.toggle_view());
    }

    /// Fraction of the width given to the edit pane.
    #[wasm_bindgen(js_name = splitRatio)]
    pub fn split_ratio(&self) -> Option<f64> {
        self.app.ratio().map(|ratio| ratio.get())
    }

    /// Export the current document, as the download button does.
    pub fn download(&self) {
        self.app.update(|c| c.download());
    }
}
