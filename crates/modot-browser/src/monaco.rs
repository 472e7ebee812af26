//! Monaco editor bindings.
//!
//! Expects the Monaco bundle to be loaded and exposed as the `monaco` global
//! before mounting. Language workers are stubbed out, so Monaco never spawns
//! a web worker; markdown needs none.

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use modot_core::{EditorWidget, PlatformError};

// === Monaco binding ===
//
// Only the handful of IStandaloneCodeEditor members the shell uses.

#[wasm_bindgen]
extern "C" {
    /// A Monaco `IStandaloneCodeEditor`.
    #[derive(Clone, Debug)]
    pub type MonacoEditor;

    #[wasm_bindgen(catch, js_namespace = ["monaco", "editor"], js_name = create)]
    fn create_editor(container: &HtmlElement, options: &JsValue) -> Result<MonacoEditor, JsValue>;

    #[wasm_bindgen(method, js_name = getValue)]
    fn get_value(this: &MonacoEditor) -> String;

    #[wasm_bindgen(method, js_name = setValue)]
    fn set_value(this: &MonacoEditor, value: &str);

    #[wasm_bindgen(method)]
    fn layout(this: &MonacoEditor);

    #[wasm_bindgen(method, js_name = onDidChangeModelContent)]
    fn on_did_change_model_content(this: &MonacoEditor, listener: &js_sys::Function) -> Disposable;

    /// Monaco `IDisposable`.
    pub type Disposable;

    #[wasm_bindgen(method)]
    fn dispose(this: &Disposable);
}

// === Options ===

#[derive(Serialize)]
struct Enabled {
    enabled: bool,
}

#[derive(Serialize)]
struct Scrollbar {
    vertical: &'static str,
    horizontal: &'static str,
}

/// Construction options for the editor widget.
///
/// Markdown, wrapped lines, no minimap, folding, hover or suggestions, the
/// light theme, and manual layout.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EditorOptions {
    value: &'static str,
    font_size: u32,
    language: &'static str,
    minimap: Enabled,
    scroll_beyond_last_line: bool,
    automatic_layout: bool,
    scrollbar: Scrollbar,
    word_wrap: &'static str,
    hover: Enabled,
    quick_suggestions: bool,
    suggest_on_trigger_characters: bool,
    folding: bool,
    theme: &'static str,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            value: "",
            font_size: 14,
            language: "markdown",
            minimap: Enabled { enabled: false },
            scroll_beyond_last_line: false,
            automatic_layout: false,
            scrollbar: Scrollbar {
                vertical: "visible",
                horizontal: "visible",
            },
            word_wrap: "on",
            hover: Enabled { enabled: false },
            quick_suggestions: false,
            suggest_on_trigger_characters: false,
            folding: false,
            theme: "vs",
        }
    }
}

/// Point `MonacoEnvironment.getWorker` at an inert stub.
fn install_worker_stub() -> Result<(), JsValue> {
    let get_worker =
        js_sys::Function::new_no_args("return new Proxy({}, { get: () => () => {} });");
    let env = js_sys::Object::new();
    js_sys::Reflect::set(&env, &JsValue::from_str("getWorker"), &get_worker)?;
    js_sys::Reflect::set(&js_sys::global(), &JsValue::from_str("MonacoEnvironment"), &env)?;
    Ok(())
}

/// Monaco-backed editor widget.
pub struct MonacoWidget {
    editor: MonacoEditor,
}

impl MonacoWidget {
    /// Create the editor inside `container`. Failure here is fatal for the page.
    pub fn create(container: &HtmlElement) -> Result<Self, PlatformError> {
        install_worker_stub()
            .map_err(|e| PlatformError::EditorInit(format!("worker stub: {:?}", e)))?;
        let options = serde_wasm_bindgen::to_value(&EditorOptions::default())
            .map_err(|e| PlatformError::EditorInit(e.to_string()))?;
        let editor = create_editor(container, &options)
            .map_err(|e| PlatformError::EditorInit(format!("{:?}", e)))?;
        Ok(Self { editor })
    }

    /// Call `listener` after every content change.
    ///
    /// The listener stays registered until the returned subscription drops.
    pub fn on_change(&self, listener: impl FnMut() + 'static) -> ChangeSubscription {
        let closure = Closure::<dyn FnMut()>::new(listener);
        let disposable = self
            .editor
            .on_did_change_model_content(closure.as_ref().unchecked_ref());
        ChangeSubscription {
            disposable,
            _closure: closure,
        }
    }
}

impl EditorWidget for MonacoWidget {
    fn value(&self) -> String {
        self.editor.get_value()
    }

    fn set_value(&self, text: &str) {
        self.editor.set_value(text);
    }

    fn layout(&self) {
        self.editor.layout();
    }

    fn request_layout(&self) {
        let Some(window) = web_sys::window() else {
            self.layout();
            return;
        };

        // Wait for the pending reflow before Monaco measures its container.
        let editor = self.editor.clone();
        let closure = Closure::once(move || editor.layout());
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            tracing::warn!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }
}

/// A registered change listener. Dropping it unregisters the listener.
pub struct ChangeSubscription {
    disposable: Disposable,
    _closure: Closure<dyn FnMut()>,
}

impl Drop for ChangeSubscription {
    fn drop(&mut self) {
        self.disposable.dispose();
    }
}
