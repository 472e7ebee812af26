//! WASM bindings for the modot markdown editor.
//!
//! The host page loads Monaco, then calls `mount()` once the DOM is ready:
//!
//! ```js
//! import init, { mount } from "./pkg/modot_js.js";
//! await init();
//! const editor = mount(); // or mount({ config: {...}, ids: {...} })
//! ```

mod editor;

pub use editor::*;

use wasm_bindgen::prelude::*;

/// Install the panic hook and the console tracing subscriber.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let _ = set_global_default(Registry::default().with(wasm_layer));
}

/// Render markdown to sanitized HTML with the preview pipeline.
#[wasm_bindgen(js_name = renderMarkdown)]
pub fn render_markdown(markdown: &str) -> String {
    modot_browser::MarkdownRenderer::new().render(markdown)
}
