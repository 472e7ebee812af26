//! Client-side file download through a transient anchor.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use modot_core::{Downloader, ExportFile, PlatformError};

fn js_error(context: &str, e: JsValue) -> PlatformError {
    PlatformError::Js(format!("{}: {:?}", context, e))
}

/// Downloads exports by clicking a temporary `<a download>` pointing at a
/// blob URL. The URL is revoked as soon as the click has been dispatched.
#[derive(Default)]
pub struct BrowserDownloader;

impl BrowserDownloader {
    pub fn new() -> Self {
        Self
    }
}

impl Downloader for BrowserDownloader {
    fn download(&self, file: &ExportFile) -> Result<(), PlatformError> {
        let document = crate::dom::document()?;
        let body = document
            .body()
            .ok_or_else(|| PlatformError::from("document has no body"))?;

        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(&file.contents));
        let options = BlobPropertyBag::new();
        options.set_type(file.mime);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|e| js_error("blob", e))?;
        let url = Url::create_object_url_with_blob(&blob).map_err(|e| js_error("object url", e))?;

        let clicked = (|| -> Result<(), JsValue> {
            let link: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
            link.set_href(&url);
            link.set_download(&file.filename);
            body.append_child(&link)?;
            link.click();
            body.remove_child(&link)?;
            Ok(())
        })();

        if let Err(e) = Url::revoke_object_url(&url) {
            tracing::debug!("revokeObjectURL failed: {:?}", e);
        }
        clicked.map_err(|e| js_error("anchor", e))?;

        tracing::debug!(filename = %file.filename, bytes = file.contents.len(), "download triggered");
        Ok(())
    }
}
