//! CSV file emission
//!
//! The platform download idiom: build a Blob, mint an object URL, click
//! a transient hidden anchor, revoke the URL. Failures come back as
//! [`Error::Download`] so the bus handler can answer with a typed
//! failure instead of crashing the popup.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::error::{Error, Result};
use crate::export::CsvFile;

pub fn emit(file: &CsvFile) -> Result<()> {
    emit_inner(file).map_err(|err| {
        Error::Download(
            err.as_string()
                .unwrap_or_else(|| format!("{:?}", err)),
        )
    })
}

fn emit_inner(file: &CsvFile) -> std::result::Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&file.content));
    let mut options = BlobPropertyBag::new();
    options.type_("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("anchor cast failed"))?;
    anchor.set_href(&url);
    anchor.set_download(&file.name);
    let _ = anchor.style().set_property("display", "none");

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)?;
    Ok(())
}
