use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Blob, BlobPropertyBag, File, FileReader, HtmlAnchorElement, ScrollBehavior,
    ScrollIntoViewOptions, Url,
};

#[derive(Error, Debug, Clone)]
pub enum BrowserError {
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("document has no body")]
    NoBody,
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub fn scroll_to_section(id: &str) -> Result<(), BrowserError> {
    let el = document()
        .get_element_by_id(id)
        .ok_or_else(|| BrowserError::MissingElement(id.to_string()))?;
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    Ok(())
}

/// Smooth-scrolls to `id`, logging instead of failing.
pub fn scroll_to(id: &str) {
    if let Err(e) = scroll_to_section(id) {
        log::warn!("couldn't scroll to section: {e}");
    }
}

/// Offers `contents` as a plain-text file download named `file_name`.
///
/// The object URL backing the link is revoked before returning, whether or
/// not the click went through.
pub fn download_text(file_name: &str, contents: &str) -> Result<(), BrowserError> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let props = BlobPropertyBag::new();
    props.set_type("text/plain");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &props)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let clicked = click_download_link(&url, file_name);
    Url::revoke_object_url(&url)?;
    clicked
}

fn click_download_link(href: &str, file_name: &str) -> Result<(), BrowserError> {
    let doc = document();
    let body = doc.body().ok_or(BrowserError::NoBody)?;
    let anchor = doc.create_element("a")?.unchecked_into::<HtmlAnchorElement>();
    anchor.set_href(href);
    anchor.set_download(file_name);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

/// Reads `file` as text and hands the contents to `on_text`.
///
/// Read failures after the read has started are only logged.
pub fn read_file_text<F>(file: &File, on_text: F) -> Result<(), BrowserError>
where
    F: FnOnce(String) + 'static,
{
    let reader = FileReader::new()?;

    let onload = {
        let reader = reader.clone();
        Closure::once_into_js(move || {
            match reader.result().ok().and_then(|v| v.as_string()) {
                Some(text) => on_text(text),
                None => log::error!("File reading error: result was not text"),
            }
        })
    };
    let onerror = Closure::once_into_js(move || log::error!("File reading error"));

    reader.set_onload(Some(onload.unchecked_ref()));
    reader.set_onerror(Some(onerror.unchecked_ref()));
    reader.read_as_text(file)?;
    Ok(())
}
