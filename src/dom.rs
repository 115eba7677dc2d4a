//! Browser glue for the two platform-delegated actions: scrolling the demo
//! section into view and saving the guide. Failures here are logged and
//! swallowed; the page has no in-scope error path.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions, Url};

use crate::guide::{GUIDE_CONTENT, GUIDE_FILENAME};

/// DOM id of the interactive demo section, targeted by the hero
/// call-to-action.
pub const DEMO_SECTION_ID: &str = "demo";

/// Smooth-scroll the demo section into view. Touches no state.
pub fn scroll_to_demo() {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(DEMO_SECTION_ID));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("demo section #{DEMO_SECTION_ID} not in the document"),
    }
}

/// Package the guide as a text blob and trigger the browser's save dialog
/// via a temporary anchor element.
pub fn save_guide() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::warn!("no document; cannot save guide");
        return;
    };

    let parts = js_sys::Array::of1(&JsValue::from_str(GUIDE_CONTENT));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain");

    let blob = match web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) {
        Ok(blob) => blob,
        Err(err) => {
            log::warn!("failed to build guide blob: {err:?}");
            return;
        }
    };

    let url = match Url::create_object_url_with_blob(&blob) {
        Ok(url) => url,
        Err(err) => {
            log::warn!("failed to create object URL for guide: {err:?}");
            return;
        }
    };

    if let Err(err) = trigger_save(&document, &url) {
        log::warn!("guide download not triggered: {err:?}");
    }

    // The object URL must be released whether or not the save ran.
    if let Err(err) = Url::revoke_object_url(&url) {
        log::warn!("failed to revoke guide object URL: {err:?}");
    }
}

fn trigger_save(document: &Document, url: &str) -> Result<(), JsValue> {
    let anchor: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
    anchor.set_href(url);
    anchor.set_download(GUIDE_FILENAME);

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    Ok(())
}
