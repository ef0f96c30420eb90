//! Page-level loading indicator.
//!
//! The indicator lives outside the Yew tree: it is injected as the first child
//! of `<body>` so it overlays the whole page, and it is looked up by id so
//! there is never more than one.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement};

pub const LOADER_ID: &str = "news-loader";

/// Id of the form's submit control, toggled together with the indicator.
pub const SUBMIT_ID: &str = "news-submit";

const LOADER_HTML: &str = r#"<div id="news-loader" class="progress" style="position:fixed;top:0;left:0;width:100%;margin:0;z-index:10000;"><div class="indeterminate"></div></div>"#;

/// Disables the submit control and inserts the indicator at the very start of
/// the body. Calling it while an indicator is already shown only disables the
/// control again.
pub fn show_loader() {
    let Some(document) = document() else {
        return;
    };
    set_submit_disabled(&document, true);

    if document.get_element_by_id(LOADER_ID).is_some() {
        return;
    }
    if let Some(body) = document.body() {
        body.insert_adjacent_html("afterbegin", LOADER_HTML).ok();
    }
}

/// Re-enables the submit control and removes the indicator if present.
pub fn hide_loader() {
    let Some(document) = document() else {
        return;
    };
    set_submit_disabled(&document, false);

    if let Some(loader) = document.get_element_by_id(LOADER_ID) {
        loader.remove();
    }
}

fn set_submit_disabled(document: &Document, disabled: bool) {
    if let Some(button) = document
        .get_element_by_id(SUBMIT_ID)
        .and_then(|e| e.dyn_into::<HtmlButtonElement>().ok())
    {
        button.set_disabled(disabled);
    }
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}
