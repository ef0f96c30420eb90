//! Browser-side helpers for the news search widget.
//!
//! - **User Feedback**: transient "toast" notifications for errors and empty
//!   results.
//! - **Widget activation**: one-time activation of the CSS framework's
//!   declarative widgets (selects, waves) after the first render.

use web_sys::{Document, Element};

/// Id of the fixed container the CSS framework positions toasts in.
const TOAST_CONTAINER_ID: &str = "toast-container";

/// Displays a transient notification styled as a Materialize toast.
///
/// Toasts stack inside `#toast-container`, which is created on first use, and
/// each one removes itself after `duration_ms`. The message is inserted as
/// text, never as markup.
pub fn show_toast(message: &str, duration_ms: u32) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(container) = toast_container(&document) else {
        return;
    };
    let Ok(toast) = document.create_element("div") else {
        return;
    };
    toast.set_class_name("toast news-toast");
    toast.set_text_content(Some(message));

    if container.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration_ms).await;
            toast.remove();
        });
    }
}

fn toast_container(document: &Document) -> Option<Element> {
    if let Some(existing) = document.get_element_by_id(TOAST_CONTAINER_ID) {
        return Some(existing);
    }
    let container = document.create_element("div").ok()?;
    container.set_id(TOAST_CONTAINER_ID);
    document.body()?.append_child(&container).ok()?;
    Some(container)
}

/// Runs Materialize's `M.AutoInit()` when the framework is loaded on the page.
pub fn auto_init_widgets() {
    let func = js_sys::Function::new_no_args(
        "if (window.M && typeof window.M.AutoInit === 'function') { window.M.AutoInit(); }",
    );
    if let Err(err) = func.call0(&wasm_bindgen::JsValue::NULL) {
        gloo_console::error!("widget auto-init failed", err);
    }
}
