//! Page lifecycle and focus glue

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, EventTarget, HtmlElement, MutationObserver,
    MutationObserverInit, Window,
};
use webterm_core::viewport::REVEAL_TARGET_ID;

use crate::HISTORY_ID;

const HIDDEN_TAB_ID: &str = "hidden-tab";

/// Run `f` once the page has loaded, immediately if it already has
pub fn on_load<F>(window: &Window, f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let ready_state = window
        .document()
        .map(|document| document.ready_state())
        .unwrap_or_default();
    run_when_loaded(window, &ready_state, f)
}

/// Run `f` now when `ready_state` is `complete`, otherwise on the first
/// `load` event dispatched to `target`
pub fn run_when_loaded<F>(target: &EventTarget, ready_state: &str, f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    if ready_state == "complete" {
        f();
        return Ok(());
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(f);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        "load",
        callback.unchecked_ref(),
        &options,
    )
}

/// Move keyboard focus to the input line
pub fn focus_input(document: &Document) {
    let Some(input) = document
        .get_element_by_id(REVEAL_TARGET_ID)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        log::warn!("No #{} element to focus", REVEAL_TARGET_ID);
        return;
    };
    if let Err(e) = input.focus() {
        log::warn!("Failed to focus #{}: {:?}", REVEAL_TARGET_ID, e);
    }
}

/// Clicking anywhere or tabbing onto `#hidden-tab` focuses the input line
pub fn install_focus_handlers(document: &Document) -> Result<(), JsValue> {
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let click_document = document.clone();
    let on_click = Closure::<dyn FnMut()>::new(move || focus_input(&click_document));
    body.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    if let Some(hidden_tab) = document.get_element_by_id(HIDDEN_TAB_ID) {
        let focus_document = document.clone();
        let on_focus = Closure::<dyn FnMut()>::new(move || focus_input(&focus_document));
        hidden_tab.add_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref())?;
        on_focus.forget();
    }

    Ok(())
}

/// Scroll the window to the bottom whenever `#history` changes
pub fn install_autoscroll(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(history) = document.get_element_by_id(HISTORY_ID) else {
        log::warn!("No #{} element, auto-scroll disabled", HISTORY_ID);
        return Ok(());
    };

    let scroll_window = window.clone();
    let scroll_document = document.clone();
    let callback = Closure::<dyn FnMut()>::new(move || {
        let height = scroll_document
            .body()
            .map_or(0, |body| body.scroll_height());
        scroll_window.scroll_to_with_x_and_y(0.0, f64::from(height));
    });

    let init = MutationObserverInit::new();
    init.set_attributes(true);
    init.set_child_list(true);
    init.set_character_data(true);
    init.set_subtree(true);

    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
    observer.observe_with_options(&history, &init)?;
    callback.forget();
    Ok(())
}
