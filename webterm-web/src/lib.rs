//! Browser front end for the web terminal
//!
//! Compiled to WebAssembly and loaded by `static/index.html`. The page
//! provides the DOM skeleton (`#main-container`, `#history`, `#prompt`,
//! `#input`, `#hidden-tab`); this crate fills it from a
//! [`webterm_core::Terminal`] and wires the browser glue:
//! - keeping `#input` in view once it is half visible
//! - focusing `#input` on load and on any click
//! - scrolling to the bottom whenever `#history` changes
//! - persisting settings in LocalStorage

use wasm_bindgen::prelude::*;
use webterm_core::{ObserverOptions, Terminal, TerminalConfig};

pub mod app;
pub mod logger;
pub mod observer;
pub mod page;
pub mod storage;

/// Id of the scrollback container
pub const HISTORY_ID: &str = "history";

/// Entry point, run by wasm-bindgen once the module is instantiated
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    logger::init(log::LevelFilter::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let terminal = Terminal::new(
        TerminalConfig::new(),
        Box::new(storage::LocalStorageStore::new()),
    );
    let app = app::App::mount(document.clone(), terminal)?;
    app.borrow().render();

    page::install_focus_handlers(&document)?;
    page::install_autoscroll(&window, &document)?;

    let load_document = document.clone();
    page::on_load(&window, move || {
        page::focus_input(&load_document);
        if let Err(e) = observer::observe_reveal(&load_document, &ObserverOptions::new()) {
            log::error!("Failed to observe #input: {:?}", e);
        }
    })?;

    log::info!("Web terminal v{} started", webterm_core::VERSION);
    Ok(())
}
