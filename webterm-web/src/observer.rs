//! Keeps `#input` in view with an `IntersectionObserver`
//!
//! The observer is rooted at the viewport (unless the options name a root
//! element) with a single threshold. Every entry of every notification
//! scrolls its element into view. The observer and its callback live for
//! the rest of the page's lifetime.

use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use webterm_core::viewport::REVEAL_TARGET_ID;
use webterm_core::{ObserverOptions, ObserverRoot, RevealOnVisible, ScrollIntoView, VisibilityEntry};

/// Scrolls elements of a document into view by id
pub struct DomScroller {
    document: Document,
}

impl DomScroller {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ScrollIntoView for DomScroller {
    fn scroll_into_view(&mut self, target: &str) {
        match self.document.get_element_by_id(target) {
            Some(element) => element.scroll_into_view(),
            None => log::warn!("Cannot scroll #{} into view: element is gone", target),
        }
    }
}

fn to_entry(entry: &IntersectionObserverEntry) -> VisibilityEntry {
    VisibilityEntry {
        target: entry.target().id(),
        intersection_ratio: entry.intersection_ratio(),
        is_intersecting: entry.is_intersecting(),
    }
}

/// Start observing `#input`
///
/// Returns `Ok(None)` without creating an observer when the element is
/// missing from the document.
pub fn observe_reveal(
    document: &Document,
    options: &ObserverOptions,
) -> Result<Option<IntersectionObserver>, JsValue> {
    let Some(target) = document.get_element_by_id(REVEAL_TARGET_ID) else {
        log::warn!("No #{} element, not observing", REVEAL_TARGET_ID);
        return Ok(None);
    };

    let mut reveal = RevealOnVisible::new(DomScroller::new(document.clone()));
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let entries: Vec<VisibilityEntry> = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| to_entry(&entry))
                .collect();
            reveal.handle(&entries);
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let ObserverRoot::Element(id) = &options.root {
        match document.get_element_by_id(id) {
            Some(root) => {
                Reflect::set(&init, &JsValue::from_str("root"), &root)?;
            }
            None => log::warn!("Observer root #{} not found, using the viewport", id),
        }
    }

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(&target);
    callback.forget();

    log::info!(
        "Observing #{} (threshold {})",
        REVEAL_TARGET_ID,
        options.threshold
    );
    Ok(Some(observer))
}
