use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlImageElement};

use crate::dom;
use crate::observer::Watcher;

const LAZY_SELECTOR: &str = ".lazy";

/// Deferred image loading. Images marked `.lazy` keep their real source in
/// `data-src` until they scroll into view; each image is loaded at most once
/// because it stops being observed the moment its source is assigned.
pub struct LazyImages {
    _watcher: Watcher,
    _error_listeners: Rc<RefCell<Vec<EventListener>>>,
}

pub fn mount(document: &Document, placeholder: String) -> Result<LazyImages, JsValue> {
    let error_listeners: Rc<RefCell<Vec<EventListener>>> = Rc::new(RefCell::new(Vec::new()));
    let listeners = Rc::clone(&error_listeners);
    let watcher = Watcher::new(move |target, observer| {
        let Some(image) = target.dyn_ref::<HtmlImageElement>() else {
            return;
        };
        if let Some(listener) = load_now(image, &placeholder) {
            listeners.borrow_mut().push(listener);
            observer.unobserve(&target);
        }
    })?;
    for element in dom::query_all(document, LAZY_SELECTOR) {
        watcher.observe(&element);
    }
    Ok(LazyImages {
        _watcher: watcher,
        _error_listeners: error_listeners,
    })
}

/// Assigns the image's deferred source and drops its `.lazy` marker.
///
/// Returns the one-shot failure listener, which swaps in the placeholder the
/// first time the load errors; keep it alive until teardown. `None` when the
/// image carries no `data-src`.
pub fn load_now(image: &HtmlImageElement, placeholder: &str) -> Option<EventListener> {
    let src = image.get_attribute("data-src")?;
    image.set_src(&src);
    let fallback = placeholder.to_string();
    let failed = image.clone();
    let listener = EventListener::once(image, "error", move |_event| {
        warn!("Failed to load image: {src}");
        failed.set_src(&fallback);
    });
    let _ = image.class_list().remove_1("lazy");
    Some(listener)
}
