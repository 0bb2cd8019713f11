use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom;
use crate::observer::Watcher;

const EVENT_SELECTOR: &str = ".timeline-event";

/// Reveals timeline entries as they scroll into view. The entries start
/// translated and transparent in the stylesheet; crossing the threshold
/// clears both.
pub struct Timeline {
    _watcher: Watcher,
}

pub fn mount(document: &Document, threshold: f64) -> Result<Timeline, JsValue> {
    let watcher = Watcher::with_options(threshold, None, |target, _observer| {
        reveal(&target);
    })?;
    for element in dom::query_all(document, EVENT_SELECTOR) {
        watcher.observe(&element);
    }
    Ok(Timeline { _watcher: watcher })
}

/// Slides the entry into its resting place.
pub fn reveal(target: &Element) {
    let Some(style) = dom::inline_style(target) else {
        return;
    };
    let _ = style.set_property("opacity", "1");
    let _ = style.set_property("transform", "translateY(0)");
}
