use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom;
use crate::observer::Watcher;

const TARGET_SELECTOR: &str = "[data-animation]";
const DEFAULT_ANIMATION: &str = "fadeIn";

/// Scroll-triggered entrance animations. Elements carrying `data-animation`
/// start transparent and get their animation class the first time they cross
/// into view.
pub struct ScrollAnimations {
    _watcher: Watcher,
}

pub fn mount(
    document: &Document,
    threshold: f64,
    root_margin: &str,
) -> Result<ScrollAnimations, JsValue> {
    let watcher = Watcher::with_options(threshold, Some(root_margin), |target, _observer| {
        reveal(&target);
    })?;
    for element in dom::query_all(document, TARGET_SELECTOR) {
        // hidden until the watcher fires; the animation class fades it back in
        if let Some(style) = dom::inline_style(&element) {
            let _ = style.set_property("opacity", "0");
        }
        watcher.observe(&element);
    }
    Ok(ScrollAnimations { _watcher: watcher })
}

/// Applies the element's declared entrance animation right now. Works for any
/// element type, SVG included.
pub fn reveal(target: &Element) {
    let declared = target.get_attribute("data-animation");
    let _ = target
        .class_list()
        .add_2("animate", &animation_class(declared));
}

fn animation_class(declared: Option<String>) -> String {
    match declared {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_ANIMATION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::animation_class;

    #[test]
    fn falls_back_to_fade_in() {
        assert_eq!(animation_class(None), "fadeIn");
        assert_eq!(animation_class(Some(String::new())), "fadeIn");
    }

    #[test]
    fn keeps_declared_animation() {
        assert_eq!(animation_class(Some("slideUp".to_string())), "slideUp");
    }
}
