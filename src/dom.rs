use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, SvgElement, Window};

pub(crate) fn window() -> Option<Window> {
    web_sys::window()
}

/// Inline style of an element. HTML and SVG elements both carry one; anything
/// else has no inline style to write.
pub(crate) fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    element.dyn_ref::<SvgElement>().map(|svg| svg.style())
}

/// Element with the given id, cast to the requested interface. `None` when
/// the element is missing or of another type.
pub(crate) fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// First element matching the selector, cast to the requested interface.
pub(crate) fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// Every element matching the selector.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut found = Vec::new();
    if let Ok(nodes) = document.query_selector_all(selector) {
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .get(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                found.push(element);
            }
        }
    }
    found
}
