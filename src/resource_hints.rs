use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlLinkElement};

use crate::config::ResourceHint;

/// Appends one `<link>` per hint to `<head>`, warming up connections to the
/// origins the page is about to fetch from. Skipped silently on a document
/// without a head.
pub fn inject(document: &Document, hints: &[ResourceHint]) -> Result<(), JsValue> {
    let Some(head) = document.head() else {
        return Ok(());
    };
    for (rel, href, as_type) in hints {
        let link: HtmlLinkElement = document.create_element("link")?.unchecked_into();
        link.set_rel(rel);
        link.set_href(href);
        if let Some(kind) = as_type {
            link.set_attribute("as", kind)?;
        }
        head.append_child(&link)?;
    }
    Ok(())
}
