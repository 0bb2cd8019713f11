use gloo_events::EventListener;
use web_sys::{Document, Element};

use crate::dom;

const TOGGLE_SELECTOR: &str = ".nav-toggle";
const LINKS_SELECTOR: &str = ".nav-links";
const OPEN_CLASS: &str = "active";

/// Mobile nav burger: clicking the toggle opens and closes the link list.
pub struct NavMenu {
    _click: EventListener,
}

/// `None` unless both the toggle and the link list exist.
pub fn mount(document: &Document) -> Option<NavMenu> {
    let toggle = dom::query::<Element>(document, TOGGLE_SELECTOR)?;
    let links = dom::query::<Element>(document, LINKS_SELECTOR)?;
    let click = EventListener::new(&toggle, "click", move |_event| {
        let _ = links.class_list().toggle(OPEN_CLASS);
    });
    Some(NavMenu { _click: click })
}
