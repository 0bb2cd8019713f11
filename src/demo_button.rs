use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::AnimationFrame;
use web_sys::{Document, HtmlElement};

use crate::dom;

const BUTTON_SELECTOR: &str = ".demo-cta";
const PULSE_ANIMATION: &str = "pulse 1.5s infinite";

/// Hover pulse on the demo call-to-action button.
pub struct DemoButton {
    _enter: EventListener,
    _leave: EventListener,
}

pub fn mount(document: &Document) -> Option<DemoButton> {
    let button = dom::query::<HtmlElement>(document, BUTTON_SELECTOR)?;

    // Slot for a scheduled pulse frame. Nothing fills it today; the enter
    // handler still drains it before animating so a queued frame can never
    // race the CSS animation.
    let pending_frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

    let entered = button.clone();
    let frame = Rc::clone(&pending_frame);
    let enter = EventListener::new(&button, "mouseenter", move |_event| {
        drop(frame.borrow_mut().take());
        let _ = entered.style().set_property("animation", PULSE_ANIMATION);
    });

    let left = button.clone();
    let leave = EventListener::new(&button, "mouseleave", move |_event| {
        let _ = left.style().remove_property("animation");
    });

    Some(DemoButton {
        _enter: enter,
        _leave: leave,
    })
}
