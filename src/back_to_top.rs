use gloo_events::EventListener;
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

const BUTTON_ID: &str = "backToTop";
const SHOW_CLASS: &str = "show";

/// The floating back-to-top control: shown once the page is scrolled past the
/// offset, and smooth-scrolls to the top when clicked.
pub struct BackToTop {
    _scroll: EventListener,
    _click: EventListener,
}

/// `None` when the page has no back-to-top button.
pub fn mount(window: &Window, document: &Document, offset: f64) -> Option<BackToTop> {
    let button = document.get_element_by_id(BUTTON_ID)?;

    let toggled = button.clone();
    let scroll_window = window.clone();
    // gloo's default listener options are passive, which is what we want here
    let scroll = EventListener::new(window, "scroll", move |_event| {
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        apply(&toggled, scroll_y, offset);
    });

    let click_window = window.clone();
    let click = EventListener::new(&button, "click", move |_event| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        click_window.scroll_to_with_scroll_to_options(&options);
    });

    Some(BackToTop {
        _scroll: scroll,
        _click: click,
    })
}

/// Shows or hides the control for the given scroll position.
pub fn apply(button: &Element, scroll_y: f64, offset: f64) {
    let _ = button
        .class_list()
        .toggle_with_force(SHOW_CLASS, should_show(scroll_y, offset));
}

fn should_show(scroll_y: f64, offset: f64) -> bool {
    scroll_y > offset
}
