use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Owned wrapper around an `IntersectionObserver`.
///
/// The callback closure lives as long as the watcher; dropping the watcher
/// disconnects the observer so a torn-down component cannot fire again.
/// `on_enter` runs once per entry that crossed into view and gets the
/// observer back so it can stop watching an element it is done with.
pub(crate) struct Watcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>,
}

impl Watcher {
    pub(crate) fn new<F>(on_enter: F) -> Result<Self, JsValue>
    where
        F: FnMut(Element, &IntersectionObserver) + 'static,
    {
        Self::with_init(IntersectionObserverInit::new(), on_enter)
    }

    pub(crate) fn with_options<F>(
        threshold: f64,
        root_margin: Option<&str>,
        on_enter: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(Element, &IntersectionObserver) + 'static,
    {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        Self::with_init(init, on_enter)
    }

    fn with_init<F>(init: IntersectionObserverInit, mut on_enter: F) -> Result<Self, JsValue>
    where
        F: FnMut(Element, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(
            move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
                for entry in entries {
                    if entry.is_intersecting() {
                        on_enter(entry.target(), &observer);
                    }
                }
            },
        )
            as Box<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Watcher {
            observer,
            _callback: callback,
        })
    }

    pub(crate) fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for Watcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
