//! Browser-side enhancements for the marketing site, compiled to WebAssembly
//! and wired onto the page's existing markup: scroll-triggered entrance
//! animations, lazy image loading, the cookie-consent flow, and a handful of
//! small interactive controls.
//!
//! The module entry point mounts everything with [`SiteConfig::default`].
//! Embedders that need different ids, thresholds or cookie settings call
//! [`Site::mount`] themselves and hold on to the returned handle; dropping it
//! tears every listener and observer back down.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::{error, info, Level};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub mod animations;
pub mod back_to_top;
pub mod config;
pub mod consent {
    pub mod flow;
    pub mod record;
    pub mod store;
    pub mod third_party;
}
pub mod demo_button;
mod dom;
pub mod lazy_images;
pub mod nav_menu;
mod observer;
pub mod resource_hints;
pub mod timeline;

pub use config::SiteConfig;

/// Live handles for everything wired onto the page.
pub struct Site {
    _animations: Option<animations::ScrollAnimations>,
    _back_to_top: Option<back_to_top::BackToTop>,
    _demo_button: Option<demo_button::DemoButton>,
    _nav: Option<nav_menu::NavMenu>,
    _timeline: Option<timeline::Timeline>,
    _consent: Option<consent::flow::ConsentFlow>,
    late: Rc<RefCell<Option<LatePhase>>>,
    _load_listener: Option<EventListener>,
}

/// The pieces that wait for the `load` event.
struct LatePhase {
    _lazy: lazy_images::LazyImages,
}

impl Site {
    /// Wires every enhancement onto the current page.
    ///
    /// Startup happens in two phases: the interactive pieces immediately, the
    /// bandwidth-sensitive ones once the page load settles. A failure inside
    /// a phase is logged and abandons the rest of that phase only; components
    /// whose markup is missing are skipped without any noise.
    pub fn mount(config: SiteConfig) -> Result<Site, JsValue> {
        let window = dom::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let mut site = Site {
            _animations: None,
            _back_to_top: None,
            _demo_button: None,
            _nav: None,
            _timeline: None,
            _consent: None,
            late: Rc::new(RefCell::new(None)),
            _load_listener: None,
        };

        if let Err(err) = site.init_interactive(&window, &document, &config) {
            error!("Initialization error: {err:?}");
        }
        site.schedule_load_phase(&window, &document, config);

        Ok(site)
    }

    fn init_interactive(
        &mut self,
        window: &Window,
        document: &Document,
        config: &SiteConfig,
    ) -> Result<(), JsValue> {
        self._animations = Some(animations::mount(
            document,
            config.animation_threshold,
            &config.animation_root_margin,
        )?);
        self._back_to_top = back_to_top::mount(window, document, config.back_to_top_offset);
        self._demo_button = demo_button::mount(document);
        self._nav = nav_menu::mount(document);
        self._timeline = Some(timeline::mount(document, config.timeline_threshold)?);
        self._consent = Some(consent::flow::mount(window, document, config)?);
        info!("Interactive enhancements ready");
        Ok(())
    }

    /// Runs the load phase now when the page is already complete, otherwise
    /// defers it to the `load` event.
    fn schedule_load_phase(&mut self, window: &Window, document: &Document, config: SiteConfig) {
        if document.ready_state() == "complete" {
            match init_load_phase(document, &config) {
                Ok(handles) => *self.late.borrow_mut() = Some(handles),
                Err(err) => error!("Load error: {err:?}"),
            }
            return;
        }

        let slot = Rc::clone(&self.late);
        let document = document.clone();
        self._load_listener = Some(EventListener::once(window, "load", move |_event| {
            match init_load_phase(&document, &config) {
                Ok(handles) => *slot.borrow_mut() = Some(handles),
                Err(err) => error!("Load error: {err:?}"),
            }
        }));
    }
}

fn init_load_phase(document: &Document, config: &SiteConfig) -> Result<LatePhase, JsValue> {
    let lazy = lazy_images::mount(document, config.placeholder_image.clone())?;
    resource_hints::inject(document, config.resource_hints)?;
    info!("Load-phase enhancements ready");
    Ok(LatePhase { _lazy: lazy })
}

/// Module entry: mounts the default configuration and keeps the handles
/// alive for the lifetime of the page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting site enhancements");
    match Site::mount(SiteConfig::default()) {
        Ok(site) => std::mem::forget(site),
        Err(err) => error!("Initialization error: {err:?}"),
    }
}
