use std::rc::Rc;

use gloo_events::EventListener;
use log::{error, info};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

use super::record::ConsentRecord;
use super::store::CookieStore;
use super::third_party;
use crate::config::SiteConfig;
use crate::dom;

const BANNER_ID: &str = "cookieBanner";
const MODAL_ID: &str = "cookieModal";
const ACCEPT_ID: &str = "acceptCookies";
const REJECT_ID: &str = "rejectCookies";
const MANAGE_ID: &str = "manageCookies";
const SAVE_ID: &str = "savePreferences";
const ANALYTICS_CHECKBOX_ID: &str = "analyticsCookies";

const BANNER_OPEN_CLASS: &str = "active";

/// The cookie-consent flow: replays a saved decision, or shows the banner and
/// wires its buttons. Dropping the handle detaches every listener.
pub struct ConsentFlow {
    _listeners: Vec<EventListener>,
}

/// What the visitor can see and click, resolved once at mount. Any piece of
/// the markup may be absent; whatever is present still works.
struct ConsentUi {
    window: Window,
    document: Document,
    store: CookieStore,
    cookie_name: String,
    ttl_days: f64,
    measurement_id: String,
    banner: Option<Element>,
    modal: Option<HtmlElement>,
    analytics_checkbox: Option<HtmlInputElement>,
}

impl ConsentUi {
    /// Persists the decision, hides the banner and modal, and activates the
    /// gated integrations when analytics was granted.
    fn decide(&self, analytics: bool) -> Result<(), JsValue> {
        let record = ConsentRecord::with_analytics(analytics);
        self.store
            .set(&self.cookie_name, &record.to_json(), self.ttl_days)?;
        self.hide();
        third_party::activate(&self.window, &self.document, &record, &self.measurement_id)
    }

    fn decide_logged(&self, analytics: bool) {
        if let Err(err) = self.decide(analytics) {
            error!("Failed to save cookie preference: {err:?}");
        }
    }

    fn show_banner(&self) -> Result<(), JsValue> {
        if let Some(banner) = &self.banner {
            banner.class_list().add_1(BANNER_OPEN_CLASS)?;
            info!("Showing consent banner");
        }
        Ok(())
    }

    fn hide(&self) {
        if let Some(banner) = &self.banner {
            let _ = banner.class_list().remove_1(BANNER_OPEN_CLASS);
        }
        if let Some(modal) = &self.modal {
            let _ = modal.style().set_property("display", "none");
        }
    }

    fn open_modal(&self) {
        if let Some(modal) = &self.modal {
            let _ = modal.style().set_property("display", "flex");
        }
    }

    fn checkbox_state(&self) -> Option<bool> {
        self.analytics_checkbox.as_ref().map(|cb| cb.checked())
    }
}

pub fn mount(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<ConsentFlow, JsValue> {
    let ui = Rc::new(ConsentUi {
        window: window.clone(),
        document: document.clone(),
        store: CookieStore::new(document)?,
        cookie_name: config.cookie_name.clone(),
        ttl_days: config.consent_ttl_days,
        measurement_id: config.ga_measurement_id.clone(),
        banner: document.get_element_by_id(BANNER_ID),
        modal: dom::element_by_id::<HtmlElement>(document, MODAL_ID),
        analytics_checkbox: dom::element_by_id::<HtmlInputElement>(document, ANALYTICS_CHECKBOX_ID),
    });

    // listeners go on first; whatever the stored record holds, the visitor
    // keeps a working way to choose
    let mut listeners = Vec::new();

    if let Some(button) = document.get_element_by_id(ACCEPT_ID) {
        let ui = Rc::clone(&ui);
        listeners.push(EventListener::new(&button, "click", move |_event| {
            ui.decide_logged(true);
        }));
    }
    if let Some(button) = document.get_element_by_id(REJECT_ID) {
        let ui = Rc::clone(&ui);
        listeners.push(EventListener::new(&button, "click", move |_event| {
            ui.decide_logged(false);
        }));
    }
    if let Some(button) = document.get_element_by_id(MANAGE_ID) {
        let ui = Rc::clone(&ui);
        listeners.push(EventListener::new(&button, "click", move |_event| {
            ui.open_modal();
        }));
    }
    if let Some(button) = document.get_element_by_id(SAVE_ID) {
        let ui = Rc::clone(&ui);
        listeners.push(EventListener::new(&button, "click", move |_event| {
            // without the checkbox there is nothing to save
            if let Some(analytics) = ui.checkbox_state() {
                ui.decide_logged(analytics);
            }
        }));
    }
    if let Some(modal) = ui.modal.clone() {
        // clicks that land on the backdrop itself close the modal
        let backdrop: JsValue = modal.clone().into();
        listeners.push(EventListener::new(window, "click", move |event| {
            let on_backdrop = event
                .target()
                .map(JsValue::from)
                .map_or(false, |target| target == backdrop);
            if on_backdrop {
                let _ = modal.style().set_property("display", "none");
            }
        }));
    }

    match ui.store.get(&ui.cookie_name) {
        // returning visitor: replay the saved decision without any UI
        Some(saved) => match ConsentRecord::from_json(&saved) {
            Ok(record) => {
                if let Err(err) =
                    third_party::activate(&ui.window, &ui.document, &record, &ui.measurement_id)
                {
                    error!("Failed to activate third-party integrations: {err:?}");
                }
            }
            Err(err) => {
                // out-of-contract cookie: back to undecided, the next choice
                // overwrites it
                error!("Invalid consent cookie, treating as undecided: {err}");
                ui.show_banner()?;
            }
        },
        None => ui.show_banner()?,
    }

    Ok(ConsentFlow {
        _listeners: listeners,
    })
}
