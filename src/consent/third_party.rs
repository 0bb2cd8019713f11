use js_sys::{Array, Date, Reflect};
use log::info;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlIFrameElement, Window};

use super::record::ConsentRecord;
use crate::dom;

const DATA_LAYER: &str = "dataLayer";
const DEMO_IFRAME_SELECTOR: &str = ".demo-iframe";

/// Turns on the consent-gated integrations: the analytics tag queue and the
/// demo iframe. Does nothing unless the record grants analytics.
pub fn activate(
    window: &Window,
    document: &Document,
    record: &ConsentRecord,
    measurement_id: &str,
) -> Result<(), JsValue> {
    if !record.analytics {
        return Ok(());
    }
    info!("Analytics consent granted, activating third-party integrations");
    push_analytics_tags(window, measurement_id)?;
    unblock_demo_iframe(document);
    Ok(())
}

/// Queues the `js` and `config` tags on `window.dataLayer`, creating the
/// queue if the analytics snippet has not set one up yet.
fn push_analytics_tags(window: &Window, measurement_id: &str) -> Result<(), JsValue> {
    let key = JsValue::from_str(DATA_LAYER);
    let current = Reflect::get(window.as_ref(), &key)?;
    let queue: Array = if current.is_undefined() || current.is_null() {
        let fresh = Array::new();
        Reflect::set(window.as_ref(), &key, &fresh)?;
        fresh
    } else {
        current.unchecked_into()
    };
    queue.push(&Array::of2(&JsValue::from_str("js"), &Date::new_0()));
    queue.push(&Array::of2(
        &JsValue::from_str("config"),
        &JsValue::from_str(measurement_id),
    ));
    Ok(())
}

/// The demo iframe ships without a `src` so it cannot phone home before
/// consent; this moves its `data-src` over, starting the load.
fn unblock_demo_iframe(document: &Document) {
    let Some(iframe) = dom::query::<HtmlIFrameElement>(document, DEMO_IFRAME_SELECTOR) else {
        return;
    };
    let Some(src) = iframe.get_attribute("data-src") else {
        return;
    };
    iframe.set_src(&src);
}
