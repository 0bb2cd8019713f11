use js_sys::Date;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlDocument};

const DAY_MS: f64 = 86_400_000.0;

/// Cookie-backed storage for small first-party values. Everything written
/// here is scoped to the site root, `SameSite=Strict` and URL-encoded.
pub struct CookieStore {
    document: HtmlDocument,
}

impl CookieStore {
    /// Fails when the document has no cookie jar (not an HTML document).
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        let document = document.clone().dyn_into::<HtmlDocument>()?;
        Ok(CookieStore { document })
    }

    /// Writes the cookie with an expiry `ttl_days` from now. A negative ttl
    /// produces an already-expired cookie, which is how deletion works.
    pub fn set(&self, name: &str, value: &str, ttl_days: f64) -> Result<(), JsValue> {
        let expires: String = Date::new(&JsValue::from_f64(Date::now() + ttl_days * DAY_MS))
            .to_utc_string()
            .into();
        self.document.set_cookie(&format_cookie(name, value, &expires))
    }

    /// Decoded value of the first cookie with this name, `None` when absent.
    pub fn get(&self, name: &str) -> Option<String> {
        let header = self.document.cookie().ok()?;
        lookup(&header, name)
    }

    pub fn delete(&self, name: &str) -> Result<(), JsValue> {
        self.set(name, "", -1.0)
    }
}

fn format_cookie(name: &str, value: &str, expires_utc: &str) -> String {
    format!(
        "{}={}; expires={}; path=/; SameSite=Strict",
        name,
        urlencoding::encode(value),
        expires_utc
    )
}

fn lookup(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|part| {
        // the value is everything after the first '=', even if it holds more
        let (key, value) = part.trim().split_once('=')?;
        (key == name).then(|| {
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
    })
}
