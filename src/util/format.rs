//! Posted-date display helpers.
//!
//! In the browser, formatting defers to the user's locale via the JS
//! `Date` API; outside it (SSR, tests) the ISO calendar date is shown.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Extract the calendar-date portion of an ISO 8601 timestamp.
pub fn date_part(iso: &str) -> &str {
    iso.split_once('T').map_or(iso, |(date, _)| date)
}

/// Format a posting timestamp for display.
pub fn format_posted_date(iso: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        if date.get_time().is_nan() {
            // Unparseable timestamps fall back to the raw date part.
            return date_part(iso).to_owned();
        }
        date.to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        date_part(iso).to_owned()
    }
}
