use traceview_core::history;
use traceview_core::layout;
use traceview_core::params::SessionParams;
use traceview_core::rewrite;
use wasm_bindgen::prelude::*;

/// Locators parsed from a navigation query string, as a JSON array of
/// strings in submission order.
#[wasm_bindgen]
pub fn parse_locators(query: &str) -> Result<String, JsError> {
    let params = SessionParams::from_query(query);
    serde_json::to_string(params.locators()).map_err(|e| JsError::new(&e.to_string()))
}

/// Layout decision for a query string, as JSON: a `mode` tag plus either the
/// single locator or the split regions with their percentage shares and
/// sub-session URLs.
#[wasm_bindgen]
pub fn layout_plan(query: &str) -> Result<String, JsError> {
    let params = SessionParams::from_query(query);
    let plan = layout::select(params.locators());
    serde_json::to_string(&plan).map_err(|e| JsError::new(&e.to_string()))
}

/// Request URL for a network locator, after the provider rewrites.
#[wasm_bindgen]
pub fn rewrite_url(raw: &str) -> Result<String, JsError> {
    let url = rewrite::rewrite(raw).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(url.into())
}

/// History directive for selecting a drive-backed asset by id, as JSON.
/// The host executes the directive (full navigation or replaceState).
#[wasm_bindgen]
pub fn change_url(id: &str, refresh_page: bool) -> Result<String, JsError> {
    serde_json::to_string(&history::change_url(id, refresh_page))
        .map_err(|e| JsError::new(&e.to_string()))
}
