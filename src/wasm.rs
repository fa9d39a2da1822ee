//! WASM bindings for the frame solver
//!
//! Runs the solver directly in the browser, taking and returning the same
//! JSON documents as the HTTP server.

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Analyze a JSON structure request and return the JSON results
///
/// Errors are returned as `{"error": ..., "kind": ...}` strings.
#[wasm_bindgen]
pub fn analyze_structure(input: &str) -> Result<String, JsValue> {
    crate::analyze_json(input).map_err(|e| {
        let body = serde_json::json!({ "error": e.to_string(), "kind": e.kind() });
        JsValue::from_str(&body.to_string())
    })
}

/// Crate version, for display in the frontend
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
