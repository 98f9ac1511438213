//! WASM bindings for gdob-core.
//!
//! Exposes the converter to the browser front end as `#[wasm_bindgen]`
//! functions. The page owns everything visual (theme, language, clipboard,
//! file drop); it hands text and a direction to [`convert`] and displays
//! whatever comes back.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p gdob-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/pkg/ \
//!   target/wasm32-unknown-unknown/release/gdob_wasm.wasm
//! ```

use gdob_core::{Direction, JsonStyle, Options, INVALID_FORMAT};
use wasm_bindgen::prelude::*;

/// Convert outline text to JSON.
///
/// Returns pretty-printed JSON (or single-line when `compact` is set), or
/// throws a JS error if the outline cannot be interpreted.
#[wasm_bindgen(js_name = toJson)]
pub fn to_json(text: &str, compact: bool) -> std::result::Result<String, JsValue> {
    gdob_core::to_json_with(text, &options(compact))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a JSON document to outline text.
///
/// Throws a JS error if the input is not valid JSON.
#[wasm_bindgen(js_name = toOutline)]
pub fn to_outline(json: &str) -> std::result::Result<String, JsValue> {
    gdob_core::to_outline(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert in `direction` (`"to-json"` or `"to-outline"`) and never throw.
///
/// Failures come back as the fixed error sentinel for the direction; an
/// unrecognized direction yields the Invalid Format sentinel.
#[wasm_bindgen]
pub fn convert(text: &str, direction: &str, compact: bool) -> String {
    match direction.parse::<Direction>() {
        Ok(direction) => gdob_core::convert(text, direction, &options(compact)),
        Err(_) => INVALID_FORMAT.to_string(),
    }
}

fn options(compact: bool) -> Options {
    Options {
        json_style: if compact {
            JsonStyle::Compact
        } else {
            JsonStyle::Pretty
        },
        ..Options::default()
    }
}
