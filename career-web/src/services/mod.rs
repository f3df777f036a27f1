//! Browser services: navigation and the animation frame loop

pub mod frame;
pub mod navigation;

use wasm_bindgen::{JsCast, JsValue};

/// Human-readable text for a thrown JS value.
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
