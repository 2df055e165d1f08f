//! Browser bindings: local storage, DOM checkbox lookup, and event wiring.

mod dom;
mod runner;

/// Access to local browser storage.
pub mod storage;

mod web_logger;

pub use dom::{DomCheckboxes, checkbox_element};
pub use runner::WebRunner;
pub use storage::LocalStorage;
pub use web_logger::WebLogger;

use wasm_bindgen::JsValue;

pub(crate) fn string_from_js_value(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:#?}"))
}
