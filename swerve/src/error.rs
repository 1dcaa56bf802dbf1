//! Error - host failures surfaced by the DOM layer
//!
//! Unsupported features and malformed transform arguments never error;
//! they degrade to a no-op or a zero. Only exceptions the browser itself
//! raises end up here.

use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, SwerveError>;

#[derive(Debug, thiserror::Error)]
pub enum SwerveError {
    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("unknown transform function '{name}'")]
    UnknownTransform { name: String },

    #[error("failed to create scratch element: {message}")]
    ScratchElement { message: String },

    #[error("invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("failed to set style '{property}': {message}")]
    Style { property: String, message: String },

    #[error("failed to attach '{event}' listener: {message}")]
    Listener { event: String, message: String },
}

/// Best-effort text for a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
