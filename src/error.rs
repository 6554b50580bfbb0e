//! Host Errors

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("mount container is not attached to a document")]
    Detached,
    #[error("no node at path {0:?}")]
    MissingNode(Vec<usize>),
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Dom(describe(&value))
    }
}

/// Best-effort text for a thrown JS value (usually a `DOMException`).
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
