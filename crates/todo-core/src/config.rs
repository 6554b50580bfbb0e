//! Widget configuration.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage key the list state is persisted under.
    pub storage_key: String,
    pub heading: String,
    pub placeholder: String,
    pub add_label: String,
    pub delete_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: "todo-state".to_string(),
            heading: "Todo".to_string(),
            placeholder: "Задание".to_string(),
            add_label: "+".to_string(),
            delete_label: "×".to_string(),
        }
    }
}

impl Config {
    /// Read a (possibly partial) JSON object; unknown or bad input gives the defaults.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid widget config, using defaults");
            Self::default()
        })
    }
}
