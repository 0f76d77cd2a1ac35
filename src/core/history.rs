//! Command history persistence.
//!
//! The history is a JSON string array under a fixed localStorage key,
//! read once at startup and overwritten wholesale after every accepted
//! submission. Anything that fails to decode as an array of strings is
//! treated as empty history, never as a fatal error.

use crate::config::HISTORY_STORAGE_KEY;
use crate::utils::dom;

/// Decode a stored history blob; corrupt or non-array data becomes empty.
pub fn decode(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Encode history for storage.
pub fn encode(history: &[String]) -> String {
    serde_json::to_string(history).unwrap_or_else(|_| "[]".to_string())
}

/// Load history from localStorage, if any.
pub fn load() -> Vec<String> {
    dom::local_storage()
        .and_then(|storage| storage.get_item(HISTORY_STORAGE_KEY).ok().flatten())
        .map(|raw| decode(&raw))
        .unwrap_or_default()
}

/// Persist the full history, replacing the previous value.
pub fn save(history: &[String]) {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.set_item(HISTORY_STORAGE_KEY, &encode(history));
    }
}
