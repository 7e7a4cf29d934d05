//! Preference keys and value encodings.
//!
//! Keys are namespaced per page:
//! - `{namespace}_viewMode`: active layout, stored as its plain name
//! - `{namespace}_columns_{layout}`: JSON array of visible column keys
//!
//! Load helpers never fail. Store errors are logged at `warn`, corrupt
//! values at `debug`, and both are reported to the caller as "absent".
//! Save helpers are best-effort in the same way.

use crate::model::{ColumnKey, LayoutId};
use crate::store::PreferenceStore;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// A persisted value that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// The value is not in the expected format.
    #[error("Corrupt preference {key:?}: {reason}")]
    Corrupt {
        /// Offending key.
        key: String,
        /// Decoder message.
        reason: String,
    },

    /// The value names no known layout.
    #[error("Unknown layout in preferences: {0:?}")]
    UnknownLayout(String),
}

/// Key builder for one persistence namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceKeys {
    namespace: String,
}

impl PreferenceKeys {
    /// Keys under `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// The namespace prefix.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `<namespace>_viewMode`
    pub fn view_mode_key(&self) -> String {
        format!("{}_viewMode", self.namespace)
    }

    /// `<namespace>_columns_<layout>`
    pub fn columns_key(&self, layout: LayoutId) -> String {
        format!("{}_columns_{}", self.namespace, layout.as_str())
    }
}

// ===== Codec =====

/// Stored form of a layout: its plain wire name.
pub fn encode_layout(layout: LayoutId) -> String {
    layout.as_str().to_string()
}

/// Decode a layout stored as a plain name or as a JSON string.
///
/// # Errors
///
/// `Corrupt` for a malformed JSON string, `UnknownLayout` for an unknown name.
pub fn decode_layout(raw: &str) -> Result<LayoutId, PreferenceError> {
    let trimmed = raw.trim();
    let name = if trimmed.starts_with('"') {
        serde_json::from_str::<String>(trimmed).map_err(|e| PreferenceError::Corrupt {
            key: "viewMode".to_string(),
            reason: e.to_string(),
        })?
    } else {
        trimmed.to_string()
    };
    name.parse()
        .map_err(|_| PreferenceError::UnknownLayout(name.clone()))
}

/// Stored form of a visible set: a JSON array of keys.
pub fn encode_columns(keys: &[&ColumnKey]) -> String {
    let names: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
    // A Vec<&str> always serializes.
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a JSON array of column keys. Entries are kept as raw strings;
/// callers filter them against the current schema.
///
/// # Errors
///
/// Returns `Corrupt` when `raw` is not a JSON array of strings.
pub fn decode_columns(key: &str, raw: &str) -> Result<Vec<String>, PreferenceError> {
    serde_json::from_str::<Vec<String>>(raw).map_err(|e| PreferenceError::Corrupt {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

// ===== Best-effort load/save =====

fn read<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key = %key, error = %e, "Failed to read preference, using defaults");
            None
        }
    }
}

/// Persisted active layout, if present and decodable.
pub fn load_layout<S: PreferenceStore + ?Sized>(
    store: &S,
    keys: &PreferenceKeys,
) -> Option<LayoutId> {
    let key = keys.view_mode_key();
    let raw = read(store, &key)?;
    match decode_layout(&raw) {
        Ok(layout) => Some(layout),
        Err(e) => {
            debug!(key = %key, error = %e, "Ignoring persisted layout");
            None
        }
    }
}

/// Persisted visible-column list for a layout, if present and decodable.
pub fn load_columns<S: PreferenceStore + ?Sized>(
    store: &S,
    keys: &PreferenceKeys,
    layout: LayoutId,
) -> Option<Vec<String>> {
    let key = keys.columns_key(layout);
    let raw = read(store, &key)?;
    match decode_columns(&key, &raw) {
        Ok(columns) => Some(columns),
        Err(e) => {
            debug!(key = %key, error = %e, "Ignoring persisted columns");
            None
        }
    }
}

/// Persist the active layout. Failures are logged and dropped.
pub fn save_layout<S: PreferenceStore + ?Sized>(
    store: &mut S,
    keys: &PreferenceKeys,
    layout: LayoutId,
) {
    let key = keys.view_mode_key();
    match store.set(&key, &encode_layout(layout)) {
        Ok(()) => trace!(key = %key, layout = %layout, "Saved layout"),
        Err(e) => warn!(key = %key, error = %e, "Failed to save layout preference"),
    }
}

/// Persist a layout's visible keys. Failures are logged and dropped.
pub fn save_columns<S: PreferenceStore + ?Sized>(
    store: &mut S,
    keys: &PreferenceKeys,
    layout: LayoutId,
    visible: &[&ColumnKey],
) {
    let key = keys.columns_key(layout);
    match store.set(&key, &encode_columns(visible)) {
        Ok(()) => trace!(key = %key, count = visible.len(), "Saved visible columns"),
        Err(e) => warn!(key = %key, error = %e, "Failed to save column preference"),
    }
}

/// Forget a layout's visible keys. Failures are logged and dropped.
pub fn clear_columns<S: PreferenceStore + ?Sized>(
    store: &mut S,
    keys: &PreferenceKeys,
    layout: LayoutId,
) {
    let key = keys.columns_key(layout);
    if let Err(e) = store.remove(&key) {
        warn!(key = %key, error = %e, "Failed to clear column preference");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StoreError;
    use crate::store::MemoryStore;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }
        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }
    }

    #[test]
    fn keys_are_namespaced() {
        let keys = PreferenceKeys::new("inventory");
        assert_eq!(keys.view_mode_key(), "inventory_viewMode");
        assert_eq!(keys.columns_key(LayoutId::Table), "inventory_columns_table");
    }

    #[test]
    fn decode_layout_accepts_plain_and_json_names() {
        assert_eq!(decode_layout("cards"), Ok(LayoutId::Cards));
        assert_eq!(decode_layout("\"list\""), Ok(LayoutId::List));
    }

    #[test]
    fn decode_layout_rejects_unknown_name() {
        assert_eq!(
            decode_layout("kanban"),
            Err(PreferenceError::UnknownLayout("kanban".to_string()))
        );
    }

    #[test]
    fn decode_columns_rejects_non_array() {
        assert!(decode_columns("k", "{\"a\":1}").is_err());
        assert!(decode_columns("k", "not json").is_err());
    }

    #[test]
    fn encode_columns_produces_json_array() {
        let name = ColumnKey::new("name").unwrap();
        let sku = ColumnKey::new("sku").unwrap();
        assert_eq!(encode_columns(&[&name, &sku]), "[\"name\",\"sku\"]");
        assert_eq!(encode_columns(&[]), "[]");
    }

    #[test]
    fn load_layout_treats_corrupt_value_as_absent() {
        let mut store = MemoryStore::new();
        let keys = PreferenceKeys::new("ns");
        store.set(&keys.view_mode_key(), "{{garbage").unwrap();
        assert_eq!(load_layout(&store, &keys), None);
    }

    #[test]
    fn load_columns_treats_corrupt_value_as_absent() {
        let mut store = MemoryStore::new();
        let keys = PreferenceKeys::new("ns");
        store
            .set(&keys.columns_key(LayoutId::Grid), "[1, 2")
            .unwrap();
        assert_eq!(load_columns(&store, &keys, LayoutId::Grid), None);
    }

    #[test]
    fn load_helpers_swallow_store_errors() {
        let keys = PreferenceKeys::new("ns");
        assert_eq!(load_layout(&BrokenStore, &keys), None);
        assert_eq!(load_columns(&BrokenStore, &keys, LayoutId::Table), None);
    }

    #[test]
    fn save_helpers_swallow_store_errors() {
        let keys = PreferenceKeys::new("ns");
        let mut store = BrokenStore;
        save_layout(&mut store, &keys, LayoutId::Table);
        save_columns(&mut store, &keys, LayoutId::Table, &[]);
        clear_columns(&mut store, &keys, LayoutId::Table);
    }

    #[test]
    fn save_then_load_round_trip() {
        let mut store = MemoryStore::new();
        let keys = PreferenceKeys::new("ns");
        let name = ColumnKey::new("name").unwrap();
        save_layout(&mut store, &keys, LayoutId::List);
        save_columns(&mut store, &keys, LayoutId::List, &[&name]);
        assert_eq!(load_layout(&store, &keys), Some(LayoutId::List));
        assert_eq!(
            load_columns(&store, &keys, LayoutId::List),
            Some(vec!["name".to_string()])
        );
    }
}
