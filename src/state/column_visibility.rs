//! Per-layout column visibility.
//!
//! A [`ColumnVisibilityToggle`] owns the visible-key set of one layout and
//! writes every change through to the preference store immediately. There
//! is no "unsaved changes" state.
//!
//! # Invariant
//!
//! The visible set only ever contains keys of the current schema. When a
//! persisted or reconciled set filters down to nothing, it falls back to
//! the schema's `default_visible` columns. An explicit user action (hiding
//! the last column, `toggle_all`) may still leave the set empty.

use crate::model::{column_keys, default_visible_keys, ColumnDefinition, ColumnKey, LayoutId};
use crate::store::preferences::{self, PreferenceKeys};
use crate::store::PreferenceStore;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Visible columns for a single layout context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnVisibilityToggle {
    layout: LayoutId,
    visible: BTreeSet<ColumnKey>,
}

impl ColumnVisibilityToggle {
    /// Load the persisted set for `layout`, falling back to defaults.
    pub fn load<S: PreferenceStore + ?Sized>(
        layout: LayoutId,
        keys: &PreferenceKeys,
        columns: &[ColumnDefinition],
        store: &S,
    ) -> Self {
        let visible = match preferences::load_columns(store, keys, layout) {
            Some(persisted) => {
                let filtered = filter_known(persisted.iter().map(String::as_str), columns);
                visible_or_default(filtered, columns)
            }
            None => default_visible_keys(columns),
        };
        trace!(layout = %layout, count = visible.len(), "Loaded visible columns");
        Self { layout, visible }
    }

    /// Toggle with the schema defaults and nothing persisted.
    pub fn with_defaults(layout: LayoutId, columns: &[ColumnDefinition]) -> Self {
        Self {
            layout,
            visible: default_visible_keys(columns),
        }
    }

    /// Layout this toggle belongs to.
    pub fn layout(&self) -> LayoutId {
        self.layout
    }

    /// Visible keys, including ones the schema may no longer have.
    pub fn visible_keys(&self) -> &BTreeSet<ColumnKey> {
        &self.visible
    }

    /// Whether `key` is visible.
    pub fn is_visible(&self, key: &ColumnKey) -> bool {
        self.visible.contains(key)
    }

    /// Number of visible keys.
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Whether every column of `columns` is visible.
    pub fn all_visible(&self, columns: &[ColumnDefinition]) -> bool {
        columns.iter().all(|c| self.visible.contains(c.key()))
    }

    /// Visible columns in schema order.
    pub fn resolve<'a>(&self, columns: &'a [ColumnDefinition]) -> Vec<&'a ColumnDefinition> {
        columns
            .iter()
            .filter(|c| self.visible.contains(c.key()))
            .collect()
    }

    /// Flip one column. Keys outside the schema are ignored.
    pub fn toggle_column<S: PreferenceStore + ?Sized>(
        &mut self,
        key: &ColumnKey,
        columns: &[ColumnDefinition],
        keys: &PreferenceKeys,
        store: &mut S,
    ) {
        if !columns.iter().any(|c| c.key() == key) {
            debug!(layout = %self.layout, key = %key, "Ignoring toggle of unknown column");
            return;
        }
        if !self.visible.remove(key) {
            self.visible.insert(key.clone());
        }
        self.persist(columns, keys, store);
    }

    /// Show every column, or hide every column when all are already shown.
    pub fn toggle_all<S: PreferenceStore + ?Sized>(
        &mut self,
        columns: &[ColumnDefinition],
        keys: &PreferenceKeys,
        store: &mut S,
    ) {
        self.visible = if self.all_visible(columns) {
            BTreeSet::new()
        } else {
            column_keys(columns)
        };
        self.persist(columns, keys, store);
    }

    /// Recompute from `default_visible` and drop the persisted override.
    pub fn reset_to_default<S: PreferenceStore + ?Sized>(
        &mut self,
        columns: &[ColumnDefinition],
        keys: &PreferenceKeys,
        store: &mut S,
    ) {
        self.visible = default_visible_keys(columns);
        preferences::clear_columns(store, keys, self.layout);
        trace!(layout = %self.layout, "Reset columns to defaults");
    }

    /// Replace the set with `requested`, silently dropping unknown keys.
    pub fn replace<'k, S: PreferenceStore + ?Sized>(
        &mut self,
        requested: impl IntoIterator<Item = &'k str>,
        columns: &[ColumnDefinition],
        keys: &PreferenceKeys,
        store: &mut S,
    ) {
        self.visible = filter_known(requested, columns);
        self.persist(columns, keys, store);
    }

    /// Adapt to a new schema: keep the still-valid keys, or fall back to
    /// the new defaults when none survive.
    pub fn reconcile<S: PreferenceStore + ?Sized>(
        &mut self,
        columns: &[ColumnDefinition],
        keys: &PreferenceKeys,
        store: &mut S,
    ) {
        let filtered = filter_known(self.visible.iter().map(ColumnKey::as_str), columns);
        self.visible = visible_or_default(filtered, columns);
        self.persist(columns, keys, store);
    }

    fn persist<S: PreferenceStore + ?Sized>(
        &self,
        columns: &[ColumnDefinition],
        keys: &PreferenceKeys,
        store: &mut S,
    ) {
        let ordered: Vec<&ColumnKey> = self.resolve(columns).into_iter().map(|c| c.key()).collect();
        preferences::save_columns(store, keys, self.layout, &ordered);
    }
}

/// Keep only the keys present in `columns`.
pub fn filter_known<'k>(
    requested: impl IntoIterator<Item = &'k str>,
    columns: &[ColumnDefinition],
) -> BTreeSet<ColumnKey> {
    let known = column_keys(columns);
    requested
        .into_iter()
        .filter_map(|raw| known.iter().find(|k| k.as_str() == raw).cloned())
        .collect()
}

fn visible_or_default(
    filtered: BTreeSet<ColumnKey>,
    columns: &[ColumnDefinition],
) -> BTreeSet<ColumnKey> {
    if filtered.is_empty() {
        default_visible_keys(columns)
    } else {
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn key(s: &str) -> ColumnKey {
        ColumnKey::new(s).unwrap()
    }

    fn schema() -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::new(key("name"), "Name"),
            ColumnDefinition::new(key("sku"), "SKU"),
            ColumnDefinition::new(key("notes"), "Notes").with_default_visible(false),
        ]
    }

    fn keys_of(toggle: &ColumnVisibilityToggle) -> Vec<&str> {
        toggle.visible_keys().iter().map(ColumnKey::as_str).collect()
    }

    fn persisted(store: &MemoryStore, ns: &PreferenceKeys, layout: LayoutId) -> Option<String> {
        store.get(&ns.columns_key(layout)).unwrap()
    }

    #[test]
    fn load_without_preferences_uses_defaults() {
        let store = MemoryStore::new();
        let ns = PreferenceKeys::new("inv");
        let toggle = ColumnVisibilityToggle::load(LayoutId::Table, &ns, &schema(), &store);
        assert_eq!(keys_of(&toggle), vec!["name", "sku"]);
    }

    #[test]
    fn load_filters_unknown_persisted_keys() {
        let mut store = MemoryStore::new();
        let ns = PreferenceKeys::new("inv");
        store
            .set(&ns.columns_key(LayoutId::Table), "[\"notes\",\"gone\"]")
            .unwrap();
        let toggle = ColumnVisibilityToggle::load(LayoutId::Table, &ns, &schema(), &store);
        assert_eq!(keys_of(&toggle), vec!["notes"]);
    }

    #[test]
    fn load_falls_back_when_nothing_survives() {
        let mut store = MemoryStore::new();
        let ns = PreferenceKeys::new("inv");
        store
            .set(&ns.columns_key(LayoutId::Table), "[\"gone\"]")
            .unwrap();
        let toggle = ColumnVisibilityToggle::load(LayoutId::Table, &ns, &schema(), &store);
        assert_eq!(keys_of(&toggle), vec!["name", "sku"]);
    }

    #[test]
    fn load_treats_corrupt_value_as_absent() {
        let mut store = MemoryStore::new();
        let ns = PreferenceKeys::new("inv");
        store.set(&ns.columns_key(LayoutId::Cards), "oops").unwrap();
        let toggle = ColumnVisibilityToggle::load(LayoutId::Cards, &ns, &schema(), &store);
        assert_eq!(keys_of(&toggle), vec!["name", "sku"]);
    }

    #[test]
    fn toggle_column_persists_in_schema_order() {
        let mut store = MemoryStore::new();
        let ns = PreferenceKeys::new("inv");
        let columns = schema();
        let mut toggle = ColumnVisibilityToggle::with_defaults(LayoutId::Table, &columns);

        toggle.toggle_column(&key("notes"), &columns, &ns, &mut store);

        assert!(toggle.is_visible(&key("notes")));
        assert_eq!(
            persisted(&store, &ns, LayoutId::Table),
            Some("[\"name\",\"sku\",\"notes\"]".to_string())
        );
    }

    #[test]
    fn toggle_column_twice_restores_original() {
        let mut store = MemoryStore::new();
        let ns = PreferenceKeys::new("inv");
        let columns = schema();
        let mut toggle = ColumnVisibilityToggle::with_defaults(LayoutId::Table, &columns);
        let before = toggle.clone();

        toggle.toggle_column(&key("sku"), &columns, &ns, &mut store);
        toggle.toggle_column(&key("sku"), &columns, &ns, &mut store);

        assert_eq!(toggle, before);
    }

    #[test]
    fn toggle_unknown_column_does_not_write() {
        let mut store = MemoryStore::new();
        let ns = PreferenceKeys::new("inv");
        let columns = schema();
        let mut toggle = ColumnVisibilityToggle::with_defaults(LayoutId::Table, &columns);

        toggle.toggle_column(&key("ghost"), &columns, &ns, &mut store);

        assert_eq!(store.write_count(), 0);
        assert_eq!(keys_of(&toggle), vec!["name", "sku"]);
    }

    #[test]
    fn toggle_all_shows_all_then_hides_all() {
        let mut store = MemoryStore::new();
        let ns = PreferenceKeys::new("inv");
        let columns = schema();
        let mut toggle = ColumnVisibilityToggle::with_defaults(LayoutId::List, &columns);

        toggle.toggle_all(&columns, &ns, &mut store);
        assert_eq!(toggle.visible_count(), 3);

        toggle.toggle_all(&columns, &ns, &mut store);
        assert_eq!(toggle.visible_count(), 0);
        assert_eq!(
            persisted(&store, &ns, LayoutId::List),
            Some("[]".to_string())
        );
    }

    #[test]
    fn reset_to_default_removes_persisted_key() {
        let mut store = MemoryStore::new();
        let ns = PreferenceKeys::new("inv");
        let columns = schema();
        let mut toggle = ColumnVisibilityToggle::with_defaults(LayoutId::Table, &columns);
        toggle.toggle_column(&key("notes"), &columns, &ns, &mut store);

        toggle.reset_to_default(&columns, &ns, &mut store);

        assert_eq!(keys_of(&toggle), vec!["name", "sku"]);
        assert_eq!(persisted(&store, &ns, LayoutId::Table), None);
    }

    #[test]
    fn replace_drops_unknown_keys() {
        let mut store = MemoryStore::new();
        let ns = PreferenceKeys::new("inv");
        let columns = schema();
        let mut toggle = ColumnVisibilityToggle::with_defaults(LayoutId::Grid, &columns);

        toggle.replace(["notes", "oldField"], &columns, &ns, &mut store);

        assert_eq!(keys_of(&toggle), vec!["notes"]);
    }

    #[test]
    fn reconcile_keeps_valid_subset() {
        let mut store = MemoryStore::new();
        let ns = PreferenceKeys::new("inv");
        let old = vec![
            ColumnDefinition::new(key("name"), "Name"),
            ColumnDefinition::new(key("oldField"), "Old"),
        ];
        let mut toggle = ColumnVisibilityToggle::with_defaults(LayoutId::Table, &old);
        let new = vec![
            ColumnDefinition::new(key("name"), "Name"),
            ColumnDefinition::new(key("sku"), "SKU"),
        ];

        toggle.reconcile(&new, &ns, &mut store);

        assert_eq!(keys_of(&toggle), vec!["name"]);
    }

    #[test]
    fn resolve_returns_schema_order() {
        let columns = schema();
        let mut toggle = ColumnVisibilityToggle::with_defaults(LayoutId::Table, &columns);
        let mut store = MemoryStore::new();
        let ns = PreferenceKeys::new("inv");
        toggle.replace(["notes", "name"], &columns, &ns, &mut store);

        let resolved: Vec<&str> = toggle
            .resolve(&columns)
            .iter()
            .map(|c| c.key().as_str())
            .collect();
        assert_eq!(resolved, vec!["name", "notes"]);
    }
}
