//! Column schema entries and cell rendering fallbacks.

use crate::model::{ColumnKey, Record};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

/// Caller-supplied cell renderer producing pre-rendered cell text.
pub type CellRenderer = Rc<dyn Fn(&Record) -> String>;

/// Describes one field's key, label, default visibility, and cell rendering.
#[derive(Clone)]
pub struct ColumnDefinition {
    key: ColumnKey,
    label: String,
    default_visible: bool,
    sortable: bool,
    description: Option<String>,
    render: Option<CellRenderer>,
}

impl ColumnDefinition {
    /// New column, visible and sortable by default.
    pub fn new(key: ColumnKey, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            default_visible: true,
            sortable: true,
            description: None,
            render: None,
        }
    }

    /// Set whether the column shows before any preference is saved.
    pub fn with_default_visible(mut self, default_visible: bool) -> Self {
        self.default_visible = default_visible;
        self
    }

    /// Mark the column sortable or not.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Attach help text shown in the column menu.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Render cells with `render` instead of the raw field.
    pub fn with_render(mut self, render: impl Fn(&Record) -> String + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    /// Column key.
    pub fn key(&self) -> &ColumnKey {
        &self.key
    }

    /// Whether the column shows by default.
    pub fn default_visible(&self) -> bool {
        self.default_visible
    }

    /// Whether the column is sortable.
    pub fn sortable(&self) -> bool {
        self.sortable
    }

    /// Help text, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Header text. Columns without a label show their humanized key.
    pub fn header(&self) -> String {
        if self.label.trim().is_empty() {
            humanize_key(self.key.as_str())
        } else {
            self.label.clone()
        }
    }

    /// Cell text for a record.
    ///
    /// Uses the custom renderer when present, then the raw field with the
    /// same key, then an empty cell.
    pub fn render_cell(&self, record: &Record) -> String {
        match &self.render {
            Some(render) => render(record),
            None => record.field_text(self.key.as_str()).unwrap_or_default(),
        }
    }
}

impl fmt::Debug for ColumnDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDefinition")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("default_visible", &self.default_visible)
            .field("sortable", &self.sortable)
            .field("description", &self.description)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Serialized column entry as it appears in a schema file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ColumnSpec {
    /// Field key.
    pub key: ColumnKey,
    /// Header text; the humanized key when absent.
    #[serde(default)]
    pub label: Option<String>,
    /// Visible before any preference is saved.
    #[serde(default = "default_true")]
    pub default_visible: bool,
    /// Sortable header.
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// Column menu help text.
    #[serde(default)]
    pub description: Option<String>,
}

fn default_true() -> bool {
    true
}

impl From<ColumnSpec> for ColumnDefinition {
    fn from(spec: ColumnSpec) -> Self {
        let mut column = ColumnDefinition::new(spec.key, spec.label.unwrap_or_default())
            .with_default_visible(spec.default_visible)
            .with_sortable(spec.sortable);
        if let Some(description) = spec.description {
            column = column.with_description(description);
        }
        column
    }
}

/// All keys of a schema.
pub fn column_keys(columns: &[ColumnDefinition]) -> BTreeSet<ColumnKey> {
    columns.iter().map(|c| c.key().clone()).collect()
}

/// Keys of the columns marked visible by default.
pub fn default_visible_keys(columns: &[ColumnDefinition]) -> BTreeSet<ColumnKey> {
    columns
        .iter()
        .filter(|c| c.default_visible())
        .map(|c| c.key().clone())
        .collect()
}

/// Turn a field key into a readable label.
///
/// Splits on `_`, `-`, whitespace and camelCase boundaries, then
/// capitalizes the first word: `unitPrice` and `unit_price` both become
/// `Unit price`.
pub fn humanize_key(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.extend(ch.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }

    let joined = words.join(" ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;
    use serde_json::{json, Map};

    fn record(fields: serde_json::Value) -> Record {
        let map: Map<String, serde_json::Value> = serde_json::from_value(fields).unwrap();
        Record::new(RecordId::new("1").unwrap(), map)
    }

    fn key(s: &str) -> ColumnKey {
        ColumnKey::new(s).unwrap()
    }

    #[test]
    fn humanize_splits_snake_and_camel_case() {
        assert_eq!(humanize_key("unit_price"), "Unit price");
        assert_eq!(humanize_key("unitPrice"), "Unit price");
        assert_eq!(humanize_key("created-at"), "Created at");
        assert_eq!(humanize_key("sku"), "Sku");
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn humanize_keeps_acronyms_together() {
        assert_eq!(humanize_key("SKU"), "Sku");
        assert_eq!(humanize_key("customerID"), "Customer id");
    }

    #[test]
    fn render_cell_prefers_custom_renderer() {
        let column = ColumnDefinition::new(key("qty"), "Qty")
            .with_render(|r| format!("{} pcs", r.field_text("qty").unwrap_or_default()));
        assert_eq!(column.render_cell(&record(json!({"qty": 4}))), "4 pcs");
    }

    #[test]
    fn render_cell_falls_back_to_raw_field() {
        let column = ColumnDefinition::new(key("name"), "Name");
        assert_eq!(column.render_cell(&record(json!({"name": "Bolt"}))), "Bolt");
    }

    #[test]
    fn render_cell_is_empty_when_field_missing() {
        let column = ColumnDefinition::new(key("notes"), "Notes");
        assert_eq!(column.render_cell(&record(json!({}))), "");
    }

    #[test]
    fn header_falls_back_to_humanized_key() {
        let column = ColumnDefinition::new(key("due_date"), "");
        assert_eq!(column.header(), "Due date");
    }

    #[test]
    fn default_visible_keys_filters_hidden_columns() {
        let columns = vec![
            ColumnDefinition::new(key("name"), "Name"),
            ColumnDefinition::new(key("notes"), "Notes").with_default_visible(false),
        ];
        let defaults = default_visible_keys(&columns);
        assert!(defaults.contains(&key("name")));
        assert!(!defaults.contains(&key("notes")));
    }

    #[test]
    fn column_spec_defaults_to_visible_and_sortable() {
        let spec: ColumnSpec = serde_json::from_value(json!({"key": "sku"})).unwrap();
        let column = ColumnDefinition::from(spec);
        assert!(column.default_visible());
        assert!(column.sortable());
        assert_eq!(column.header(), "Sku");
    }

    #[test]
    fn column_spec_rejects_unknown_fields() {
        let result: Result<ColumnSpec, _> =
            serde_json::from_value(json!({"key": "sku", "width": 10}));
        assert!(result.is_err());
    }
}
