//! Generic tabular renderer.
//!
//! Knows nothing about selection: the table layout strategy wraps its
//! output with the select column when bulk actions are enabled.

use crate::model::{display_value, humanize_key, ColumnDefinition, Record};
use crate::view_state::HeaderCell;

/// Header cells and cell grid for `records`.
///
/// With no schema at all, columns come from the first record's fields.
pub fn tabulate(
    records: &[Record],
    columns: &[&ColumnDefinition],
    schema_empty: bool,
) -> (Vec<HeaderCell>, Vec<Vec<String>>) {
    if schema_empty {
        return tabulate_raw(records);
    }

    let headers = columns
        .iter()
        .map(|c| HeaderCell {
            key: c.key().to_string(),
            label: c.header(),
            sortable: c.sortable(),
        })
        .collect();
    let rows = records
        .iter()
        .map(|record| columns.iter().map(|c| c.render_cell(record)).collect())
        .collect();
    (headers, rows)
}

fn tabulate_raw(records: &[Record]) -> (Vec<HeaderCell>, Vec<Vec<String>>) {
    let keys: Vec<&String> = records
        .first()
        .map(|r| r.fields().keys().collect())
        .unwrap_or_default();

    let headers = keys
        .iter()
        .map(|key| HeaderCell {
            key: (*key).clone(),
            label: humanize_key(key),
            sortable: false,
        })
        .collect();
    let rows = records
        .iter()
        .map(|record| {
            keys.iter()
                .map(|key| record.field(key).map(display_value).unwrap_or_default())
                .collect()
        })
        .collect();
    (headers, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColumnKey;
    use serde_json::json;

    fn records() -> Vec<Record> {
        vec![
            serde_json::from_value(json!({"id": 1, "name": "Bolt", "qty": 10})).unwrap(),
            serde_json::from_value(json!({"id": 2, "name": "Nut"})).unwrap(),
        ]
    }

    #[test]
    fn tabulate_uses_visible_columns_in_order() {
        let qty = ColumnDefinition::new(ColumnKey::new("qty").unwrap(), "Qty").with_sortable(false);
        let name = ColumnDefinition::new(ColumnKey::new("name").unwrap(), "Name");
        let (headers, rows) = tabulate(&records(), &[&name, &qty], false);

        assert_eq!(headers[0].label, "Name");
        assert!(!headers[1].sortable);
        assert_eq!(rows[0], vec!["Bolt".to_string(), "10".to_string()]);
        assert_eq!(rows[1], vec!["Nut".to_string(), String::new()]);
    }

    #[test]
    fn tabulate_without_schema_uses_first_record_fields() {
        let (headers, rows) = tabulate(&records(), &[], true);
        let labels: Vec<&str> = headers.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(labels, vec!["Name", "Qty"]);
        assert_eq!(rows[1], vec!["Nut".to_string(), String::new()]);
    }

    #[test]
    fn tabulate_without_schema_keeps_field_order() {
        let records: Vec<Record> =
            vec![serde_json::from_value(json!({"id": 1, "zone": "B4", "amount": 3})).unwrap()];
        let (headers, rows) = tabulate(&records, &[], true);
        let keys: Vec<&str> = headers.iter().map(|h| h.key.as_str()).collect();
        assert_eq!(keys, vec!["zone", "amount"]);
        assert_eq!(rows[0], vec!["B4".to_string(), "3".to_string()]);
    }

    #[test]
    fn tabulate_with_hidden_columns_renders_empty_rows() {
        let (headers, rows) = tabulate(&records(), &[], false);
        assert!(headers.is_empty());
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_empty());
    }
}
