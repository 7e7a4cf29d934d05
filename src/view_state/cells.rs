//! Cell and field extraction shared by the layout strategies.

use crate::model::{display_value, humanize_key, ColumnDefinition, Record};
use crate::view_state::Field;

/// Labelled fields for `record` from the given columns.
pub fn schema_fields(record: &Record, columns: &[&ColumnDefinition]) -> Vec<Field> {
    columns
        .iter()
        .map(|c| Field {
            label: c.header(),
            value: c.render_cell(record),
        })
        .collect()
}

/// Labelled fields straight from the record, for views without a schema.
///
/// Labels are humanized field keys and values are stringified.
pub fn raw_fields(record: &Record) -> Vec<Field> {
    record
        .fields()
        .iter()
        .map(|(key, value)| Field {
            label: humanize_key(key),
            value: display_value(value),
        })
        .collect()
}

/// Split fields into a title and at most `cap` further fields.
///
/// Records with no fields use their id as title.
pub fn title_and_fields(record: &Record, mut fields: Vec<Field>, cap: usize) -> (String, Vec<Field>) {
    if fields.is_empty() {
        return (record.id().to_string(), Vec::new());
    }
    let title = fields.remove(0).value;
    fields.truncate(cap);
    (title, fields)
}
