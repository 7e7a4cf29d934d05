//! Record and schema input files.
//!
//! - Records: a JSON array of objects, or JSON Lines with one object per line.
//!   Every object needs an `id` (string or number).
//! - Schema: TOML or JSON (chosen by the `.json` extension) holding a
//!   `columns` list of `{key, label, default_visible, sortable, description}`.
//!
//! Parsing happens here, at the boundary. The engine only sees typed
//! [`Record`]s and [`ColumnDefinition`]s.

use crate::model::{ColumnDefinition, ColumnSpec, Record, SourceError};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaFile {
    #[serde(default)]
    columns: Vec<ColumnSpec>,
}

fn read(path: &Path) -> Result<String, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the records file at `path`.
///
/// # Errors
///
/// `NotFound`/`Io` when the file cannot be read, `InvalidRecords` when it
/// is neither a JSON array of records nor JSON Lines.
pub fn load_records(path: &Path) -> Result<Vec<Record>, SourceError> {
    let contents = read(path)?;
    let records = parse_records(&contents).map_err(|reason| SourceError::InvalidRecords {
        path: path.to_path_buf(),
        reason,
    })?;

    let mut seen = BTreeSet::new();
    for record in &records {
        if !seen.insert(record.id()) {
            warn!(id = %record.id(), path = %path.display(), "Duplicate record id");
        }
    }
    debug!(path = %path.display(), count = records.len(), "Loaded records");
    Ok(records)
}

/// Parse records from text: a JSON array, or JSON Lines.
///
/// # Errors
///
/// Returns the parser message, prefixed with the line number for JSON Lines.
pub fn parse_records(contents: &str) -> Result<Vec<Record>, String> {
    let trimmed = contents.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).map_err(|e| e.to_string());
    }

    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| format!("line {}: {e}", index + 1))
        })
        .collect()
}

/// Load the column schema at `path`.
///
/// # Errors
///
/// `NotFound`/`Io` when the file cannot be read, `InvalidSchema` when it
/// does not parse, `DuplicateColumn` when two columns share a key.
pub fn load_schema(path: &Path) -> Result<Vec<ColumnDefinition>, SourceError> {
    let contents = read(path)?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let parsed: Result<SchemaFile, String> = if is_json {
        serde_json::from_str(&contents).map_err(|e| e.to_string())
    } else {
        toml::from_str(&contents).map_err(|e| e.to_string())
    };
    let schema = parsed.map_err(|reason| SourceError::InvalidSchema {
        path: path.to_path_buf(),
        reason,
    })?;

    let mut seen = BTreeSet::new();
    for spec in &schema.columns {
        if !seen.insert(spec.key.clone()) {
            return Err(SourceError::DuplicateColumn {
                path: path.to_path_buf(),
                key: spec.key.to_string(),
            });
        }
    }

    debug!(path = %path.display(), count = schema.columns.len(), "Loaded column schema");
    Ok(schema.columns.into_iter().map(ColumnDefinition::from).collect())
}
