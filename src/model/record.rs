//! Opaque records handed to the view by the caller.

use crate::model::RecordId;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A record with a stable id and arbitrary fields.
///
/// The engine never inspects fields except to render cells and to derive
/// fallback labels when no column schema is supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    fields: Map<String, Value>,
}

impl Record {
    /// Record from an id and its fields.
    pub fn new(id: RecordId, fields: Map<String, Value>) -> Self {
        Self { id, fields }
    }

    /// Stable id.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// All fields except the id, in source order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Raw field value.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Field value as display text, `None` when the field is absent.
    pub fn field_text(&self, key: &str) -> Option<String> {
        self.field(key).map(display_value)
    }
}

/// Stringify a JSON value for display.
///
/// Strings render without quotes, null renders empty, containers render
/// as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[derive(Deserialize)]
struct RawRecord {
    id: Value,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = RawRecord::deserialize(deserializer)?;
        let id_text = match raw.id {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => {
                return Err(D::Error::custom(format!(
                    "record id must be a string or number, got {other}"
                )))
            }
        };
        let id = RecordId::new(id_text).map_err(D::Error::custom)?;
        Ok(Record::new(id, raw.fields))
    }
}
