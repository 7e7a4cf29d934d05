//! Core identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable unique identifier for a record handed to the view.
///
/// Upstream ids may be JSON strings or numbers; both normalize to text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Smart constructor: validates non-empty id
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecordId::Empty`] for blank input.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRecordId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            Err(InvalidRecordId::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    /// Borrow as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RecordId {
    type Error = InvalidRecordId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

/// Key of a column, unique within one column schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColumnKey(String);

impl ColumnKey {
    /// Smart constructor: validates non-empty key
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColumnKey::Empty`] for blank input.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidColumnKey> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            Err(InvalidColumnKey::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    /// Borrow as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ColumnKey {
    type Error = InvalidColumnKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColumnKey> for String {
    fn from(key: ColumnKey) -> Self {
        key.0
    }
}

// ===== Error Types =====

/// Rejected [`RecordId`] input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRecordId {
    /// Blank id.
    #[error("Record ID cannot be empty")]
    Empty,
}

/// Rejected [`ColumnKey`] input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidColumnKey {
    /// Blank key.
    #[error("Column key cannot be empty")]
    Empty,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_accepts_simple_alphanumeric() {
        let id = RecordId::new("inv-0042");
        assert!(id.is_ok(), "Simple alphanumeric should be accepted");
    }

    #[test]
    fn record_id_rejects_empty_string() {
        assert_eq!(RecordId::new(""), Err(InvalidRecordId::Empty));
    }

    #[test]
    fn record_id_rejects_whitespace_only() {
        assert_eq!(RecordId::new("   "), Err(InvalidRecordId::Empty));
    }

    #[test]
    fn record_id_display_returns_inner_string() {
        let id = RecordId::new("17").expect("valid id");
        assert_eq!(id.to_string(), "17");
        assert_eq!(id.as_str(), "17");
    }

    #[test]
    fn record_id_deserializes_from_json_string() {
        let id: RecordId = serde_json::from_str("\"r-1\"").expect("valid json id");
        assert_eq!(id.as_str(), "r-1");
    }

    #[test]
    fn record_id_deserialize_rejects_empty() {
        let result: Result<RecordId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err(), "Empty id should fail deserialization");
    }

    #[test]
    fn column_key_rejects_empty_string() {
        assert_eq!(ColumnKey::new(""), Err(InvalidColumnKey::Empty));
    }

    #[test]
    fn column_key_serializes_as_plain_string() {
        let key = ColumnKey::new("sku").expect("valid key");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"sku\"");
    }

    #[test]
    fn column_keys_order_lexicographically() {
        let a = ColumnKey::new("a").unwrap();
        let b = ColumnKey::new("b").unwrap();
        assert!(a < b);
    }
}
