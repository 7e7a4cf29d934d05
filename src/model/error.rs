//! Error types for recview.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose
//! via `?` and `From` conversions up to [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the binary
//!   - [`SourceError`] - Records or schema file could not be loaded
//!   - [`StoreError`] - Preference store could not be opened
//!   - [`ConfigError`] - Config file exists but is unreadable or invalid
//!   - [`LoggingError`] - Tracing subscriber could not be installed
//!   - `std::io::Error` - Terminal failures
//!
//! # Recovery Strategy
//!
//! Inside the engine nothing is fatal. Store failures during load and save
//! are caught at the `DataView` boundary, logged, and replaced with
//! in-memory defaults. Schema drift and invalid transitions are silent
//! no-ops. Only the binary's startup path surfaces errors to the user.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Records or column schema could not be loaded at startup.
    #[error("Failed to load input: {0}")]
    Source(#[from] SourceError),

    /// The preference store could not be opened.
    #[error("Preference store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failures of a key-value preference store.
///
/// The engine treats every variant the same way: log and continue with
/// in-memory state. "Preference not remembered" is the worst outcome.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("Preference file {path:?}: {source}")]
    Io {
        /// Backing file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Store contents could not be serialized.
    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The store refused the operation (quota, disabled storage, ...).
    #[error("Preference store unavailable: {0}")]
    Unavailable(String),
}

/// Errors loading the records or schema files given to the binary.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file does not exist.
    #[error("File not found: {0:?}")]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("Failed to read {path:?}: {source}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The records file is not a JSON array of records.
    #[error("Invalid records in {path:?}: {reason}")]
    InvalidRecords {
        /// Path being parsed.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// The schema file is not a valid column list.
    #[error("Invalid column schema in {path:?}: {reason}")]
    InvalidSchema {
        /// Path being parsed.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// Two columns share a key.
    #[error("Duplicate column key {key:?} in {path:?}")]
    DuplicateColumn {
        /// Path being parsed.
        path: PathBuf,
        /// Repeated key.
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_converts_into_app_error() {
        let err: AppError = SourceError::NotFound(PathBuf::from("records.json")).into();
        assert!(matches!(err, AppError::Source(SourceError::NotFound(_))));
    }

    #[test]
    fn io_error_converts_into_terminal_error() {
        let err: AppError = std::io::Error::other("broken pipe").into();
        assert!(matches!(err, AppError::Terminal(_)));
    }

    #[test]
    fn store_error_display_includes_path() {
        let err = StoreError::Io {
            path: PathBuf::from("/tmp/prefs.json"),
            source: std::io::Error::other("denied"),
        };
        let text = err.to_string();
        assert!(text.contains("prefs.json"), "got: {text}");
    }

    #[test]
    fn duplicate_column_display_names_key() {
        let err = SourceError::DuplicateColumn {
            path: PathBuf::from("schema.toml"),
            key: "sku".to_string(),
        };
        assert!(err.to_string().contains("sku"));
    }
}
