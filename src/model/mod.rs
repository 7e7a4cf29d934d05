//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod bulk_action;
pub mod column;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod layout;
pub mod record;

// Re-export for convenience
pub use bulk_action::{ActionKind, BulkAction, BulkHandler};
pub use column::{
    column_keys, default_visible_keys, humanize_key, CellRenderer, ColumnDefinition, ColumnSpec,
};
pub use error::{AppError, SourceError, StoreError};
pub use identifiers::{ColumnKey, InvalidColumnKey, InvalidRecordId, RecordId};
pub use key_action::KeyAction;
pub use layout::{InvalidLayoutId, LayoutId};
pub use record::{display_value, Record};
