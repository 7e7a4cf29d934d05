//! Caller hooks fired by [`DataView`](crate::state::DataView).

use crate::model::{Record, RecordId};

/// Notifications about user intent on individual records.
///
/// Every method defaults to a no-op so callers only implement what they
/// care about.
pub trait ViewCallbacks {
    /// The user activated a record.
    fn on_item_click(&self, _record: &Record) {}

    /// The user asked to edit a record.
    fn on_edit(&self, _record: &Record) {}

    /// The user asked to view a record.
    fn on_view(&self, _record: &Record) {}

    /// Fired after every selection change with the new selection, sorted.
    fn on_selection_change(&self, _selected: &[RecordId]) {}
}

/// Callbacks that ignore everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCallbacks;

impl ViewCallbacks for NoopCallbacks {}
