//! Multi-selection of records.
//!
//! Memory-only. Ids may outlive the records they name: upstream filtering
//! can remove a record that stays selected, and nothing here panics when
//! that happens.

use crate::model::{Record, RecordId};
use std::collections::BTreeSet;

/// Set of selected record ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<RecordId>,
}

/// Tri-state of the "select all" header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckbox {
    /// Every current record is selected.
    Checked,
    /// Some, but not all, current records are selected.
    Indeterminate,
    /// No current record is selected.
    Unchecked,
}

impl SelectionSet {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with exactly the ids of `records`.
    pub fn select_all(&mut self, records: &[Record]) {
        self.ids = records.iter().map(|r| r.id().clone()).collect();
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Add or remove a single id.
    pub fn toggle(&mut self, id: &RecordId, selected: bool) {
        if selected {
            self.ids.insert(id.clone());
        } else {
            self.ids.remove(id);
        }
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in sorted order.
    pub fn ids(&self) -> Vec<RecordId> {
        self.ids.iter().cloned().collect()
    }

    /// Selected ids in sorted order, borrowed.
    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }

    /// Number of `records` that are selected.
    ///
    /// Stale ids that name no current record are not counted.
    pub fn count_in(&self, records: &[Record]) -> usize {
        records.iter().filter(|r| self.contains(r.id())).count()
    }

    /// Header checkbox state relative to the current records.
    pub fn header_state(&self, records: &[Record]) -> HeaderCheckbox {
        let selected = self.count_in(records);
        if selected == 0 {
            HeaderCheckbox::Unchecked
        } else if selected == records.len() {
            HeaderCheckbox::Checked
        } else {
            HeaderCheckbox::Indeterminate
        }
    }
}
