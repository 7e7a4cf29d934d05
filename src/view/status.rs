//! One-line status messages fed by record callbacks.

use crate::model::{Record, RecordId};
use crate::state::ViewCallbacks;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

/// Shared message slot shown in the status bar until the next key press.
#[derive(Debug, Clone, Default)]
pub struct StatusLine(Rc<RefCell<String>>);

impl StatusLine {
    /// Empty status line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the message.
    pub fn set(&self, message: impl Into<String>) {
        *self.0.borrow_mut() = message.into();
    }

    /// Remove the message.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Current message, empty when none.
    pub fn get(&self) -> String {
        self.0.borrow().clone()
    }
}

/// Reports record callbacks on the status line and in the log.
#[derive(Debug, Clone)]
pub struct StatusCallbacks {
    status: StatusLine,
}

impl StatusCallbacks {
    /// Report into `status`.
    pub fn new(status: StatusLine) -> Self {
        Self { status }
    }
}

impl ViewCallbacks for StatusCallbacks {
    fn on_item_click(&self, record: &Record) {
        info!(id = %record.id(), "Record opened");
        self.status.set(format!("Opened {}", record.id()));
    }

    fn on_edit(&self, record: &Record) {
        info!(id = %record.id(), "Record edit requested");
        self.status.set(format!("Edit {}", record.id()));
    }

    fn on_view(&self, record: &Record) {
        info!(id = %record.id(), "Record view requested");
        self.status.set(format!("View {}", record.id()));
    }

    fn on_selection_change(&self, selected: &[RecordId]) {
        debug!(count = selected.len(), "Selection changed");
    }
}
