//! Bulk actions offered by the binary.
//!
//! Handlers cannot reach the view that invoked them, so they queue an
//! [`ActionRequest`] in a shared [`ActionOutbox`]. The event loop drains the
//! outbox after each key and applies the requests to the record set.

use crate::model::{ActionKind, BulkAction, Record, RecordId};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// A bulk action that ran, with the ids it ran on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    /// Key of the action that ran.
    pub key: String,
    /// What the action does.
    pub kind: ActionKind,
    /// Selected ids, in selection order.
    pub ids: Vec<RecordId>,
}

impl ActionRequest {
    /// Whether applying the request removes its records from the view.
    pub fn removes_records(&self) -> bool {
        matches!(self.kind, ActionKind::Delete | ActionKind::Archive)
    }

    /// Records left after applying the request, or `None` if it removes nothing.
    pub fn apply(&self, records: &[Record]) -> Option<Vec<Record>> {
        if !self.removes_records() {
            return None;
        }
        let doomed: BTreeSet<&RecordId> = self.ids.iter().collect();
        Some(
            records
                .iter()
                .filter(|r| !doomed.contains(r.id()))
                .cloned()
                .collect(),
        )
    }
}

/// Shared queue of requests produced by action handlers.
#[derive(Debug, Clone, Default)]
pub struct ActionOutbox(Rc<RefCell<Vec<ActionRequest>>>);

impl ActionOutbox {
    /// Empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a request.
    pub fn push(&self, request: ActionRequest) {
        self.0.borrow_mut().push(request);
    }

    /// Take every queued request, oldest first.
    pub fn drain(&self) -> Vec<ActionRequest> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Build an action whose handler queues a request in this outbox.
    pub fn action(&self, key: &str, label: &str, kind: ActionKind) -> BulkAction {
        let outbox = self.clone();
        let request_key = key.to_string();
        let request_kind = kind.clone();
        BulkAction::new(key, label, kind, move |ids| {
            outbox.push(ActionRequest {
                key: request_key.clone(),
                kind: request_kind.clone(),
                ids: ids.to_vec(),
            })
        })
    }
}

/// The binary's action set. Destructive actions ask for confirmation.
pub fn default_actions(outbox: &ActionOutbox) -> Vec<BulkAction> {
    vec![
        outbox.action("export", "Export", ActionKind::Export),
        outbox.action("approve", "Approve", ActionKind::Approve),
        outbox
            .action("delete", "Delete", ActionKind::Delete)
            .with_confirmation(None)
            .with_confirm_label("Delete"),
        outbox
            .action("archive", "Archive", ActionKind::Archive)
            .with_confirmation(None)
            .with_confirm_label("Archive"),
        outbox.action("print", "Print", ActionKind::Print),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Record> {
        serde_json::from_value(json!([{"id": "a"}, {"id": "b"}, {"id": "c"}])).unwrap()
    }

    fn id(s: &str) -> RecordId {
        RecordId::new(s).unwrap()
    }

    #[test]
    fn handlers_queue_requests() {
        let outbox = ActionOutbox::new();
        let actions = default_actions(&outbox);
        actions[0].invoke(&[id("a"), id("b")]);

        let drained = outbox.drain();
        assert_eq!(
            drained,
            vec![ActionRequest {
                key: "export".to_string(),
                kind: ActionKind::Export,
                ids: vec![id("a"), id("b")],
            }]
        );
        assert!(outbox.is_empty());
    }

    #[test]
    fn destructive_defaults_require_confirmation() {
        let actions = default_actions(&ActionOutbox::new());
        for action in &actions {
            assert_eq!(
                action.requires_confirmation(),
                action.kind().is_destructive(),
                "action {}",
                action.key()
            );
        }
    }

    #[test]
    fn delete_request_removes_records() {
        let request = ActionRequest {
            key: "delete".to_string(),
            kind: ActionKind::Delete,
            ids: vec![id("b"), id("missing")],
        };
        let remaining = request.apply(&records()).expect("delete removes records");
        let ids: Vec<&str> = remaining.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn export_request_leaves_records_alone() {
        let request = ActionRequest {
            key: "export".to_string(),
            kind: ActionKind::Export,
            ids: vec![id("a")],
        };
        assert_eq!(request.apply(&records()), None);
    }
}
