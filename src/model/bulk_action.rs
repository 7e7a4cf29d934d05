//! Bulk action descriptors.
//!
//! A bulk action is a stateless descriptor. The engine only sequences the
//! optional confirmation step and calls the handler with the selected ids.

use crate::model::RecordId;
use std::fmt;
use std::rc::Rc;

/// Handler invoked with the ids of the current selection.
pub type BulkHandler = Rc<dyn Fn(&[RecordId])>;

/// Category of a bulk action. Drives icon and color choices in the front end.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Removes records.
    Delete,
    /// Edits records in place.
    Edit,
    /// Downloads records.
    Download,
    /// Exports records.
    Export,
    /// Sends records somewhere.
    Send,
    /// Prints records.
    Print,
    /// Assigns records to someone.
    Assign,
    /// Approves records.
    Approve,
    /// Rejects records.
    Reject,
    /// Archives records out of the view.
    Archive,
    /// Caller-defined kind without special presentation.
    Other(String),
}

impl ActionKind {
    /// Case-insensitive; unknown names become [`ActionKind::Other`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "delete" => ActionKind::Delete,
            "edit" => ActionKind::Edit,
            "download" => ActionKind::Download,
            "export" => ActionKind::Export,
            "send" => ActionKind::Send,
            "print" => ActionKind::Print,
            "assign" => ActionKind::Assign,
            "approve" => ActionKind::Approve,
            "reject" => ActionKind::Reject,
            "archive" => ActionKind::Archive,
            _ => ActionKind::Other(raw.to_string()),
        }
    }

    /// Lowercase name, or the caller's text for `Other`.
    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Delete => "delete",
            ActionKind::Edit => "edit",
            ActionKind::Download => "download",
            ActionKind::Export => "export",
            ActionKind::Send => "send",
            ActionKind::Print => "print",
            ActionKind::Assign => "assign",
            ActionKind::Approve => "approve",
            ActionKind::Reject => "reject",
            ActionKind::Archive => "archive",
            ActionKind::Other(kind) => kind,
        }
    }

    /// Kinds that remove or discard records. Their confirm button is styled as dangerous.
    pub fn is_destructive(&self) -> bool {
        matches!(
            self,
            ActionKind::Delete | ActionKind::Reject | ActionKind::Archive
        )
    }
}

/// An operation applicable to the current multi-selection.
#[derive(Clone)]
pub struct BulkAction {
    key: String,
    label: String,
    kind: ActionKind,
    requires_confirmation: bool,
    confirm_message: Option<String>,
    confirm_label: Option<String>,
    handler: BulkHandler,
}

impl BulkAction {
    /// Action without confirmation.
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        kind: ActionKind,
        handler: impl Fn(&[RecordId]) + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            requires_confirmation: false,
            confirm_message: None,
            confirm_label: None,
            handler: Rc::new(handler),
        }
    }

    /// Gate the action behind a confirmation step, optionally with a custom message.
    pub fn with_confirmation(mut self, message: Option<String>) -> Self {
        self.requires_confirmation = true;
        self.confirm_message = message;
        self
    }

    /// Override the confirm button text.
    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    /// Stable key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Action category.
    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// Whether invoking parks the action for confirmation.
    pub fn requires_confirmation(&self) -> bool {
        self.requires_confirmation
    }

    /// Message shown while the action waits for confirmation.
    pub fn confirmation_message(&self, selected_count: usize) -> String {
        match &self.confirm_message {
            Some(message) => message.clone(),
            None => format!(
                "Are you sure you want to run \"{}\" on {} item(s)?",
                self.label, selected_count
            ),
        }
    }

    /// Confirm button text, `"Confirm"` unless overridden.
    pub fn confirm_label(&self) -> &str {
        self.confirm_label.as_deref().unwrap_or("Confirm")
    }

    /// Call the handler with `selected`.
    pub fn invoke(&self, selected: &[RecordId]) {
        (self.handler)(selected)
    }
}

impl fmt::Debug for BulkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BulkAction")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("requires_confirmation", &self.requires_confirmation)
            .field("confirm_message", &self.confirm_message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn parse_maps_known_kinds() {
        assert_eq!(ActionKind::parse("Delete"), ActionKind::Delete);
        assert_eq!(ActionKind::parse("export"), ActionKind::Export);
        assert_eq!(
            ActionKind::parse("merge"),
            ActionKind::Other("merge".to_string())
        );
    }

    #[test]
    fn destructive_kinds() {
        assert!(ActionKind::Delete.is_destructive());
        assert!(ActionKind::Archive.is_destructive());
        assert!(!ActionKind::Export.is_destructive());
    }

    #[test]
    fn default_confirmation_message_mentions_label_and_count() {
        let action = BulkAction::new("delete", "Delete", ActionKind::Delete, |_| {})
            .with_confirmation(None);
        let message = action.confirmation_message(3);
        assert!(message.contains("\"Delete\""), "got: {message}");
        assert!(message.contains('3'), "got: {message}");
    }

    #[test]
    fn custom_confirmation_message_wins() {
        let action = BulkAction::new("delete", "Delete", ActionKind::Delete, |_| {})
            .with_confirmation(Some("Really delete?".to_string()));
        assert_eq!(action.confirmation_message(5), "Really delete?");
    }

    #[test]
    fn confirm_label_defaults() {
        let action = BulkAction::new("x", "X", ActionKind::Send, |_| {});
        assert_eq!(action.confirm_label(), "Confirm");
        let action = action.with_confirm_label("Send now");
        assert_eq!(action.confirm_label(), "Send now");
    }

    #[test]
    fn invoke_passes_ids_to_handler() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let action = BulkAction::new("export", "Export", ActionKind::Export, move |ids| {
            sink.borrow_mut().extend(ids.iter().cloned());
        });
        let ids = vec![RecordId::new("a").unwrap(), RecordId::new("b").unwrap()];
        action.invoke(&ids);
        assert_eq!(*seen.borrow(), ids);
    }
}
