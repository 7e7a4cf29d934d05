//! Bulk action bar and confirmation state machine.
//!
//! The bar never owns the selection. It receives it, decides what to
//! show, and sequences confirmation for actions that require it.
//!
//! # State Machine
//!
//! - `Idle -> Pending` when a confirmation-gated action is invoked
//! - `Pending -> Pending` when another gated action is invoked (replaces,
//!   never runs a handler)
//! - `Pending -> Idle` on confirm (handler runs once) or cancel

use crate::model::{BulkAction, RecordId};
use crate::state::SelectionSet;
use tracing::{debug, trace};

/// Actions shown inline. The rest collapse into the overflow menu.
pub const QUICK_ACTION_LIMIT: usize = 3;

/// An action waiting for explicit confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
///
/// `message` and `selected_count` are taken when the action is invoked.
/// Confirming runs against the selection as it is at confirm time, and the
/// rendered dialog recomputes its message from that selection.
pub struct PendingConfirmation {
    /// Key of the parked action.
    pub action_key: String,
    /// Dialog title.
    pub label: String,
    /// Prompt at invocation time.
    pub message: String,
    /// Text of the confirm button.
    pub confirm_label: String,
    /// Whether the action destroys records.
    pub destructive: bool,
    /// Selection size at invocation time.
    pub selected_count: usize,
}

/// Confirmation sequencing for gated actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfirmationState {
    /// Nothing awaits confirmation.
    #[default]
    Idle,
    /// An action is parked until confirmed or cancelled.
    Pending(PendingConfirmation),
}

/// Result of asking the bar to run an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkOutcome {
    /// The handler ran.
    Invoked,
    /// The action is waiting for confirmation.
    AwaitingConfirmation,
    /// Nothing happened: unknown key, empty selection, or nothing pending.
    Ignored,
}

/// UI state of the bulk action bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkActionBar {
    confirmation: ConfirmationState,
    overflow_open: bool,
}

impl BulkActionBar {
    /// Idle bar with menus closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// The bar renders only while something is selected.
    pub fn is_visible(selection: &SelectionSet) -> bool {
        !selection.is_empty()
    }

    /// Leading actions shown inline.
    pub fn quick_actions(actions: &[BulkAction]) -> &[BulkAction] {
        &actions[..actions.len().min(QUICK_ACTION_LIMIT)]
    }

    /// Actions past the quick limit.
    pub fn overflow_actions(actions: &[BulkAction]) -> &[BulkAction] {
        &actions[actions.len().min(QUICK_ACTION_LIMIT)..]
    }

    /// Current confirmation state.
    pub fn confirmation(&self) -> &ConfirmationState {
        &self.confirmation
    }

    /// The parked action, if any.
    pub fn pending(&self) -> Option<&PendingConfirmation> {
        match &self.confirmation {
            ConfirmationState::Pending(pending) => Some(pending),
            ConfirmationState::Idle => None,
        }
    }

    /// Whether the overflow menu is open.
    pub fn overflow_open(&self) -> bool {
        self.overflow_open
    }

    /// Open or close the overflow menu.
    pub fn toggle_overflow(&mut self) {
        self.overflow_open = !self.overflow_open;
    }

    /// Close the overflow menu.
    pub fn close_overflow(&mut self) {
        self.overflow_open = false;
    }

    /// Run `key` against the selection, or park it for confirmation.
    pub fn invoke(
        &mut self,
        actions: &[BulkAction],
        key: &str,
        selection: &SelectionSet,
    ) -> BulkOutcome {
        if selection.is_empty() {
            debug!(action = key, "Ignoring bulk action with empty selection");
            return BulkOutcome::Ignored;
        }
        let Some(action) = actions.iter().find(|a| a.key() == key) else {
            debug!(action = key, "Ignoring unknown bulk action");
            return BulkOutcome::Ignored;
        };

        if action.requires_confirmation() {
            let count = selection.len();
            self.confirmation = ConfirmationState::Pending(PendingConfirmation {
                action_key: action.key().to_string(),
                label: action.label().to_string(),
                message: action.confirmation_message(count),
                confirm_label: action.confirm_label().to_string(),
                destructive: action.kind().is_destructive(),
                selected_count: count,
            });
            trace!(action = key, count, "Bulk action awaiting confirmation");
            BulkOutcome::AwaitingConfirmation
        } else {
            run(action, selection);
            self.finish();
            BulkOutcome::Invoked
        }
    }

    /// Run the pending action with the current selection.
    pub fn confirm(&mut self, actions: &[BulkAction], selection: &SelectionSet) -> BulkOutcome {
        let ConfirmationState::Pending(pending) = std::mem::take(&mut self.confirmation) else {
            return BulkOutcome::Ignored;
        };
        self.close_overflow();

        if selection.is_empty() {
            debug!(action = %pending.action_key, "Selection emptied before confirmation");
            return BulkOutcome::Ignored;
        }
        match actions.iter().find(|a| a.key() == pending.action_key) {
            Some(action) => {
                run(action, selection);
                BulkOutcome::Invoked
            }
            None => {
                debug!(action = %pending.action_key, "Pending action no longer exists");
                BulkOutcome::Ignored
            }
        }
    }

    /// Drop the pending confirmation without running anything.
    pub fn cancel(&mut self) {
        if self.pending().is_some() {
            trace!("Bulk action confirmation cancelled");
        }
        self.confirmation = ConfirmationState::Idle;
    }

    /// Return to idle and close menus.
    pub fn reset(&mut self) {
        self.cancel();
        self.close_overflow();
    }

    fn finish(&mut self) {
        self.confirmation = ConfirmationState::Idle;
        self.close_overflow();
    }
}

fn run(action: &BulkAction, selection: &SelectionSet) {
    let ids: Vec<RecordId> = selection.ids();
    trace!(action = action.key(), count = ids.len(), "Invoking bulk action");
    action.invoke(&ids);
}
