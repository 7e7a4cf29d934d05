//! Keyboard action dispatch.
//!
//! Translates a [`KeyAction`] into `DataView` intents according to the
//! current focus. Modal surfaces take priority in this order: help
//! overlay, pending confirmation, open menu, body.

use crate::model::KeyAction;
use crate::state::ui_state::step;
use crate::state::{BulkActionBar, DataView, Focus, HeaderCheckbox, UiState};
use crate::store::PreferenceStore;
use tracing::trace;

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Apply one key action to the view and the front-end state.
pub fn handle_key_action<S: PreferenceStore>(
    view: &mut DataView<S>,
    ui: &mut UiState,
    action: KeyAction,
) -> KeyOutcome {
    if action == KeyAction::Quit {
        return KeyOutcome::Quit;
    }
    trace!(?action, focus = ?ui.focus, "Handling key action");

    if ui.help_visible {
        if matches!(action, KeyAction::Help | KeyAction::Cancel) {
            ui.help_visible = false;
        }
        return KeyOutcome::Continue;
    }

    if view.bulk_bar().pending().is_some() {
        match action {
            KeyAction::Confirm | KeyAction::Activate => {
                view.confirm_bulk_action();
                ui.close_menu();
                ui.clamp_cursor(view.records().len());
            }
            KeyAction::Cancel => view.cancel_bulk_action(),
            _ => {}
        }
        return KeyOutcome::Continue;
    }

    match ui.focus {
        Focus::ColumnMenu => handle_column_menu(view, ui, action),
        Focus::OverflowMenu => handle_overflow_menu(view, ui, action),
        Focus::Body => handle_body(view, ui, action),
    }
    KeyOutcome::Continue
}

fn handle_column_menu<S: PreferenceStore>(
    view: &mut DataView<S>,
    ui: &mut UiState,
    action: KeyAction,
) {
    let len = view.columns().len();
    match action {
        KeyAction::CursorUp => ui.menu_cursor = step(ui.menu_cursor, len, false),
        KeyAction::CursorDown => ui.menu_cursor = step(ui.menu_cursor, len, true),
        KeyAction::CursorTop => ui.menu_cursor = 0,
        KeyAction::CursorBottom => ui.menu_cursor = len.saturating_sub(1),
        KeyAction::ToggleSelect | KeyAction::Activate => {
            if let Some(key) = view.columns().get(ui.menu_cursor).map(|c| c.key().clone()) {
                view.toggle_column(&key);
            }
        }
        KeyAction::ToggleSelectAll => view.toggle_all_columns(),
        KeyAction::ResetColumns => view.reset_columns(),
        KeyAction::ColumnMenu | KeyAction::Cancel => ui.close_menu(),
        KeyAction::Help => ui.help_visible = true,
        _ => {}
    }
}

fn handle_overflow_menu<S: PreferenceStore>(
    view: &mut DataView<S>,
    ui: &mut UiState,
    action: KeyAction,
) {
    let overflow: Vec<String> = BulkActionBar::overflow_actions(view.bulk_actions())
        .iter()
        .map(|a| a.key().to_string())
        .collect();
    match action {
        KeyAction::CursorUp => ui.menu_cursor = step(ui.menu_cursor, overflow.len(), false),
        KeyAction::CursorDown => ui.menu_cursor = step(ui.menu_cursor, overflow.len(), true),
        KeyAction::ToggleSelect | KeyAction::Activate => {
            if let Some(key) = overflow.get(ui.menu_cursor) {
                view.invoke_bulk_action(key);
            }
            close_overflow(view, ui);
        }
        KeyAction::OverflowMenu | KeyAction::Cancel => close_overflow(view, ui),
        _ => {}
    }
}

fn close_overflow<S: PreferenceStore>(view: &mut DataView<S>, ui: &mut UiState) {
    if view.bulk_bar().overflow_open() {
        view.toggle_overflow();
    }
    ui.close_menu();
}

fn handle_body<S: PreferenceStore>(view: &mut DataView<S>, ui: &mut UiState, action: KeyAction) {
    let len = view.records().len();
    let current = view.records().get(ui.cursor).map(|r| r.id().clone());

    match action {
        KeyAction::CursorUp => ui.cursor = step(ui.cursor, len, false),
        KeyAction::CursorDown => ui.cursor = step(ui.cursor, len, true),
        KeyAction::CursorTop => ui.cursor = 0,
        KeyAction::CursorBottom => ui.cursor = len.saturating_sub(1),
        KeyAction::NextLayout => {
            view.next_layout();
            ui.cursor = 0;
        }
        KeyAction::PrevLayout => {
            view.prev_layout();
            ui.cursor = 0;
        }
        KeyAction::ToggleSelect => {
            if let (Some(id), true) = (current, view.bulk_actions_enabled()) {
                let selected = view.selection().contains(&id);
                view.toggle_item(&id, !selected);
            }
        }
        KeyAction::ToggleSelectAll if view.bulk_actions_enabled() => {
            if view.selection().header_state(view.records()) == HeaderCheckbox::Checked {
                view.clear_selection();
            } else {
                view.select_all();
            }
        }
        KeyAction::ClearSelection => view.clear_selection(),
        KeyAction::ColumnMenu if view.column_toggle_enabled() && !view.columns().is_empty() => {
            ui.open_menu(Focus::ColumnMenu);
        }
        KeyAction::ResetColumns => view.reset_columns(),
        KeyAction::QuickAction(index) => {
            let key = BulkActionBar::quick_actions(view.bulk_actions())
                .get(index)
                .map(|a| a.key().to_string());
            if let Some(key) = key {
                view.invoke_bulk_action(&key);
            }
        }
        KeyAction::OverflowMenu => {
            let has_overflow = !BulkActionBar::overflow_actions(view.bulk_actions()).is_empty();
            if has_overflow && !view.selection().is_empty() && view.bulk_actions_enabled() {
                if !view.bulk_bar().overflow_open() {
                    view.toggle_overflow();
                }
                ui.open_menu(Focus::OverflowMenu);
            }
        }
        KeyAction::Activate => {
            if let Some(id) = current {
                view.item_click(&id);
            }
        }
        KeyAction::Edit => {
            if let Some(id) = current {
                view.edit(&id);
            }
        }
        KeyAction::View => {
            if let Some(id) = current {
                view.view(&id);
            }
        }
        KeyAction::Help => ui.help_visible = true,
        _ => {}
    }
}

#[cfg(test)]
#[path = "key_handler_tests.rs"]
mod tests;
