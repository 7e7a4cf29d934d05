//! Compose the full view tree from engine state.

use super::strategy::{strategy_for, LayoutContext, Renderers};
use super::{
    ActionButton, Body, BulkBarView, ColumnMenuEntry, ColumnMenuView, ConfirmationView,
    RenderedView, Toolbar,
};
use crate::model::{BulkAction, ColumnDefinition, LayoutId, Record};
use crate::state::{BulkActionBar, ColumnVisibilityToggle, LayoutOption, SelectionSet};

/// Borrowed snapshot of everything rendering reads.
pub struct RenderInput<'a> {
    /// Active layout.
    pub layout: LayoutId,
    /// Toolbar switcher entries.
    pub layouts: Vec<LayoutOption>,
    /// Records in display order.
    pub records: &'a [Record],
    /// Full schema; empty means raw record fields.
    pub columns: &'a [ColumnDefinition],
    /// Column visibility of the active layout.
    pub visibility: &'a ColumnVisibilityToggle,
    /// Current selection.
    pub selection: &'a SelectionSet,
    /// Configured bulk actions.
    pub bulk_actions: &'a [BulkAction],
    /// Bulk bar menu and confirmation state.
    pub bulk_bar: &'a BulkActionBar,
    /// Caller item renderers.
    pub renderers: &'a Renderers,
    /// Show checkboxes and the bulk bar.
    pub enable_bulk_actions: bool,
    /// Offer the column menu.
    pub enable_column_toggle: bool,
    /// Replace the body with a loading indicator.
    pub loading: bool,
    /// Body text when there are no records.
    pub empty_message: &'a str,
}

/// Build the view tree for one frame.
pub fn render(input: &RenderInput<'_>) -> RenderedView {
    let selected_count = input.selection.count_in(input.records);
    RenderedView {
        layout: input.layout,
        toolbar: Toolbar {
            layouts: input.layouts.clone(),
            column_menu: column_menu(input),
            record_count: input.records.len(),
            selected_count,
        },
        body: body(input),
        bulk_bar: bulk_bar(input),
        confirmation: confirmation(input),
    }
}

fn body(input: &RenderInput<'_>) -> Body {
    if input.loading {
        return Body::Loading;
    }
    if input.records.is_empty() {
        return Body::NoData {
            message: input.empty_message.to_string(),
        };
    }
    let columns = input.visibility.resolve(input.columns);
    let ctx = LayoutContext {
        records: input.records,
        columns: &columns,
        schema_empty: input.columns.is_empty(),
        selection: input.enable_bulk_actions.then_some(input.selection),
        renderers: input.renderers,
    };
    strategy_for(input.layout)(&ctx)
}

fn column_menu(input: &RenderInput<'_>) -> Option<ColumnMenuView> {
    if !input.enable_column_toggle || input.columns.is_empty() {
        return None;
    }
    let visibility = input.visibility;
    let entries = input
        .columns
        .iter()
        .map(|c| ColumnMenuEntry {
            key: c.key().clone(),
            label: c.header(),
            description: c.description().map(str::to_string),
            visible: visibility.is_visible(c.key()),
        })
        .collect();
    Some(ColumnMenuView {
        layout: visibility.layout(),
        entries,
        visible_count: visibility.resolve(input.columns).len(),
        total_count: input.columns.len(),
        all_visible: visibility.all_visible(input.columns),
    })
}

fn bulk_bar(input: &RenderInput<'_>) -> Option<BulkBarView> {
    if !input.enable_bulk_actions || !BulkActionBar::is_visible(input.selection) {
        return None;
    }
    Some(BulkBarView {
        selected_count: input.selection.len(),
        total_count: input.records.len(),
        header: input.selection.header_state(input.records),
        quick: buttons(BulkActionBar::quick_actions(input.bulk_actions)),
        overflow: buttons(BulkActionBar::overflow_actions(input.bulk_actions)),
        overflow_open: input.bulk_bar.overflow_open(),
    })
}

fn buttons(actions: &[BulkAction]) -> Vec<ActionButton> {
    actions
        .iter()
        .map(|a| ActionButton {
            key: a.key().to_string(),
            label: a.label().to_string(),
            kind: a.kind().clone(),
            destructive: a.kind().is_destructive(),
        })
        .collect()
}

fn confirmation(input: &RenderInput<'_>) -> Option<ConfirmationView> {
    let pending = input.bulk_bar.pending()?;
    // Count the selection as it is now, not as it was at invoke.
    let message = input
        .bulk_actions
        .iter()
        .find(|a| a.key() == pending.action_key)
        .map(|a| a.confirmation_message(input.selection.len()))
        .unwrap_or_else(|| pending.message.clone());
    Some(ConfirmationView {
        title: pending.label.clone(),
        message,
        confirm_label: pending.confirm_label.clone(),
        cancel_label: "Cancel".to_string(),
        destructive: pending.destructive,
    })
}
