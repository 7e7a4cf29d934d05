//! The data view orchestrator.
//!
//! [`DataView`] owns every piece of view state for one page: the record
//! set, the schema, the active layout, the per-layout column visibility,
//! the selection, and the bulk action bar. All mutation goes through its
//! methods. Rendering is a pure read returning a [`RenderedView`].
//!
//! Preference reads happen once in [`DataView::initialize`]. Every later
//! change is written straight through to the store. Storage failures are
//! logged and never surface to callers.

use crate::model::{BulkAction, ColumnDefinition, ColumnKey, LayoutId, Record, RecordId};
use crate::state::{
    BulkActionBar, BulkOutcome, ColumnVisibilityToggle, NoopCallbacks, SelectionSet,
    ViewCallbacks, ViewModeToggle,
};
use crate::store::preferences::{self, PreferenceKeys};
use crate::store::PreferenceStore;
use crate::view_state::{render, RenderInput, RenderedView, Renderers};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Layouts offered when the caller does not choose.
pub const DEFAULT_LAYOUTS: [LayoutId; 4] = [
    LayoutId::Cards,
    LayoutId::Table,
    LayoutId::List,
    LayoutId::Grid,
];

/// Body text when there are no records.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data to display";

/// Construction parameters for a [`DataView`].
#[derive(Debug, Clone)]
pub struct DataViewConfig {
    /// Records in display order.
    pub records: Vec<Record>,
    /// Column schema; empty means raw record fields.
    pub columns: Vec<ColumnDefinition>,
    /// Offered layouts. Order is irrelevant: the switcher uses canonical order.
    pub available_layouts: Vec<LayoutId>,
    /// Layout used when nothing valid is saved.
    pub default_layout: LayoutId,
    /// Actions offered for the selection.
    pub bulk_actions: Vec<BulkAction>,
    /// Prefix isolating this page's preferences from other pages.
    pub persistence_namespace: String,
    /// Custom item renderers.
    pub renderers: Renderers,
    /// Show checkboxes and the bulk bar.
    pub enable_bulk_actions: bool,
    /// Offer the column menu.
    pub enable_column_toggle: bool,
    /// Body text when there are no records.
    pub empty_message: String,
}

impl DataViewConfig {
    /// Defaults for `persistence_namespace`: no records, every layout, cards first.
    pub fn new(persistence_namespace: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            columns: Vec::new(),
            available_layouts: DEFAULT_LAYOUTS.to_vec(),
            default_layout: LayoutId::Cards,
            bulk_actions: Vec::new(),
            persistence_namespace: persistence_namespace.into(),
            renderers: Renderers::default(),
            enable_bulk_actions: true,
            enable_column_toggle: true,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }

    /// Set the records.
    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    /// Set the column schema.
    pub fn with_columns(mut self, columns: Vec<ColumnDefinition>) -> Self {
        self.columns = columns;
        self
    }

    /// Set the offered layouts and the fallback layout.
    pub fn with_layouts(mut self, available: Vec<LayoutId>, default_layout: LayoutId) -> Self {
        self.available_layouts = available;
        self.default_layout = default_layout;
        self
    }

    /// Set the bulk actions.
    pub fn with_bulk_actions(mut self, actions: Vec<BulkAction>) -> Self {
        self.bulk_actions = actions;
        self
    }

    /// Set custom item renderers.
    pub fn with_renderers(mut self, renderers: Renderers) -> Self {
        self.renderers = renderers;
        self
    }

    /// Enable or disable selection and bulk actions.
    pub fn with_bulk_actions_enabled(mut self, enabled: bool) -> Self {
        self.enable_bulk_actions = enabled;
        self
    }

    /// Enable or disable the column menu.
    pub fn with_column_toggle_enabled(mut self, enabled: bool) -> Self {
        self.enable_column_toggle = enabled;
        self
    }

    /// Override the no-data text.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }
}

/// View state for one page of records, backed by a preference store.
pub struct DataView<S: PreferenceStore> {
    store: S,
    keys: PreferenceKeys,
    records: Vec<Record>,
    columns: Vec<ColumnDefinition>,
    view_modes: ViewModeToggle,
    active_layout: LayoutId,
    visibility: BTreeMap<LayoutId, ColumnVisibilityToggle>,
    selection: SelectionSet,
    bulk_actions: Vec<BulkAction>,
    bulk_bar: BulkActionBar,
    renderers: Renderers,
    enable_bulk_actions: bool,
    enable_column_toggle: bool,
    empty_message: String,
    loading: bool,
    callbacks: Box<dyn ViewCallbacks>,
}

impl<S: PreferenceStore> DataView<S> {
    /// Build the view and load saved preferences from `store`.
    ///
    /// Never fails: unreadable or corrupt preferences fall back to
    /// `default_layout` and the schema's default-visible columns.
    pub fn initialize(config: DataViewConfig, store: S) -> Self {
        let keys = PreferenceKeys::new(config.persistence_namespace);

        let available = if config.available_layouts.is_empty() {
            vec![config.default_layout]
        } else {
            config.available_layouts
        };
        let view_modes = ViewModeToggle::new(&available);

        let fallback = if view_modes.contains(config.default_layout) {
            config.default_layout
        } else {
            view_modes
                .options()
                .first()
                .copied()
                .unwrap_or(config.default_layout)
        };
        let active_layout = match preferences::load_layout(&store, &keys) {
            Some(saved) if view_modes.contains(saved) => saved,
            Some(saved) => {
                debug!(layout = %saved, "Saved layout is not offered, using default");
                fallback
            }
            None => fallback,
        };

        let visibility = view_modes
            .options()
            .iter()
            .map(|&layout| {
                (
                    layout,
                    ColumnVisibilityToggle::load(layout, &keys, &config.columns, &store),
                )
            })
            .collect();

        trace!(
            namespace = keys.namespace(),
            layout = %active_layout,
            records = config.records.len(),
            columns = config.columns.len(),
            "Data view initialized"
        );

        Self {
            store,
            keys,
            records: config.records,
            columns: config.columns,
            view_modes,
            active_layout,
            visibility,
            selection: SelectionSet::new(),
            bulk_actions: config.bulk_actions,
            bulk_bar: BulkActionBar::new(),
            renderers: config.renderers,
            enable_bulk_actions: config.enable_bulk_actions,
            enable_column_toggle: config.enable_column_toggle,
            empty_message: config.empty_message,
            loading: false,
            callbacks: Box::new(NoopCallbacks),
        }
    }

    /// Install record and selection callbacks.
    pub fn with_callbacks(mut self, callbacks: impl ViewCallbacks + 'static) -> Self {
        self.callbacks = Box::new(callbacks);
        self
    }

    // ===== Accessors =====

    /// Layout currently shown.
    pub fn active_layout(&self) -> LayoutId {
        self.active_layout
    }

    /// Offered layouts in canonical order.
    pub fn available_layouts(&self) -> &[LayoutId] {
        self.view_modes.options()
    }

    /// Layout switcher state.
    pub fn view_modes(&self) -> &ViewModeToggle {
        &self.view_modes
    }

    /// Current records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Current column schema.
    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Current selection.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Configured bulk actions.
    pub fn bulk_actions(&self) -> &[BulkAction] {
        &self.bulk_actions
    }

    /// Bulk bar menu and confirmation state.
    pub fn bulk_bar(&self) -> &BulkActionBar {
        &self.bulk_bar
    }

    /// Whether the body shows a loading indicator.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether selection and bulk actions are on.
    pub fn bulk_actions_enabled(&self) -> bool {
        self.enable_bulk_actions
    }

    /// Whether the column menu is offered.
    pub fn column_toggle_enabled(&self) -> bool {
        self.enable_column_toggle
    }

    /// Visibility state of `layout`, if it is offered.
    pub fn visibility(&self, layout: LayoutId) -> Option<&ColumnVisibilityToggle> {
        self.visibility.get(&layout)
    }

    /// Visible column keys of `layout` in schema order.
    pub fn visible_columns(&self, layout: LayoutId) -> Vec<&ColumnKey> {
        self.visibility
            .get(&layout)
            .map(|v| v.resolve(&self.columns).into_iter().map(|c| c.key()).collect())
            .unwrap_or_default()
    }

    /// Backing preference store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Backing preference store, mutably.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Give back the store.
    pub fn into_store(self) -> S {
        self.store
    }

    // ===== Layout =====

    /// Activate `layout`. Unavailable layouts are ignored.
    ///
    /// Any available request clears the selection and cancels a pending
    /// confirmation. Only a real change persists the layout.
    pub fn switch_layout(&mut self, layout: LayoutId) {
        if !self.view_modes.contains(layout) {
            debug!(requested = %layout, "Ignoring switch to unavailable layout");
            return;
        }
        self.bulk_bar.reset();
        if !self.selection.is_empty() {
            self.selection.clear();
            self.notify_selection();
        }
        let Some(next) = self.view_modes.select(self.active_layout, layout) else {
            trace!(layout = %layout, "Layout already active");
            return;
        };
        trace!(from = %self.active_layout, to = %next, "Switching layout");
        self.active_layout = next;
        preferences::save_layout(&mut self.store, &self.keys, next);
    }

    /// Switch to the next layout, wrapping.
    pub fn next_layout(&mut self) {
        if let Some(next) = self.view_modes.next(self.active_layout) {
            self.switch_layout(next);
        }
    }

    /// Switch to the previous layout, wrapping.
    pub fn prev_layout(&mut self) {
        if let Some(prev) = self.view_modes.prev(self.active_layout) {
            self.switch_layout(prev);
        }
    }

    // ===== Columns =====

    /// Replace the visible set of `layout`. Unknown keys are dropped.
    pub fn set_column_visibility<'k>(
        &mut self,
        layout: LayoutId,
        requested: impl IntoIterator<Item = &'k str>,
    ) {
        let toggle = visibility_entry(
            &mut self.visibility,
            layout,
            &self.keys,
            &self.columns,
            &self.store,
        );
        toggle.replace(requested, &self.columns, &self.keys, &mut self.store);
    }

    /// Flip one column of the active layout.
    pub fn toggle_column(&mut self, key: &ColumnKey) {
        let toggle = visibility_entry(
            &mut self.visibility,
            self.active_layout,
            &self.keys,
            &self.columns,
            &self.store,
        );
        toggle.toggle_column(key, &self.columns, &self.keys, &mut self.store);
    }

    /// Show all columns of the active layout, or hide all if all are shown.
    pub fn toggle_all_columns(&mut self) {
        let toggle = visibility_entry(
            &mut self.visibility,
            self.active_layout,
            &self.keys,
            &self.columns,
            &self.store,
        );
        toggle.toggle_all(&self.columns, &self.keys, &mut self.store);
    }

    /// Return the active layout to its default columns.
    pub fn reset_columns(&mut self) {
        let toggle = visibility_entry(
            &mut self.visibility,
            self.active_layout,
            &self.keys,
            &self.columns,
            &self.store,
        );
        toggle.reset_to_default(&self.columns, &self.keys, &mut self.store);
    }

    /// Install a new schema, adapting every layout's visible set to it.
    ///
    /// Each set keeps its still-valid keys. A set left empty gets the new
    /// schema's defaults. Every result is persisted.
    pub fn reconcile_columns_on_schema_change(&mut self, columns: Vec<ColumnDefinition>) {
        self.columns = columns;
        for toggle in self.visibility.values_mut() {
            toggle.reconcile(&self.columns, &self.keys, &mut self.store);
        }
        trace!(columns = self.columns.len(), "Reconciled columns with new schema");
    }

    // ===== Selection =====

    /// Select exactly the current records.
    pub fn select_all(&mut self) {
        self.selection.select_all(&self.records);
        self.notify_selection();
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.notify_selection();
    }

    /// Select or deselect one record.
    pub fn toggle_item(&mut self, id: &RecordId, selected: bool) {
        self.selection.toggle(id, selected);
        self.notify_selection();
    }

    fn notify_selection(&self) {
        self.callbacks.on_selection_change(&self.selection.ids());
    }

    // ===== Bulk actions =====

    /// Run `key` on the selection, or park it awaiting confirmation.
    pub fn invoke_bulk_action(&mut self, key: &str) -> BulkOutcome {
        if !self.enable_bulk_actions {
            debug!(action = key, "Bulk actions are disabled");
            return BulkOutcome::Ignored;
        }
        self.bulk_bar.invoke(&self.bulk_actions, key, &self.selection)
    }

    /// Run the pending action on the current selection.
    pub fn confirm_bulk_action(&mut self) -> BulkOutcome {
        self.bulk_bar.confirm(&self.bulk_actions, &self.selection)
    }

    /// Drop the pending action.
    pub fn cancel_bulk_action(&mut self) {
        self.bulk_bar.cancel();
    }

    /// Open or close the overflow menu.
    pub fn toggle_overflow(&mut self) {
        if BulkActionBar::is_visible(&self.selection) {
            self.bulk_bar.toggle_overflow();
        }
    }

    // ===== Data =====

    /// Replace the record set. The selection is kept as-is.
    pub fn set_records(&mut self, records: Vec<Record>) {
        trace!(count = records.len(), "Replacing records");
        self.records = records;
    }

    /// Show or hide the loading indicator.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Look up a record by id.
    pub fn record(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Report a click on the record.
    pub fn item_click(&self, id: &RecordId) {
        match self.record(id) {
            Some(record) => self.callbacks.on_item_click(record),
            None => debug!(id = %id, "Click on unknown record"),
        }
    }

    /// Report an edit request for the record.
    pub fn edit(&self, id: &RecordId) {
        match self.record(id) {
            Some(record) => self.callbacks.on_edit(record),
            None => debug!(id = %id, "Edit of unknown record"),
        }
    }

    /// Report a view request for the record.
    pub fn view(&self, id: &RecordId) {
        match self.record(id) {
            Some(record) => self.callbacks.on_view(record),
            None => debug!(id = %id, "View of unknown record"),
        }
    }

    // ===== Rendering =====

    /// Pure snapshot of the current state as a view tree.
    pub fn render(&self) -> RenderedView {
        let fallback;
        let visibility = match self.visibility.get(&self.active_layout) {
            Some(v) => v,
            None => {
                fallback = ColumnVisibilityToggle::with_defaults(self.active_layout, &self.columns);
                &fallback
            }
        };
        render(&RenderInput {
            layout: self.active_layout,
            layouts: self.view_modes.entries(self.active_layout),
            records: &self.records,
            columns: &self.columns,
            visibility,
            selection: &self.selection,
            bulk_actions: &self.bulk_actions,
            bulk_bar: &self.bulk_bar,
            renderers: &self.renderers,
            enable_bulk_actions: self.enable_bulk_actions,
            enable_column_toggle: self.enable_column_toggle,
            loading: self.loading,
            empty_message: &self.empty_message,
        })
    }
}

/// Visibility of `layout`, loading it from the store on first use.
fn visibility_entry<'m, S: PreferenceStore>(
    visibility: &'m mut BTreeMap<LayoutId, ColumnVisibilityToggle>,
    layout: LayoutId,
    keys: &PreferenceKeys,
    columns: &[ColumnDefinition],
    store: &S,
) -> &'m mut ColumnVisibilityToggle {
    visibility
        .entry(layout)
        .or_insert_with(|| ColumnVisibilityToggle::load(layout, keys, columns, store))
}

#[cfg(test)]
#[path = "data_view_tests.rs"]
mod tests;
