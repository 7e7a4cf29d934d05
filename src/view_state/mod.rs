//! Render output of the data view (pure).
//!
//! `render` turns the current engine state into a [`RenderedView`]: plain
//! data that a front end draws without consulting the engine again. Every
//! interactive element carries the id it acts on, so front ends report
//! intents back through `DataView` handlers rather than mutating anything.

pub mod cells;
pub mod render;
pub mod strategy;
pub mod table;

pub use render::{render, RenderInput};
pub use strategy::{strategy_for, ClassicRenderer, ItemRenderer, LayoutContext, Renderers};

use crate::model::{ActionKind, ColumnKey, LayoutId, RecordId};
use crate::state::{HeaderCheckbox, LayoutOption};

/// Complete render output for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    /// Active layout.
    pub layout: LayoutId,
    /// Controls above the body.
    pub toolbar: Toolbar,
    /// Content area.
    pub body: Body,
    /// Present only while records are selected and bulk actions are enabled.
    pub bulk_bar: Option<BulkBarView>,
    /// Dialog for an action awaiting confirmation.
    pub confirmation: Option<ConfirmationView>,
}

/// Controls above the body.
#[derive(Debug, Clone, PartialEq)]
pub struct Toolbar {
    /// Layout switcher entries in canonical order.
    pub layouts: Vec<LayoutOption>,
    /// `None` when the column menu is disabled or there is no schema.
    pub column_menu: Option<ColumnMenuView>,
    /// Records in the current set.
    pub record_count: usize,
    /// Selected ids that are in the current set.
    pub selected_count: usize,
}

/// Column visibility menu for the active layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMenuView {
    /// Layout the menu edits.
    pub layout: LayoutId,
    /// One entry per schema column, in schema order.
    pub entries: Vec<ColumnMenuEntry>,
    /// Columns currently shown.
    pub visible_count: usize,
    /// Columns in the schema.
    pub total_count: usize,
    /// Drives the show-all/hide-all label.
    pub all_visible: bool,
}

/// One checkbox row of the column menu.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMenuEntry {
    /// Column this entry toggles.
    pub key: ColumnKey,
    /// Header text.
    pub label: String,
    /// Help text.
    pub description: Option<String>,
    /// Checkbox state.
    pub visible: bool,
}

/// The per-layout content area.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Data is being fetched upstream.
    Loading,
    /// The record list is empty.
    NoData {
        /// Text shown in place of records.
        message: String,
    },
    /// Rows of cells.
    Table(TableBody),
    /// Card per record.
    Cards(Vec<ItemView>),
    /// Row per record.
    List(Vec<ItemView>),
    /// Tile per record.
    Grid(Vec<ItemView>),
    /// Items produced by the caller's classic renderer.
    Classic(Vec<ItemView>),
}

impl Body {
    /// Ids of the records shown, in display order.
    pub fn record_ids(&self) -> Vec<&RecordId> {
        match self {
            Body::Loading | Body::NoData { .. } => Vec::new(),
            Body::Table(table) => table.rows.iter().map(|r| &r.id).collect(),
            Body::Cards(items) | Body::List(items) | Body::Grid(items) | Body::Classic(items) => {
                items.iter().map(|i| &i.id).collect()
            }
        }
    }
}

/// Table layout content.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBody {
    /// Leading select column header, present when bulk actions are enabled.
    pub select_header: Option<HeaderCheckbox>,
    /// Visible column headers.
    pub headers: Vec<HeaderCell>,
    /// One row per record.
    pub rows: Vec<TableRow>,
}

/// Column header of the table layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column or raw field key.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Whether the header is sortable.
    pub sortable: bool,
}

/// One record in the table layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Record shown.
    pub id: RecordId,
    /// `None` when rows carry no checkbox.
    pub selected: Option<bool>,
    /// Cell text aligned with the headers.
    pub cells: Vec<String>,
}

/// One record in a cards, list, grid, or classic layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    /// Record shown.
    pub id: RecordId,
    /// `None` when items carry no checkbox.
    pub selected: Option<bool>,
    /// What the item displays.
    pub content: ItemContent,
}

/// Content of a non-table item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemContent {
    /// Title plus labelled fields.
    Fields {
        /// Headline text.
        title: String,
        /// Fields under the title, capped per layout.
        fields: Vec<Field>,
    },
    /// Lines from a caller-supplied renderer.
    Custom(Vec<String>),
}

/// Labelled value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Label text.
    pub label: String,
    /// Value text.
    pub value: String,
}

/// Bulk action bar for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkBarView {
    /// Selected ids.
    pub selected_count: usize,
    /// Records in the current set.
    pub total_count: usize,
    /// Select-all checkbox state.
    pub header: HeaderCheckbox,
    /// Inline buttons.
    pub quick: Vec<ActionButton>,
    /// Buttons collapsed into the overflow menu.
    pub overflow: Vec<ActionButton>,
    /// Whether the overflow menu is open.
    pub overflow_open: bool,
}

/// One bulk action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    /// Action key to invoke.
    pub key: String,
    /// Button text.
    pub label: String,
    /// Action category.
    pub kind: ActionKind,
    /// Styled as dangerous.
    pub destructive: bool,
}

/// Confirmation dialog for a parked action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    /// Action label.
    pub title: String,
    /// Prompt naming the current selection size.
    pub message: String,
    /// Confirm button text.
    pub confirm_label: String,
    /// Cancel button text.
    pub cancel_label: String,
    /// Confirm button styled as dangerous.
    pub destructive: bool,
}
