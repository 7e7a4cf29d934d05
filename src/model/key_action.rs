//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Several actions are context sensitive: inside the column menu,
/// `ToggleSelect` toggles the highlighted column instead of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Cursor
    /// Move the cursor up one item. Default: k/↑
    CursorUp,
    /// Move the cursor down one item. Default: j/↓
    CursorDown,
    /// Jump to the first item. Default: g/Home
    CursorTop,
    /// Jump to the last item. Default: G/End
    CursorBottom,

    // Layouts
    /// Switch to the next available layout. Default: Tab
    NextLayout,
    /// Switch to the previous available layout. Default: Shift+Tab
    PrevLayout,

    // Selection
    /// Toggle the record (or column, in the column menu) under the cursor. Default: Space
    ToggleSelect,
    /// Select all records, or clear when all are selected. Default: a
    ToggleSelectAll,
    /// Clear the selection. Default: x
    ClearSelection,

    // Column visibility
    /// Open or close the column menu for the active layout. Default: c
    ColumnMenu,
    /// Reset the active layout's columns to their defaults. Default: r
    ResetColumns,

    // Bulk actions
    /// Invoke the n-th quick action (0-based). Default: 1-3
    QuickAction(usize),
    /// Open or close the overflow action menu. Default: m
    OverflowMenu,
    /// Confirm the pending bulk action. Default: y
    Confirm,
    /// Cancel the pending action or close the open menu. Default: n/Esc
    Cancel,

    // Record interaction
    /// Activate the record under the cursor (or the highlighted menu entry). Default: Enter
    Activate,
    /// Edit the record under the cursor. Default: e
    Edit,
    /// View the record under the cursor. Default: v
    View,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
