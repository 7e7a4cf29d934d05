//! Front-end interaction state that the engine does not own.
//!
//! Cursor positions, open menus, and overlays. Nothing here is persisted.

/// Which surface receives navigation keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Record list or table.
    #[default]
    Body,
    /// Column visibility menu.
    ColumnMenu,
    /// Overflow actions menu.
    OverflowMenu,
}

/// Cursor, focus, and overlay state of the terminal front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Surface receiving navigation keys.
    pub focus: Focus,
    /// Index of the highlighted record.
    pub cursor: usize,
    /// Index of the highlighted entry in the open menu.
    pub menu_cursor: usize,
    /// Help overlay shown.
    pub help_visible: bool,
}

impl UiState {
    /// Body focus, cursors at the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the record cursor inside `len` items.
    pub fn clamp_cursor(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Focus a menu with its cursor on the first entry.
    pub fn open_menu(&mut self, focus: Focus) {
        self.focus = focus;
        self.menu_cursor = 0;
    }

    /// Return focus to the body.
    pub fn close_menu(&mut self) {
        self.focus = Focus::Body;
        self.menu_cursor = 0;
    }
}

/// Move `index` one step within `len` items without wrapping.
pub fn step(index: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        0
    } else if down {
        (index + 1).min(len - 1)
    } else {
        index.saturating_sub(1)
    }
}
