//! Layout dimension constants for TUI rendering.

/// Height of the toolbar (layout tabs and counts), border included.
pub const TOOLBAR_HEIGHT: u16 = 3;

/// Height of the bulk action bar, border included.
pub const BULK_BAR_HEIGHT: u16 = 3;

/// Height of the status line with key hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Minimum width of one grid tile.
pub const GRID_TILE_WIDTH: u16 = 24;

/// Height of one grid tile: border, title and one field.
pub const GRID_TILE_HEIGHT: u16 = 4;

/// Width of the column menu popup.
pub const COLUMN_MENU_WIDTH: u16 = 36;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the confirmation dialog.
pub const CONFIRM_POPUP_WIDTH_PERCENT: u16 = 50;

/// Height of the confirmation dialog, border included.
pub const CONFIRM_POPUP_HEIGHT: u16 = 7;
