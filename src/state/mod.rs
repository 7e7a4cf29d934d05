//! View state machine (pure apart from preference writes).
//!
//! All transitions are testable without a terminal.

pub mod bulk_action_bar;
pub mod callbacks;
pub mod column_visibility;
pub mod data_view;
pub mod key_handler;
pub mod selection;
pub mod ui_state;
pub mod view_mode;

pub use bulk_action_bar::{
    BulkActionBar, BulkOutcome, ConfirmationState, PendingConfirmation, QUICK_ACTION_LIMIT,
};
pub use callbacks::{NoopCallbacks, ViewCallbacks};
pub use column_visibility::ColumnVisibilityToggle;
pub use data_view::{DataView, DataViewConfig, DEFAULT_EMPTY_MESSAGE, DEFAULT_LAYOUTS};
pub use key_handler::{handle_key_action, KeyOutcome};
pub use selection::{HeaderCheckbox, SelectionSet};
pub use ui_state::{Focus, UiState};
pub use view_mode::{LayoutOption, ViewModeToggle};
