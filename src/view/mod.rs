//! TUI rendering and terminal management (impure shell)

pub mod body;
pub mod bulk_bar;
pub mod column_menu;
pub mod constants;
mod help;
pub mod status;
pub mod styles;
pub mod toolbar;

pub use help::render_help_overlay;
pub use status::{StatusCallbacks, StatusLine};
pub use styles::{ColorConfig, Palette};

use crate::actions::ActionOutbox;
use crate::config::KeyBindings;
use crate::state::{handle_key_action, DataView, Focus, KeyOutcome, UiState};
use crate::store::PreferenceStore;
use crate::view_state::RenderedView;
use constants::{BULK_BAR_HEIGHT, STATUS_BAR_HEIGHT, TOOLBAR_HEIGHT};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

// ===== Drawing =====

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Regions {
    toolbar: Rect,
    body: Rect,
    bulk_bar: Option<Rect>,
    status: Rect,
}

fn split(area: Rect, with_bulk_bar: bool) -> Regions {
    let bar_height = if with_bulk_bar { BULK_BAR_HEIGHT } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(TOOLBAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(bar_height),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .split(area);
    Regions {
        toolbar: chunks[0],
        body: chunks[1],
        bulk_bar: with_bulk_bar.then_some(chunks[2]),
        status: chunks[3],
    }
}

/// Draw a rendered view plus the front end's own overlays.
pub fn draw(frame: &mut Frame, view: &RenderedView, ui: &UiState, status: &str, palette: &Palette) {
    let regions = split(frame.area(), view.bulk_bar.is_some());

    toolbar::render_toolbar(frame, regions.toolbar, &view.toolbar, palette);
    body::render_body(frame, regions.body, &view.body, ui.cursor, palette);
    if let (Some(bar), Some(area)) = (&view.bulk_bar, regions.bulk_bar) {
        bulk_bar::render_bulk_bar(frame, area, bar, palette);
    }
    render_status(frame, regions.status, ui.focus, status, palette);

    match ui.focus {
        Focus::ColumnMenu => {
            if let Some(menu) = &view.toolbar.column_menu {
                column_menu::render_column_menu(frame, regions.body, menu, ui.menu_cursor, palette);
            }
        }
        Focus::OverflowMenu => {
            if let (Some(bar), Some(area)) = (&view.bulk_bar, regions.bulk_bar) {
                if bar.overflow_open {
                    bulk_bar::render_overflow_menu(frame, area, bar, ui.menu_cursor, palette);
                }
            }
        }
        Focus::Body => {}
    }
    if let Some(dialog) = &view.confirmation {
        bulk_bar::render_confirmation(frame, dialog, palette);
    }
    if ui.help_visible {
        render_help_overlay(frame, palette);
    }
}

fn render_status(frame: &mut Frame, area: Rect, focus: Focus, message: &str, palette: &Palette) {
    let line = if message.is_empty() {
        let hints: &[(&str, &str)] = match focus {
            Focus::Body => &[
                ("Tab", "layout"),
                ("Space", "select"),
                ("c", "columns"),
                ("?", "help"),
                ("q", "quit"),
            ],
            Focus::ColumnMenu => &[("Space", "toggle"), ("a", "all"), ("r", "reset"), ("Esc", "close")],
            Focus::OverflowMenu => &[("Enter", "run"), ("Esc", "close")],
        };
        Line::from(
            hints
                .iter()
                .flat_map(|(key, what)| {
                    [
                        Span::styled(format!(" {key} "), palette.key_hint),
                        Span::styled(format!("{what} "), palette.muted),
                    ]
                })
                .collect::<Vec<_>>(),
        )
    } else {
        Line::from(Span::raw(format!(" {message}")))
    };
    frame.render_widget(Paragraph::new(line), area);
}

// ===== Application =====

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B, S>
where
    B: Backend,
    S: PreferenceStore,
{
    terminal: Terminal<B>,
    view: DataView<S>,
    ui: UiState,
    key_bindings: KeyBindings,
    palette: Palette,
    outbox: ActionOutbox,
    status: StatusLine,
}

impl<B, S> TuiApp<B, S>
where
    B: Backend,
    S: PreferenceStore,
{
    /// Wrap a terminal and a data view with default key bindings.
    pub fn new(
        terminal: Terminal<B>,
        view: DataView<S>,
        outbox: ActionOutbox,
        status: StatusLine,
        palette: Palette,
    ) -> Self {
        Self {
            terminal,
            view,
            ui: UiState::new(),
            key_bindings: KeyBindings::default(),
            palette,
            outbox,
            status,
        }
    }

    /// The data view being driven.
    pub fn view(&self) -> &DataView<S> {
        &self.view
    }

    /// Front-end focus and cursor state.
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// The underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Give back the data view.
    pub fn into_view(self) -> DataView<S> {
        self.view
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C)
    ///
    /// # Errors
    ///
    /// Returns [`TuiError::Io`] if polling, reading, or drawing fails.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;
        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    self.draw()?;
                }
                _ => {}
            }
        }
    }

    /// Render the current state into one frame.
    ///
    /// # Errors
    ///
    /// Returns [`TuiError::Io`] if the backend fails to draw.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let rendered = self.view.render();
        let status = self.status.get();
        let ui = &self.ui;
        let palette = &self.palette;
        self.terminal
            .draw(|frame| draw(frame, &rendered, ui, &status, palette))?;
        Ok(())
    }

    /// Handle a key press. Returns `true` when the user quits.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        self.status.clear();
        let Some(action) = self
            .key_bindings
            .get(KeyEvent::new(key.code, key.modifiers))
        else {
            debug!(code = ?key.code, "Unbound key");
            return false;
        };

        if handle_key_action(&mut self.view, &mut self.ui, action) == KeyOutcome::Quit {
            return true;
        }
        self.apply_requests();
        self.ui.clamp_cursor(self.view.records().len());
        false
    }

    /// Apply whatever the bulk action handlers queued.
    fn apply_requests(&mut self) {
        for request in self.outbox.drain() {
            let count = request.ids.len();
            match request.apply(self.view.records()) {
                Some(remaining) => {
                    info!(action = %request.key, count, "Removed records");
                    self.view.set_records(remaining);
                    self.view.clear_selection();
                    self.status
                        .set(format!("{}: removed {count} records", request.key));
                }
                None => {
                    info!(action = %request.key, count, "Bulk action ran");
                    self.status.set(format!("{}: {count} records", request.key));
                }
            }
        }
    }
}

/// Set up the terminal, run the event loop, and restore the terminal.
///
/// Note: Logging must be initialized by caller before calling this function.
///
/// # Errors
///
/// Returns [`TuiError::Io`] if terminal setup, the event loop, or terminal
/// restore fails.
pub fn run<S: PreferenceStore>(
    view: DataView<S>,
    outbox: ActionOutbox,
    status: StatusLine,
    palette: Palette,
) -> Result<(), TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let terminal: Terminal<CrosstermBackend<Stdout>> = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = TuiApp::new(terminal, view, outbox, status, palette);
    let result = app.run();

    // Always restore terminal state
    settle(result, restore_terminal())
}

/// Combine the loop result with the restore result.
///
/// A restore failure wins, but a loop error is logged first so it is not
/// lost.
fn settle(result: Result<(), TuiError>, restored: Result<(), TuiError>) -> Result<(), TuiError> {
    if let Err(restore_err) = restored {
        if let Err(loop_err) = &result {
            error!(error = %loop_err, "Event loop failed before terminal restore failed");
        }
        return Err(restore_err);
    }
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
