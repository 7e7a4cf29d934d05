//! Record View (recview)
//!
//! Headless data-browsing engine: one record set shown in interchangeable
//! layouts, with persisted per-layout column visibility and a multi-select
//! bulk action workflow. A ratatui front end drives it from the terminal.
//!
//! The engine (`model`, `store`, `state`, `view_state`) is pure and
//! synchronous. The terminal, files and logging live in the shell
//! (`view`, `source`, `config`, `logging`).

pub mod actions;
pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod store;
pub mod view;
pub mod view_state;
