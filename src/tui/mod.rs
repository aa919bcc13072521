//! Rich TUI interface using ratatui.
//!
//! This module provides the interactive assessment: an intro screen, one
//! screen per question, and a results dashboard.
//!
//! # Architecture
//!
//! The TUI is a thin shell over [`crate::session`]: the [`App`] holds an
//! immutable [`crate::session::Session`] value and key handling only
//! produces session events. All scoring happens inside the session
//! transition, never in the view code.

mod app;
mod events;
mod theme;
mod ui;

pub use app::App;
pub use events::{Event, EventHandler};
pub use theme::ColorScheme;
pub use ui::run_tui;
