//! TUI (Text User Interface) module for qterm
//!
//! Runs the simulated terminal full-screen using ratatui/crossterm:
//! - `app`: terminal lifecycle (raw mode, alternate screen, event polling)
//! - `terminal_app`: the interactive session view (input, blink, scrollback)
//! - `ui`: chrome rendering and layout helpers

pub mod app;
pub mod terminal_app;
pub mod ui;

pub use app::App;
pub use terminal_app::TerminalApp;
