//! Base terminal handling for TUI applications
//!
//! Owns raw mode, the alternate screen and event polling. Restores the
//! real terminal on drop, so a panic in a view does not leave the user's
//! shell in raw mode.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

/// Wrapper around the real terminal for full-screen apps.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
}

impl App {
    /// Enter raw mode and the alternate screen.
    ///
    /// `tick_rate` bounds how long [`next_event`] blocks, which is also the
    /// cadence of cursor blink and pending-command polling.
    ///
    /// [`next_event`]: App::next_event
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let terminal =
            Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")?;
        Ok(Self {
            terminal,
            tick_rate,
        })
    }

    /// Draw one frame.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Wait up to one tick for an input event.
    ///
    /// Returns `None` on a tick with no input, which keeps animations and
    /// pending-command resolution moving.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if event::poll(self.tick_rate)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Current terminal size as (columns, rows).
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Best effort: restoring the terminal must not panic in drop.
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
