//! Terminal session state machine
//!
//! A [`Session`] owns everything that exists only while the terminal is
//! open: the scrollback, the current virtual path and the single in-flight
//! command. The host (TUI app or the `exec` driver) submits lines and polls
//! for due resolutions; nothing here survives the session.
//!
//! Concurrency model: exactly one command may be in flight. A submission
//! while one is pending is dropped, not queued. `clear`, `exit` and `esc`
//! bypass the latency window and resolve at submit time.

pub mod delay;

use std::time::{Duration, Instant};

use chrono::Local;
use serde::Serialize;
use tracing::debug;

use crate::shell::{dispatch, Profile, Resolution, VirtualFs, ROOT};
use delay::DelaySource;

/// One scrollback record: the command as typed and the lines it produced.
///
/// The seeded welcome banner is an entry with an empty command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub command: String,
    pub output: Vec<String>,
    pub timestamp: String,
}

/// What `submit` decided to do with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Dropped: empty line, or a command is already in flight.
    Ignored,
    /// Accepted; the result lands in the scrollback once the delay elapses.
    Scheduled,
    /// `clear` ran synchronously; the scrollback is now empty.
    Cleared,
    /// `exit`/`esc`: the host should close the terminal. Emitted exactly
    /// once per close command.
    CloseRequested,
}

/// Something waiting on the simulated clock.
#[derive(Debug)]
enum Pending {
    /// Boot banner seeding after `open`.
    Boot { deadline: Instant },
    /// A submitted command waiting out its latency window.
    Command { raw: String, deadline: Instant },
}

/// Live state of one simulated terminal.
pub struct Session {
    profile: Profile,
    vfs: VirtualFs,
    scrollback: Vec<Entry>,
    current_path: String,
    pending: Option<Pending>,
    booted: bool,
    delay: Box<dyn DelaySource>,
    boot_delay: Duration,
}

impl Session {
    /// Create a fresh session at the root of the profile's tree.
    pub fn new(profile: Profile, delay: Box<dyn DelaySource>, boot_delay: Duration) -> Self {
        let vfs = profile.vfs();
        Self {
            profile,
            vfs,
            scrollback: Vec::new(),
            current_path: ROOT.to_string(),
            pending: None,
            booted: false,
            delay,
            boot_delay,
        }
    }

    /// Seed the welcome banner after the boot delay.
    ///
    /// Idempotent: once a session has booted, reopening it never reseeds,
    /// even after `clear` empties the scrollback.
    pub fn open(&mut self) {
        if self.booted || self.pending.is_some() {
            return;
        }
        debug!(boot_ms = self.boot_delay.as_millis() as u64, "session opening");
        self.pending = Some(Pending::Boot {
            deadline: Instant::now() + self.boot_delay,
        });
    }

    /// Submit one line of input.
    ///
    /// Empty lines and submissions while a command is in flight are dropped
    /// silently. `clear`/`exit`/`esc` resolve here; everything else is
    /// scheduled behind the injected delay and lands on a later [`poll`].
    ///
    /// [`poll`]: Session::poll
    pub fn submit(&mut self, line: &str) -> SubmitOutcome {
        if self.pending.is_some() {
            return SubmitOutcome::Ignored;
        }
        let raw = line.trim();
        if raw.is_empty() {
            return SubmitOutcome::Ignored;
        }

        match dispatch::immediate(raw) {
            Some(Resolution::Clear) => {
                debug!("scrollback cleared");
                self.scrollback.clear();
                SubmitOutcome::Cleared
            }
            Some(Resolution::Close) => {
                debug!("close requested");
                SubmitOutcome::CloseRequested
            }
            _ => {
                let deadline = Instant::now() + self.delay.next_delay();
                self.pending = Some(Pending::Command {
                    raw: raw.to_string(),
                    deadline,
                });
                SubmitOutcome::Scheduled
            }
        }
    }

    /// Resolve the pending item if its deadline has passed.
    ///
    /// Returns true when the scrollback (or path) changed, so the host knows
    /// to redraw and pin the view to the latest entry.
    pub fn poll(&mut self) -> bool {
        let due = match &self.pending {
            Some(Pending::Boot { deadline }) | Some(Pending::Command { deadline, .. }) => {
                Instant::now() >= *deadline
            }
            None => return false,
        };
        if !due {
            return false;
        }

        match self.pending.take() {
            Some(Pending::Boot { .. }) => {
                self.booted = true;
                self.scrollback.push(Entry {
                    command: String::new(),
                    output: self.profile.banner.clone(),
                    timestamp: timestamp(),
                });
                true
            }
            Some(Pending::Command { raw, .. }) => {
                self.resolve_command(&raw);
                true
            }
            None => false,
        }
    }

    /// True while a command (or the boot banner) is in flight.
    pub fn is_processing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn scrollback(&self) -> &[Entry] {
        &self.scrollback
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Dispatch a due command and append its scrollback entry.
    fn resolve_command(&mut self, raw: &str) {
        let resolution =
            dispatch::resolve(raw, &self.current_path, &self.profile, &self.vfs, Local::now());
        match resolution {
            Some(Resolution::Output(output)) => self.push_entry(raw, output),
            Some(Resolution::ChangeDir(path)) => {
                debug!(from = %self.current_path, to = %path, "path changed");
                self.current_path = path;
                self.push_entry(raw, Vec::new());
            }
            // clear/exit/esc are intercepted at submit time; empty input
            // never schedules. Nothing to do for either here.
            Some(Resolution::Clear) | Some(Resolution::Close) | None => {}
        }
    }

    fn push_entry(&mut self, command: &str, output: Vec<String>) {
        self.scrollback.push(Entry {
            command: command.to_string(),
            output,
            timestamp: timestamp(),
        });
    }
}

/// Wall-clock timestamp in the scrollback's HH:MM:SS format.
fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
