//! qterm - cyberpunk-themed simulated terminal
//!
//! A faux-shell with a fixed command grammar, a hardcoded virtual
//! filesystem and mock system tables, rendered full-screen with simulated
//! per-command latency. Nothing is real: no file I/O from the grammar, no
//! processes, no network.
//!
//! # Architecture
//!
//! - [`shell`]: pure command resolution, mock-data profiles, virtual tree
//! - [`session`]: per-session state machine (scrollback, pending command)
//! - [`tui`]: the ratatui front end
//! - [`config`] / [`theme`]: presentation knobs
//!
//! # Usage
//!
//! ```
//! use qterm::session::delay::Immediate;
//! use qterm::session::Session;
//! use qterm::shell::Profile;
//! use std::time::Duration;
//!
//! let mut session = Session::new(Profile::cyber2070(), Box::new(Immediate), Duration::ZERO);
//! session.open();
//! session.poll(); // seed the welcome banner
//! session.submit("cd projects");
//! session.poll();
//! assert_eq!(session.current_path(), "/projects");
//! ```

pub mod config;
pub mod session;
pub mod shell;
pub mod theme;
pub mod tui;

pub use config::{Config, ConfigError};
pub use session::{Entry, Session, SubmitOutcome};
pub use shell::{Profile, Resolution, VirtualFs};
