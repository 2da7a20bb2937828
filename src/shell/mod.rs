//! Simulated shell: grammar, mock data and virtual filesystem
//!
//! This module owns everything between a submitted line of text and the
//! lines that come back:
//! - `dispatch`: pure command resolution against the fixed grammar
//! - `profile`: the mock-data tables every command prints from
//! - `vfs`: the static directory tree `cd`/`ls` navigate

pub mod dispatch;
pub mod profile;
pub mod vfs;

pub use dispatch::{immediate, normalize_input, resolve, Resolution, GRAMMAR};
pub use profile::{Profile, ProfileError, SystemInfo};
pub use vfs::{normalize, VirtualFs, ROOT};
