//! Command resolution for the simulated shell
//!
//! A fixed grammar resolved by exact match, with one prefix special case
//! (`cd <dir>`). The resolver is a pure function of the submitted line, the
//! current path, the mock-data profile and the wall clock; it never fails,
//! never touches the session and never performs I/O. Unknown input degrades
//! to a "command not found" entry.

use chrono::{DateTime, Local};
use tracing::debug;

use super::profile::Profile;
use super::vfs::VirtualFs;

/// What a resolved command asks the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Append these lines to the scrollback.
    Output(Vec<String>),
    /// Change the current path; the entry has no output lines.
    ChangeDir(String),
    /// Empty the scrollback without appending an entry.
    Clear,
    /// Ask the host to close the terminal without appending an entry.
    Close,
}

/// Normalize a submitted line: trim surrounding whitespace, lowercase.
pub fn normalize_input(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Resolutions that bypass the simulated latency window.
///
/// `clear`, `exit` and `esc` act on the session itself rather than producing
/// output, so they resolve synchronously at submit time.
pub fn immediate(input: &str) -> Option<Resolution> {
    match normalize_input(input).as_str() {
        "clear" => Some(Resolution::Clear),
        "exit" | "esc" => Some(Resolution::Close),
        _ => None,
    }
}

/// Resolve a submitted line against the grammar.
///
/// Returns `None` only for empty/whitespace input, which is a no-op by
/// contract. `now` feeds the one live command (`date`); everything else is
/// profile data reproduced verbatim.
pub fn resolve(
    input: &str,
    current_path: &str,
    profile: &Profile,
    vfs: &VirtualFs,
    now: DateTime<Local>,
) -> Option<Resolution> {
    let cmd = normalize_input(input);
    if cmd.is_empty() {
        return None;
    }
    debug!(command = %cmd, path = %current_path, "resolving command");

    let resolution = match cmd.as_str() {
        "help" => Resolution::Output(help_lines()),
        "ls" => Resolution::Output(list_dir(vfs, current_path, false)),
        "ls -a" => Resolution::Output(list_dir(vfs, current_path, true)),
        "pwd" => Resolution::Output(vec![current_path.to_string()]),
        "systeminfo" => Resolution::Output(system_info_lines(profile)),
        "whoami" => Resolution::Output(vec![profile.whoami.clone()]),
        "date" => Resolution::Output(vec![now.format("%a %b %e %H:%M:%S %Y").to_string()]),
        "uptime" => Resolution::Output(vec![format!(
            "System uptime: {}",
            profile.system_info.uptime
        )]),
        "ps" => Resolution::Output(profile.processes.clone()),
        "netstat" => Resolution::Output(profile.connections.clone()),
        "matrix" => Resolution::Output(profile.matrix.clone()),
        "quantum" => Resolution::Output(profile.quantum.clone()),
        "clear" => Resolution::Clear,
        "exit" | "esc" => Resolution::Close,
        _ => {
            if let Some(target) = cmd.strip_prefix("cd ") {
                change_dir(vfs, current_path, target.trim())
            } else {
                Resolution::Output(vec![
                    format!("Command not found: {}", input.trim()),
                    "Type \"help\" for available commands".to_string(),
                    String::new(),
                ])
            }
        }
    };
    Some(resolution)
}

/// The command/description pairs shown by `help` and `qterm commands`.
pub const GRAMMAR: &[(&str, &str)] = &[
    ("help", "Show this help message"),
    ("ls", "List directory contents"),
    ("ls -a", "List all files including hidden"),
    ("pwd", "Print working directory"),
    ("cd <dir>", "Change directory"),
    ("systeminfo", "Display system information"),
    ("whoami", "Display current user"),
    ("date", "Show current date and time"),
    ("uptime", "Show system uptime"),
    ("ps", "Show running processes"),
    ("netstat", "Show network connections"),
    ("matrix", "Enter the digital rain"),
    ("quantum", "Show quantum core status"),
    ("clear", "Clear terminal"),
    ("esc", "Close terminal"),
    ("exit", "Close terminal"),
];

fn help_lines() -> Vec<String> {
    let mut lines = vec!["Available commands:".to_string()];
    for (cmd, desc) in GRAMMAR {
        lines.push(format!("  {:<13} - {}", cmd, desc));
    }
    lines.push(String::new());
    lines
}

/// `ls` / `ls -a` at the current path.
///
/// An unknown current path cannot be reached through `cd`, but the grammar
/// still answers it with a themed refusal rather than an error.
fn list_dir(vfs: &VirtualFs, path: &str, all: bool) -> Vec<String> {
    match vfs.children(path) {
        Some(children) => {
            let mut lines = Vec::with_capacity(children.len() + 2);
            if all {
                lines.push(".".to_string());
                lines.push("..".to_string());
            }
            lines.extend(children.iter().cloned());
            lines
        }
        None => vec!["Permission denied".to_string()],
    }
}

/// `cd <target>`: path arithmetic plus an existence check.
///
/// `.` and `..` always succeed (the root is its own parent); any other target
/// must resolve to a known directory. Success produces no output lines.
fn change_dir(vfs: &VirtualFs, current: &str, target: &str) -> Resolution {
    let candidate = vfs.resolve(current, target);
    if target == "." || target == ".." || vfs.contains(&candidate) {
        Resolution::ChangeDir(candidate)
    } else {
        Resolution::Output(vec![format!(
            "cd: {}: No such file or directory",
            target
        )])
    }
}

fn system_info_lines(profile: &Profile) -> Vec<String> {
    let info = &profile.system_info;
    vec![
        "CYBER2070 System Information".to_string(),
        "============================".to_string(),
        format!("Operating System: {}", info.os),
        format!("Kernel: {}", info.kernel),
        format!("Processor: {}", info.cpu),
        format!("Memory: {}", info.memory),
        format!("Storage: {}", info.storage),
        format!("Network: {}", info.network),
        format!("Security: {}", info.security),
        format!("Uptime: {}", info.uptime),
        String::new(),
    ]
}
