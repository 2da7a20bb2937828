//! `qterm exec` - drive a session non-interactively
//!
//! Feeds each argument line into a fresh zero-delay session and prints the
//! resulting scrollback to stdout. Useful for scripting and for inspecting
//! the grammar without entering the TUI. `--json` emits one JSON object per
//! scrollback entry instead of the themed text rendering.

use std::time::Duration;

use anyhow::Result;

use qterm::session::delay::Immediate;
use qterm::session::{Entry, Session, SubmitOutcome};
use qterm::theme::Theme;
use qterm::Config;

/// Run `lines` through one session and print every scrollback entry.
pub fn handle_exec(lines: &[String], json: bool, config: &Config) -> Result<()> {
    let profile = config.load_profile()?;
    let mut session = Session::new(profile, Box::new(Immediate), Duration::ZERO);

    // Zero boot delay: the banner is the first entry.
    session.open();
    session.poll();

    for line in lines {
        match session.submit(line) {
            SubmitOutcome::CloseRequested => break,
            SubmitOutcome::Scheduled => {
                session.poll();
            }
            SubmitOutcome::Cleared | SubmitOutcome::Ignored => {}
        }
    }

    let theme = config.resolve_theme();
    let color = atty::is(atty::Stream::Stdout);
    for entry in session.scrollback() {
        print_entry(entry, session.current_path(), config, &theme, json, color)?;
    }
    Ok(())
}

fn print_entry(
    entry: &Entry,
    path: &str,
    config: &Config,
    theme: &Theme,
    json: bool,
    color: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(entry)?);
        return Ok(());
    }

    if !entry.command.is_empty() {
        let identity = format!("{}@{}", config.identity.user, config.identity.host);
        if color {
            println!(
                "{}{} $ {}",
                theme.prompt_text(&identity),
                theme.accent_text(&format!(":{}", path)),
                entry.command
            );
        } else {
            println!("{}:{} $ {}", identity, path, entry.command);
        }
    }
    for line in &entry.output {
        if color {
            println!("{}", theme.primary_text(line));
        } else {
            println!("{}", line);
        }
    }
    Ok(())
}
