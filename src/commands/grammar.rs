//! `qterm commands` - print the simulated grammar

use anyhow::Result;

use qterm::shell::GRAMMAR;
use qterm::Config;

/// Print the command table, colored when stdout is a tty.
pub fn handle_commands(config: &Config) -> Result<()> {
    let theme = config.resolve_theme();
    let color = atty::is(atty::Stream::Stdout);

    for (cmd, desc) in GRAMMAR {
        if color {
            println!("{} {}", theme.accent_text(&format!("{:<13}", cmd)), desc);
        } else {
            println!("{:<13} {}", cmd, desc);
        }
    }
    Ok(())
}
