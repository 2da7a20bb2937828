//! qterm binary entry point
//!
//! No subcommand runs the interactive TUI; subcommands cover scripting
//! (`exec`), grammar inspection (`commands`), config management and shell
//! completion generation.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use qterm::Config;

/// Version string: package version plus git SHA and build date for dev
/// builds, clean version for `--features release` builds.
fn version() -> String {
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!(
            "{} ({} {})",
            env!("CARGO_PKG_VERSION"),
            &sha[..sha.len().min(7)],
            env!("QTERM_BUILD_DATE")
        ),
        None => format!("{} ({})", env!("CARGO_PKG_VERSION"), env!("QTERM_BUILD_DATE")),
    }
}

#[derive(Parser)]
#[command(
    name = "qterm",
    version = version(),
    about = "Cyberpunk-themed simulated terminal",
    long_about = "A simulated terminal with a fixed command grammar, a virtual \
                  filesystem and mock system tables. Run without arguments for \
                  the interactive TUI; type \"help\" inside it."
)]
struct Cli {
    /// Write tracing output to this file (filter via RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Override the configured theme (cyber, classic, ocean)
    #[arg(long, global = true)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run commands non-interactively and print the scrollback
    Exec {
        /// Lines to submit, in order
        #[arg(required = true)]
        lines: Vec<String>,
        /// Emit one JSON object per scrollback entry
        #[arg(long)]
        json: bool,
    },
    /// Print the simulated command grammar
    Commands,
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Create a default config file
    Init,
    /// Open the config file in $EDITOR
    Edit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(theme) = &cli.theme {
        config.theme = theme.clone();
    }

    match cli.command {
        None => qterm::tui::TerminalApp::new(&config)?.run(),
        Some(Command::Exec { lines, json }) => commands::exec::handle_exec(&lines, json, &config),
        Some(Command::Commands) => commands::grammar::handle_commands(&config),
        Some(Command::Config { action }) => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
            ConfigAction::Init => commands::config::handle_init(),
            ConfigAction::Edit => commands::config::handle_edit(),
        },
        Some(Command::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "qterm", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Install a file-backed tracing subscriber.
///
/// Defaults to `qterm=debug` when RUST_LOG is unset.
fn init_tracing(path: &PathBuf) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("qterm=debug")),
        )
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}
