//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions. Provides both ratatui
//! styles (for the TUI) and ANSI escape codes (for `qterm exec` output).

use ratatui::style::{Color, Modifier, Style};

/// Color palette for the simulated terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (command output)
    pub text_primary: Color,
    /// Secondary/dimmed text color (chrome, hints)
    pub text_secondary: Color,
    /// Accent color (path segment, borders)
    pub accent: Color,
    /// Prompt identity color (`user@host`)
    pub prompt: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::cyber()
    }
}

impl Theme {
    /// Neon cyberpunk palette: green prompt, cyan path, gray output.
    pub fn cyber() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Cyan,
            prompt: Color::LightGreen,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Classic terminal theme - white text, yellow accent.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            prompt: Color::Green,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            prompt: Color::LightBlue,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Resolve a theme by config name; unknown names fall back to cyber.
    pub fn by_name(name: &str) -> Self {
        match name {
            "classic" => Self::classic(),
            "ocean" => Self::ocean(),
            _ => Self::cyber(),
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented text (the path in the prompt).
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for the prompt identity.
    pub fn prompt_style(&self) -> Style {
        Style::default().fg(self.prompt).add_modifier(Modifier::BOLD)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    // ANSI color helpers for CLI output

    /// Format text with the prompt color (for CLI output).
    pub fn prompt_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.prompt), text, ANSI_RESET)
    }

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ANSI_RESET)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            color_to_ansi(self.text_secondary),
            text,
            ANSI_RESET
        )
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colors fall back to no color
        _ => "",
    }
}
