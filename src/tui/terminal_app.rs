//! Interactive terminal session view
//!
//! Renders the scrollback and input line of a [`Session`] and feeds it
//! keystrokes. The view pins itself to the latest entry after every update
//! (PageUp/PageDown scroll back through history until the next update), and
//! the input line always has focus while the app runs, which satisfies the
//! session's focus contract structurally.

use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Local;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::info;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::app::App;
use super::ui;
use crate::config::{Config, Identity};
use crate::session::{Entry, Session, SubmitOutcome};
use crate::theme::Theme;

/// Cursor blink half-period.
const BLINK_INTERVAL: Duration = Duration::from_millis(500);
/// Event-poll tick; also bounds pending-command resolution latency.
const TICK_RATE: Duration = Duration::from_millis(50);
/// Lines jumped per PageUp/PageDown.
const SCROLL_PAGE: usize = 5;

const FOOTER_LEFT: &str = "NEURAL_INTERFACE_ACTIVE";
const FOOTER_CENTER: &str = "QUANTUM_ENCRYPTION_ENABLED";

/// Full-screen view over one terminal session.
pub struct TerminalApp {
    app: App,
    session: Session,
    theme: Theme,
    identity: Identity,
    input: String,
    cursor_visible: bool,
    last_blink: Instant,
    blink_phase: usize,
    /// Lines scrolled back from the bottom; 0 means pinned to the latest.
    scroll_back: usize,
    should_quit: bool,
}

impl TerminalApp {
    /// Build the view from config: profile, theme, latency window.
    pub fn new(config: &Config) -> Result<Self> {
        let profile = config.load_profile()?;
        let session = Session::new(
            profile,
            Box::new(config.delay_source()),
            config.boot_delay(),
        );
        let app = App::new(TICK_RATE)?;
        Ok(Self {
            app,
            session,
            theme: config.resolve_theme(),
            identity: config.identity.clone(),
            input: String::new(),
            cursor_visible: true,
            last_blink: Instant::now(),
            blink_phase: 0,
            scroll_back: 0,
            should_quit: false,
        })
    }

    /// Run until the user closes the terminal (`exit`, `esc`, Esc, Ctrl+C).
    pub fn run(mut self) -> Result<()> {
        info!("terminal session opened");
        self.session.open();
        while !self.should_quit {
            if self.session.poll() {
                // Auto-scroll to the latest entry after every update.
                self.scroll_back = 0;
            }
            self.tick_blink();
            self.draw()?;
            if let Some(Event::Key(key)) = self.app.next_event()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        info!("terminal session closed");
        Ok(())
    }

    fn tick_blink(&mut self) {
        if self.last_blink.elapsed() >= BLINK_INTERVAL {
            self.cursor_visible = !self.cursor_visible;
            self.blink_phase = self.blink_phase.wrapping_add(1);
            self.last_blink = Instant::now();
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace if !self.session.is_processing() => {
                self.input.pop();
            }
            KeyCode::PageUp => {
                self.scroll_back = self.scroll_back.saturating_add(SCROLL_PAGE);
            }
            KeyCode::PageDown => {
                self.scroll_back = self.scroll_back.saturating_sub(SCROLL_PAGE);
            }
            KeyCode::Char(c) if !self.session.is_processing() => self.input.push(c),
            _ => {}
        }
    }

    /// Submit the input buffer. Ignored while a command is in flight; the
    /// buffer is kept so nothing typed is lost.
    fn submit_input(&mut self) {
        if self.session.is_processing() {
            return;
        }
        let line = std::mem::take(&mut self.input);
        match self.session.submit(&line) {
            SubmitOutcome::CloseRequested => self.should_quit = true,
            SubmitOutcome::Cleared => self.scroll_back = 0,
            SubmitOutcome::Scheduled | SubmitOutcome::Ignored => {}
        }
    }

    fn draw(&mut self) -> Result<()> {
        let theme = self.theme.clone();
        let title = self.session.profile().title.clone();
        let clock = Local::now().format("%H:%M:%S").to_string();

        let prompt = prompt_spans(&theme, &self.identity, self.session.current_path());
        let mut lines = scrollback_lines(&theme, self.session.scrollback(), &prompt);
        lines.push(input_line(
            &theme,
            &prompt,
            &self.input,
            self.session.is_processing(),
            self.cursor_visible,
            self.blink_phase,
            self.app.size()?.0 as usize,
        ));

        let total = lines.len();
        let scroll_back = self.scroll_back;
        let app = &mut self.app;
        app.draw(|frame| {
            let [title_area, body, footer] = ui::build_terminal_layout(frame.area());
            ui::render_title_bar(frame, title_area, &theme, &title);

            let top = scroll_top(total, body.height as usize, scroll_back);
            frame.render_widget(
                Paragraph::new(lines.clone()).scroll((top as u16, 0)),
                body,
            );

            ui::render_status_bar(frame, footer, &theme, FOOTER_LEFT, FOOTER_CENTER, &clock);
        })?;
        Ok(())
    }
}

/// Styled `user@host:path $` prompt segments.
fn prompt_spans(theme: &Theme, identity: &Identity, path: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!("{}@{}", identity.user, identity.host),
            theme.prompt_style(),
        ),
        Span::styled(format!(":{}", path), theme.accent_style()),
        Span::styled(" $ ".to_string(), theme.text_style()),
    ]
}

/// Render the scrollback into styled lines: prompt echo, indented output,
/// one blank separator per entry.
fn scrollback_lines(
    theme: &Theme,
    scrollback: &[Entry],
    prompt: &[Span<'static>],
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in scrollback {
        if !entry.command.is_empty() {
            let mut spans = prompt.to_vec();
            spans.push(Span::styled(entry.command.clone(), theme.text_style()));
            lines.push(Line::from(spans));
        }
        for output in &entry.output {
            lines.push(Line::from(Span::styled(
                format!("    {}", output),
                theme.text_style(),
            )));
        }
        lines.push(Line::from(""));
    }
    lines
}

/// The live input row: prompt, visible input tail and a blinking cursor,
/// or a pulsing processing indicator while a command is in flight.
fn input_line(
    theme: &Theme,
    prompt: &[Span<'static>],
    input: &str,
    processing: bool,
    cursor_visible: bool,
    blink_phase: usize,
    term_width: usize,
) -> Line<'static> {
    let mut spans = prompt.to_vec();
    if processing {
        let dots = ".".repeat(1 + blink_phase % 3);
        spans.push(Span::styled(
            format!("Processing{}", dots),
            theme.text_secondary_style(),
        ));
        return Line::from(spans);
    }

    let prompt_width: usize = prompt.iter().map(|s| s.content.width()).sum();
    let avail = term_width.saturating_sub(prompt_width + 1);
    spans.push(Span::styled(
        visible_tail(input, avail).to_string(),
        theme.text_style(),
    ));
    spans.push(Span::styled(
        if cursor_visible { "█" } else { " " }.to_string(),
        theme.prompt_style(),
    ));
    Line::from(spans)
}

/// Longest suffix of `input` that fits in `avail` display columns.
///
/// Long input scrolls horizontally instead of wrapping, keeping the cursor
/// on the input row.
fn visible_tail(input: &str, avail: usize) -> &str {
    let mut width = 0;
    let mut start = input.len();
    for (idx, ch) in input.char_indices().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > avail {
            break;
        }
        width += ch_width;
        start = idx;
    }
    &input[start..]
}

/// Paragraph scroll offset: pin to the bottom, then back off by the user's
/// scroll distance without running past the top.
fn scroll_top(total_lines: usize, viewport: usize, scroll_back: usize) -> usize {
    let max_top = total_lines.saturating_sub(viewport);
    max_top.saturating_sub(scroll_back)
}
