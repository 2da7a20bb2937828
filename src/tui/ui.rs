//! Chrome rendering and layout helpers for the terminal view

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;

/// Split the screen into title bar, scrollback body and status footer.
pub fn build_terminal_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Render the window title bar: traffic lights plus the profile title.
pub fn render_title_bar(frame: &mut Frame, area: Rect, theme: &Theme, title: &str) {
    let spans = vec![
        Span::styled(" ●", Style::default().fg(Color::Red)),
        Span::styled(" ●", Style::default().fg(Color::Yellow)),
        Span::styled(" ●  ", Style::default().fg(Color::Green)),
        Span::styled(title.to_string(), theme.accent_style()),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the status footer: two themed status tags and a live clock.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    left: &str,
    center: &str,
    clock: &str,
) {
    let style = theme.text_secondary_style();
    frame.render_widget(
        Paragraph::new(format!(" {}", left)).style(style),
        area,
    );
    frame.render_widget(
        Paragraph::new(center.to_string())
            .style(style)
            .alignment(Alignment::Center),
        area,
    );
    frame.render_widget(
        Paragraph::new(format!("{} ", clock))
            .style(style)
            .alignment(Alignment::Right),
        area,
    );
}
