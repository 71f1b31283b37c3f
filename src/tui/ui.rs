//! Main UI renderer

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::core::booking::View;
use crate::tui::app::App;
use crate::tui::screens;
use crate::tui::theme::Theme;

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Render the UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_content(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    if app.show_help {
        render_help_overlay(frame, app);
    }
}

/// Render the header
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = match app.flow.tracking() {
        Some(tracking) => format!(
            " Ola Cab │ {} │ Arriving in {} minutes ",
            View::Tracking.title(),
            tracking.driver.eta_minutes
        ),
        None => format!(" Ola Cab │ {} ", app.flow.view().title()),
    };

    let header = Paragraph::new(title)
        .style(Theme::header())
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

/// Render the main content area based on the current view
fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    match app.flow.view() {
        View::Home => screens::home::render(frame, area, app),
        View::Booking => screens::booking::render(frame, area, app),
        View::Confirmed => screens::confirmed::render(frame, area, app),
        View::Tracking => screens::tracking::render(frame, area, app),
    }
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status_text = match &app.status_message {
        Some(msg) => format!(" {} ", msg),
        None => format!(" {} │ F1 for help ", key_hint(app.flow.view())),
    };

    let status = Paragraph::new(status_text)
        .style(Theme::status_bar())
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(status, area);
}

fn key_hint(view: View) -> &'static str {
    match view {
        View::Home => "Tab switch field · Enter find rides · Esc quit",
        View::Booking => "↑/↓ choose · Enter book · Esc back",
        View::Confirmed => "c cancel · q quit",
        View::Tracking => "n book another · c cancel ride · q quit",
    }
}

/// Current spinner glyph
pub(crate) fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// A rectangle of at most `width` x `height` centered in `area`
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// `pct` percent of `value`, computed wide so large terminals cannot overflow
fn percent_of(value: u16, pct: u16) -> u16 {
    (u32::from(value) * u32::from(pct) / 100) as u16
}

/// Render the help overlay
fn render_help_overlay(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let popup_area = centered_rect(
        percent_of(area.width, 60).min(56),
        percent_of(area.height, 70).min(14),
        area,
    );

    frame.render_widget(Clear, popup_area);

    let (title, help_lines) = get_help_content(app.flow.view());

    let text: Vec<Line> = help_lines
        .into_iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {:12}", key), Style::default().fg(Color::Cyan)),
                Span::raw(desc),
            ])
        })
        .collect();

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help, popup_area);
}

/// Get help content for the current view
fn get_help_content(view: View) -> (&'static str, Vec<(&'static str, &'static str)>) {
    match view {
        View::Home => (
            "Help - Book Your Ride",
            vec![
                ("Type", "Edit the focused field"),
                ("Tab / ↑ ↓", "Switch field"),
                ("Enter", "Find rides"),
                ("Esc", "Quit"),
                ("F1", "Show this help"),
            ],
        ),
        View::Booking => (
            "Help - Choose Your Ride",
            vec![
                ("j / ↓", "Move down"),
                ("k / ↑", "Move up"),
                ("Enter", "Book highlighted ride"),
                ("1-4", "Book ride by number"),
                ("Esc / b", "Back to locations"),
                ("q", "Quit"),
            ],
        ),
        View::Confirmed => (
            "Help - Booking Confirmed",
            vec![("c", "Cancel booking"), ("q", "Quit")],
        ),
        View::Tracking => (
            "Help - Your Ride",
            vec![
                ("n", "Book another ride"),
                ("c", "Cancel ride"),
                ("q", "Quit"),
            ],
        ),
    }
}
