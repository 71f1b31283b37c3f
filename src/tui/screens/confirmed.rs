//! Booking confirmed screen, shown while a driver is being found

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::tui::ui::{centered_rect, spinner_frame};

/// Render this screen
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let card = centered_rect(52, 11, area);

    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled("Booking Confirmed!", Theme::header())),
        Line::from(Span::styled("Finding a driver for you...", Theme::muted())),
        Line::from(""),
    ];

    if let Some(ride) = &app.flow.state().selected_ride {
        text.push(Line::from(vec![
            Span::styled(ride.name, Theme::strong()),
            Span::raw("  "),
            Span::styled(ride.fare(), Theme::strong()),
        ]));
        text.push(Line::from(Span::styled(
            format!("{} · {} away", ride.description, ride.eta),
            Theme::muted(),
        )));
    }

    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        spinner_frame(app.tick_counter),
        Style::default().fg(Theme::PRIMARY),
    )));

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, card);
}

#[cfg(test)]
mod tests {
    use crate::tui::app::App;
    use crate::tui::ui::tests::render_to_string;

    #[test]
    fn test_shows_selected_ride() {
        let mut app = App::default();
        app.flow.set_pickup("MG Road");
        app.flow.set_destination("Airport");
        app.flow.submit();
        app.flow.select_ride("prime");

        let screen = render_to_string(&app);
        assert!(screen.contains("Booking Confirmed!"));
        assert!(screen.contains("Finding a driver"));
        assert!(screen.contains("Ola Prime"));
        assert!(!screen.contains("Rajesh Kumar"));
    }
}
