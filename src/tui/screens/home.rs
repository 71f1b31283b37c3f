//! Home screen: pickup and destination entry

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::booking::InputField;
use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Render this screen
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Pickup
            Constraint::Length(3), // Destination
            Constraint::Length(1), // Booking time
            Constraint::Length(3), // Submit
            Constraint::Min(0),    // Quick actions
        ])
        .split(columns[0]);

    let state = app.flow.state();
    render_input(
        frame,
        left[0],
        "Pickup Location",
        &state.pickup,
        "Enter pickup location",
        app.focused_field == InputField::Pickup,
    );
    render_input(
        frame,
        left[1],
        "Destination",
        &state.destination,
        "Where are you going?",
        app.focused_field == InputField::Destination,
    );

    let booked_at = Paragraph::new(format!(" Now • {}", state.booked_at.format("%I:%M %p")))
        .style(Theme::muted());
    frame.render_widget(booked_at, left[2]);

    // Disabled until both fields have text
    let submit_style = if app.flow.can_submit() {
        Theme::selected()
    } else {
        Theme::muted()
    };
    let submit = Paragraph::new("[Enter] Find Rides")
        .alignment(Alignment::Center)
        .style(submit_style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(submit, left[3]);

    let quick_actions = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("  Schedule Ride", Theme::strong()),
            Span::styled("  Book for later", Theme::muted()),
        ]),
        Line::from(vec![
            Span::styled("  Ride History ", Theme::strong()),
            Span::styled("  View past trips", Theme::muted()),
        ]),
    ])
    .block(Block::default().title(" Quick Actions ").borders(Borders::ALL));
    frame.render_widget(quick_actions, left[4]);

    render_map_panel(frame, columns[1], app);
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let border_style = if focused {
        Theme::focused()
    } else {
        Theme::normal()
    };

    let content = if value.is_empty() {
        Span::styled(placeholder.to_string(), Theme::muted())
    } else {
        Span::raw(value.to_string())
    };

    let mut spans = vec![Span::raw(" "), content];
    if focused {
        spans.push(Span::styled("▏", Theme::focused()));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area);
}

fn render_map_panel(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.flow.state();
    let route = match (state.pickup.is_empty(), state.destination.is_empty()) {
        (false, false) => format!("{} → {}", state.pickup, state.destination),
        (false, true) => state.pickup.clone(),
        (true, false) => format!("Your location → {}", state.destination),
        (true, true) => "Your location".to_string(),
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("  ◎ Map", Theme::strong())),
        Line::from(Span::styled(format!("  {}", route), Theme::muted())),
        Line::from(""),
        Line::from(Span::styled("  Why Choose Ola?", Theme::header())),
        Line::from("  • Quick Booking: rides in under 30 seconds"),
        Line::from("  • Trusted Drivers: verified and rated"),
        Line::from("  • Cashless Rides: cards, wallets or UPI"),
    ];

    let map = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" My Location ").borders(Borders::ALL));
    frame.render_widget(map, area);
}

#[cfg(test)]
mod tests {
    use crate::tui::app::App;
    use crate::tui::ui::tests::render_to_string;

    #[test]
    fn test_home_shows_placeholders() {
        let app = App::default();
        let screen = render_to_string(&app);
        assert!(screen.contains("Enter pickup location"));
        assert!(screen.contains("Where are you going?"));
        assert!(screen.contains("Find Rides"));
        assert!(screen.contains("Now"));
    }

    #[test]
    fn test_home_shows_typed_route() {
        let mut app = App::default();
        app.flow.set_pickup("MG Road");
        app.flow.set_destination("Airport");
        let screen = render_to_string(&app);
        assert!(screen.contains("MG Road"));
        assert!(screen.contains("Airport"));
    }

    #[test]
    fn test_map_shows_destination_without_pickup() {
        let mut app = App::default();
        app.flow.set_destination("Airport");
        let screen = render_to_string(&app);
        assert!(screen.contains("Your location → Airport"));
    }
}
