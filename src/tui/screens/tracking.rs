//! Live tracking screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Render this screen
///
/// Draws nothing unless both the ride and the driver are known.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(tracking) = app.flow.tracking() else {
        return;
    };
    let (ride, driver) = (tracking.ride, tracking.driver);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Map
            Constraint::Length(5), // Driver
            Constraint::Length(4), // Trip
            Constraint::Min(0),    // Actions
        ])
        .split(area);

    let map = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" ETA: {} min", driver.eta_minutes),
            Theme::strong(),
        )),
        Line::from(Span::styled(
            " Driver is heading to your pickup point",
            Theme::muted(),
        )),
    ])
    .block(Block::default().title(" Live Tracking ").borders(Borders::ALL));
    frame.render_widget(map, chunks[0]);

    let driver_info = Paragraph::new(vec![
        Line::from(Span::styled(format!(" {}", driver.name), Theme::strong())),
        Line::from(vec![
            Span::styled(" ★ ", Style::default().fg(Color::Yellow)),
            Span::raw(format!("{:.1}", driver.rating)),
        ]),
        Line::from(Span::styled(
            format!(" {} • {}   ☎ {}", driver.car_model, driver.car_number, driver.phone),
            Theme::muted(),
        )),
    ])
    .block(Block::default().title(" Your Driver ").borders(Borders::ALL));
    frame.render_widget(driver_info, chunks[1]);

    let trip = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(" ● Pickup       ", Style::default().fg(Color::Green)),
            Span::raw(tracking.pickup.to_string()),
        ]),
        Line::from(vec![
            Span::styled(" ● Destination  ", Theme::danger()),
            Span::raw(tracking.destination.to_string()),
            Span::styled(format!("   {} {}", ride.name, ride.fare()), Theme::strong()),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(trip, chunks[2]);

    let actions = Paragraph::new(vec![
        Line::from(Span::styled(" [c] Cancel Ride", Theme::danger())),
        Line::from(" [n] Book Another Ride"),
        Line::from(""),
        Line::from(Span::styled(
            " Safety: Emergency · Share Trip",
            Theme::muted(),
        )),
    ])
    .block(Block::default().title(" Actions ").borders(Borders::ALL));
    frame.render_widget(actions, chunks[3]);
}

#[cfg(test)]
mod tests {
    use crate::core::booking::{BookingFlow, View};
    use crate::core::catalog::find_ride;
    use crate::tui::app::App;
    use crate::tui::ui::tests::render_to_string;

    #[test]
    fn test_shows_driver_and_trip() {
        let mut app = App::default();
        app.flow.set_pickup("MG Road");
        app.flow.set_destination("Airport");
        app.flow.submit();
        let ticket = app.flow.select_ride("mini").unwrap();
        app.flow.complete_dispatch(ticket);

        let screen = render_to_string(&app);
        assert!(screen.contains("Rajesh Kumar"));
        assert!(screen.contains("Maruti Swift"));
        assert!(screen.contains("KA 01 AB 1234"));
        assert!(screen.contains("Arriving in 3 minutes"));
        assert!(screen.contains("Book Another Ride"));
    }

    #[test]
    fn test_missing_driver_renders_empty_content() {
        let mut app = App::default();
        let mut state = app.flow.state().clone();
        state.view = View::Tracking;
        state.selected_ride = find_ride("mini").copied();
        app.flow = BookingFlow::with_state(state);

        let screen = render_to_string(&app);
        assert!(!screen.contains("Your Driver"));
        assert!(!screen.contains("Ola Mini"));
        assert!(screen.contains("Your Ride"));
    }
}
