//! Ride selection screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::core::catalog::{PAYMENT_METHOD, RIDE_OPTIONS, TRIP_DISTANCE};
use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Render this screen
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Trip details
            Constraint::Min(0),    // Ride options
            Constraint::Length(3), // Payment method
        ])
        .split(area);

    render_trip_details(frame, chunks[0], app);
    render_ride_options(frame, chunks[1], app);

    let payment = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(PAYMENT_METHOD, Theme::strong()),
        Span::styled("   (Change)", Theme::muted()),
    ]))
    .block(Block::default().title(" Payment Method ").borders(Borders::ALL));
    frame.render_widget(payment, chunks[2]);
}

fn render_trip_details(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.flow.state();
    let text = vec![
        Line::from(vec![
            Span::styled(" ● Pickup       ", Style::default().fg(Color::Green)),
            Span::styled(state.pickup.clone(), Theme::strong()),
        ]),
        Line::from(vec![
            Span::styled(" ● Destination  ", Theme::danger()),
            Span::styled(state.destination.clone(), Theme::strong()),
            Span::styled(format!("   Distance {}", TRIP_DISTANCE), Theme::muted()),
        ]),
    ];

    let details = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(details, area);
}

fn render_ride_options(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = RIDE_OPTIONS
        .iter()
        .enumerate()
        .map(|(i, ride)| {
            let line = Line::from(vec![
                Span::raw(format!(" [{}] ", i + 1)),
                Span::styled(format!("{:<10}", ride.name), Theme::strong()),
                Span::raw(format!(" {:<24}", ride.description)),
                Span::styled(format!("{} away", ride.eta), Style::default().fg(Theme::SECONDARY)),
                Span::styled(format!("  {:<8}", ride.capacity), Theme::muted()),
                Span::styled(format!("{:>6}", ride.fare()), Theme::strong()),
            ]);

            let item = ListItem::new(line);
            if i == app.ride_selection.selected {
                item.style(Theme::selected())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Available Rides ")
            .borders(Borders::ALL)
            .border_style(Theme::normal()),
    );

    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use crate::tui::app::App;
    use crate::tui::ui::tests::render_to_string;

    #[test]
    fn test_lists_every_ride() {
        let mut app = App::default();
        app.flow.set_pickup("MG Road");
        app.flow.set_destination("Airport");
        app.flow.submit();

        let screen = render_to_string(&app);
        for name in ["Ola Mini", "Ola Prime", "Ola Auto", "Ola Bike"] {
            assert!(screen.contains(name), "missing {}", name);
        }
        assert!(screen.contains("5.2 km"));
        assert!(screen.contains("Cash"));
        assert!(screen.contains("Choose Your Ride"));
    }
}
