//! Main TUI application state and logic

use std::future::Future;
use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::debug;

use crate::core::booking::{BookingFlow, DispatchTicket, InputField, View};
use crate::core::catalog::RIDE_OPTIONS;
use crate::core::config::Config;
use crate::core::dispatch::Dispatcher;
use crate::error::{RideError, Result};
use crate::tui::event::{is_back_key, is_force_quit_key, is_quit_key, AppEvent, EventHandler};
use crate::tui::ui;

/// Message type for delayed and background results
#[derive(Debug)]
pub enum AsyncMessage {
    /// Driver assignment delay elapsed
    DriverAssigned(DispatchTicket),
}

/// List selection state
#[derive(Debug, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Total items in the list
    pub total: usize,
}

impl ListState {
    pub fn new(total: usize) -> Self {
        Self { selected: 0, total }
    }

    pub fn next(&mut self) {
        if self.total > 0 {
            self.selected = (self.selected + 1) % self.total;
        }
    }

    pub fn previous(&mut self) {
        if self.total > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.total - 1);
        }
    }
}

/// Main TUI application
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Booking session
    pub flow: BookingFlow,
    /// Field receiving keystrokes on the Home view
    pub focused_field: InputField,
    /// Ride list selection on the Booking view
    pub ride_selection: ListState,
    /// Status message to display
    pub status_message: Option<String>,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Tick counter for the spinner
    pub tick_counter: usize,

    /// Sender for async messages (cloned into tasks)
    pub async_tx: mpsc::Sender<AsyncMessage>,
    /// Receiver for async messages
    pub async_rx: mpsc::Receiver<AsyncMessage>,

    dispatcher: Dispatcher<AsyncMessage>,
    tick_rate: Duration,
}

impl App {
    /// Create a new app instance
    pub fn new(config: &Config) -> Self {
        let (async_tx, async_rx) = mpsc::channel(8);
        let dispatcher = Dispatcher::new(async_tx.clone(), config.driver_assignment_delay());

        Self {
            running: true,
            flow: BookingFlow::new(),
            focused_field: InputField::Pickup,
            ride_selection: ListState::new(RIDE_OPTIONS.len()),
            status_message: None,
            show_help: false,
            tick_counter: 0,
            async_tx,
            async_rx,
            dispatcher,
            tick_rate: config.tick_rate(),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| RideError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| RideError::Terminal(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| RideError::Terminal(e.to_string()))?;
        Ok(terminal)
    }

    /// Restore terminal to normal state
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().map_err(|e| RideError::Terminal(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| RideError::Terminal(e.to_string()))?;
        terminal
            .show_cursor()
            .map_err(|e| RideError::Terminal(e.to_string()))?;
        Ok(())
    }

    /// Run the TUI application
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let mut events = EventHandler::new(self.tick_rate);

        let result = self.event_loop(&mut terminal, &mut events).await;

        // Nothing may fire against the session once the UI is gone
        self.dispatcher.cancel();
        Self::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        events: &mut EventHandler,
    ) -> Result<()> {
        while self.running {
            terminal
                .draw(|frame| ui::render(frame, self))
                .map_err(|e| RideError::Terminal(e.to_string()))?;

            self.step(events.next()).await;
        }
        Ok(())
    }

    /// Wait for whichever comes first, an async message or a terminal event,
    /// and apply it
    pub(crate) async fn step(&mut self, next_event: impl Future<Output = Option<AppEvent>>) {
        tokio::select! {
            Some(msg) = self.async_rx.recv() => self.handle_async_message(msg),
            event = next_event => self.handle_app_event(event),
        }
    }

    fn handle_app_event(&mut self, event: Option<AppEvent>) {
        match event {
            Some(AppEvent::Key(key)) => self.handle_key_event(key),
            Some(AppEvent::Resize(_, _)) => {
                // Terminal resize is handled automatically by ratatui
            }
            Some(AppEvent::Tick) => {
                self.tick_counter = self.tick_counter.wrapping_add(1);
            }
            None => self.running = false,
        }
    }

    /// Handle async message from background tasks
    pub fn handle_async_message(&mut self, msg: AsyncMessage) {
        match msg {
            AsyncMessage::DriverAssigned(ticket) => {
                if self.flow.complete_dispatch(ticket) {
                    self.status_message = Some(format!(
                        "{} is on the way, arriving in {} min",
                        ticket.driver.name, ticket.driver.eta_minutes
                    ));
                }
            }
        }
    }

    /// Handle a key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if is_force_quit_key(&key) {
            self.quit();
            return;
        }

        // If help is shown, any key dismisses it
        if self.show_help {
            self.show_help = false;
            return;
        }

        if key.code == KeyCode::F(1) {
            self.show_help = true;
            return;
        }

        // Home is a text form, so it bypasses the global handlers
        if self.flow.view() == View::Home {
            self.handle_home_key(key);
            return;
        }

        if key.code == KeyCode::Char('?') {
            self.show_help = true;
            return;
        }

        if is_quit_key(&key) {
            self.quit();
            return;
        }

        match self.flow.view() {
            View::Home => {}
            View::Booking => self.handle_booking_key(key),
            View::Confirmed => self.handle_confirmed_key(key),
            View::Tracking => self.handle_tracking_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Enter => {
                if self.flow.submit() {
                    self.ride_selection = ListState::new(RIDE_OPTIONS.len());
                    self.status_message = None;
                }
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focused_field = self.focused_field.toggle();
            }
            KeyCode::Backspace => {
                self.flow.pop_char(self.focused_field);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.flow.push_char(self.focused_field, c);
            }
            _ => {}
        }
    }

    fn handle_booking_key(&mut self, key: KeyEvent) {
        if is_back_key(&key) {
            self.flow.back();
            self.status_message = None;
            return;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.ride_selection.next(),
            KeyCode::Char('k') | KeyCode::Up => self.ride_selection.previous(),
            KeyCode::Enter | KeyCode::Char(' ') => self.book_ride(self.ride_selection.selected),
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index < RIDE_OPTIONS.len() {
                    self.ride_selection.selected = index;
                    self.book_ride(index);
                }
            }
            _ => {}
        }
    }

    fn handle_confirmed_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') {
            self.cancel_ride();
        }
    }

    fn handle_tracking_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('n') => self.book_another(),
            KeyCode::Char('c') => self.cancel_ride(),
            _ => {}
        }
    }

    /// Book the ride at `index` in the catalog and start driver assignment
    fn book_ride(&mut self, index: usize) {
        let Some(ride) = RIDE_OPTIONS.get(index) else {
            return;
        };
        if let Some(ticket) = self.flow.select_ride(ride.id) {
            self.dispatcher.schedule(AsyncMessage::DriverAssigned(ticket));
            self.status_message = Some(format!("{} booked, finding a driver...", ride.name));
        }
    }

    fn cancel_ride(&mut self) {
        if self.flow.cancel() {
            self.dispatcher.cancel();
            self.reset_form();
            self.status_message = Some("Ride cancelled".to_string());
        }
    }

    fn book_another(&mut self) {
        if self.flow.book_another() {
            self.dispatcher.cancel();
            self.reset_form();
        }
    }

    fn reset_form(&mut self) {
        self.focused_field = InputField::Pickup;
        self.ride_selection = ListState::new(RIDE_OPTIONS.len());
        self.status_message = None;
    }

    /// Whether a driver assignment is still pending
    pub fn dispatch_pending(&self) -> bool {
        self.dispatcher.is_pending()
    }

    /// Quit the application
    pub fn quit(&mut self) {
        debug!(view = ?self.flow.view(), "quitting");
        self.dispatcher.cancel();
        self.running = false;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
