//! Booking flow state machine
//!
//! `BookingFlow` owns all session data and moves between the four views
//! in response to user actions and one delayed dispatch event:
//!
//! ```text
//! Home --submit--> Booking --select_ride--> Confirmed --complete_dispatch--> Tracking
//!  ^                  |                         |                                |
//!  +------back--------+                         +--cancel--> Home <--book_another/cancel
//! ```
//!
//! Guard failures never error. The operation returns `false` (or `None`)
//! and the state is left untouched.

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::core::catalog::{find_ride, Driver, RideOption, ASSIGNED_DRIVER};

/// Active screen of the booking flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Pickup and destination entry
    #[default]
    Home,
    /// Ride option selection
    Booking,
    /// Ride booked, waiting for a driver
    Confirmed,
    /// Driver assigned and on the way
    Tracking,
}

impl View {
    /// Screen title
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Book Your Ride",
            View::Booking => "Choose Your Ride",
            View::Confirmed => "Booking Confirmed",
            View::Tracking => "Your Ride",
        }
    }
}

/// Text field on the Home view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputField {
    #[default]
    Pickup,
    Destination,
}

impl InputField {
    /// The other field
    pub fn toggle(self) -> Self {
        match self {
            InputField::Pickup => InputField::Destination,
            InputField::Destination => InputField::Pickup,
        }
    }
}

/// Identity of one booking session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SessionId(pub u64);

impl SessionId {
    fn next(self) -> Self {
        SessionId(self.0.wrapping_add(1))
    }
}

/// Payload of the delayed Confirmed -> Tracking transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispatchTicket {
    /// Session that issued the ticket
    pub session: SessionId,
    /// Driver revealed when the ticket is completed
    pub driver: Driver,
}

/// All data of the current session
#[derive(Debug, Clone, PartialEq)]
pub struct BookingState {
    pub view: View,
    pub pickup: String,
    pub destination: String,
    /// Set only in Confirmed and Tracking
    pub selected_ride: Option<RideOption>,
    /// Set only in Tracking
    pub driver: Option<Driver>,
    /// When the session started
    pub booked_at: DateTime<Local>,
}

impl BookingState {
    fn fresh() -> Self {
        Self {
            view: View::Home,
            pickup: String::new(),
            destination: String::new(),
            selected_ride: None,
            driver: None,
            booked_at: Local::now(),
        }
    }
}

/// Borrowed view of a fully populated tracking state
#[derive(Debug, Clone, Copy)]
pub struct TrackingSnapshot<'a> {
    pub ride: &'a RideOption,
    pub driver: &'a Driver,
    pub pickup: &'a str,
    pub destination: &'a str,
}

/// Booking flow controller
#[derive(Debug)]
pub struct BookingFlow {
    state: BookingState,
    session: SessionId,
}

impl BookingFlow {
    /// Start a new session on the Home view
    pub fn new() -> Self {
        info!("booking session started");
        Self {
            state: BookingState::fresh(),
            session: SessionId::default(),
        }
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Whether the Home form may be submitted
    pub fn can_submit(&self) -> bool {
        !self.state.pickup.is_empty() && !self.state.destination.is_empty()
    }

    /// Replace the pickup text (Home only)
    pub fn set_pickup(&mut self, text: impl Into<String>) -> bool {
        self.edit(InputField::Pickup, |value| *value = text.into())
    }

    /// Replace the destination text (Home only)
    pub fn set_destination(&mut self, text: impl Into<String>) -> bool {
        self.edit(InputField::Destination, |value| *value = text.into())
    }

    /// Append a character to a field (Home only)
    pub fn push_char(&mut self, field: InputField, c: char) -> bool {
        self.edit(field, |value| value.push(c))
    }

    /// Remove the last character of a field (Home only)
    pub fn pop_char(&mut self, field: InputField) -> bool {
        self.edit(field, |value| {
            value.pop();
        })
    }

    fn edit(&mut self, field: InputField, apply: impl FnOnce(&mut String)) -> bool {
        if self.state.view != View::Home {
            return false;
        }
        match field {
            InputField::Pickup => apply(&mut self.state.pickup),
            InputField::Destination => apply(&mut self.state.destination),
        }
        true
    }

    /// Home -> Booking
    pub fn submit(&mut self) -> bool {
        if self.state.view != View::Home || !self.can_submit() {
            return false;
        }
        debug!(
            pickup = %self.state.pickup,
            destination = %self.state.destination,
            "home -> booking"
        );
        self.state.view = View::Booking;
        true
    }

    /// Booking -> Home, keeping the entered route
    pub fn back(&mut self) -> bool {
        if self.state.view != View::Booking {
            return false;
        }
        debug!("booking -> home");
        self.state.view = View::Home;
        true
    }

    /// Booking -> Confirmed
    ///
    /// Returns the ticket that must be fed back through
    /// [`complete_dispatch`](Self::complete_dispatch) once the assignment
    /// delay has elapsed.
    pub fn select_ride(&mut self, ride_id: &str) -> Option<DispatchTicket> {
        if self.state.view != View::Booking {
            return None;
        }
        let ride = find_ride(ride_id)?;

        debug!(ride = ride.id, session = self.session.0, "booking -> confirmed");
        self.state.selected_ride = Some(*ride);
        self.state.view = View::Confirmed;

        Some(DispatchTicket {
            session: self.session,
            driver: ASSIGNED_DRIVER,
        })
    }

    /// Confirmed -> Tracking
    ///
    /// Tickets from an earlier session, or arriving outside Confirmed, are
    /// dropped.
    pub fn complete_dispatch(&mut self, ticket: DispatchTicket) -> bool {
        if ticket.session != self.session || self.state.view != View::Confirmed {
            warn!(
                ticket_session = ticket.session.0,
                current_session = self.session.0,
                view = ?self.state.view,
                "dropping stale driver assignment"
            );
            return false;
        }
        debug!(driver = ticket.driver.name, "confirmed -> tracking");
        self.state.driver = Some(ticket.driver);
        self.state.view = View::Tracking;
        true
    }

    /// Tracking -> Home, clearing the whole session
    pub fn book_another(&mut self) -> bool {
        if self.state.view != View::Tracking {
            return false;
        }
        self.reset();
        true
    }

    /// Confirmed or Tracking -> Home, clearing the whole session
    pub fn cancel(&mut self) -> bool {
        if !matches!(self.state.view, View::Confirmed | View::Tracking) {
            return false;
        }
        self.reset();
        true
    }

    fn reset(&mut self) {
        self.session = self.session.next();
        self.state = BookingState::fresh();
        info!(session = self.session.0, "booking session reset");
    }

    /// Ride and driver for the Tracking view
    ///
    /// `None` outside Tracking, or if either record is missing. Callers
    /// render nothing in that case.
    pub fn tracking(&self) -> Option<TrackingSnapshot<'_>> {
        if self.state.view != View::Tracking {
            return None;
        }
        match (&self.state.selected_ride, &self.state.driver) {
            (Some(ride), Some(driver)) => Some(TrackingSnapshot {
                ride,
                driver,
                pickup: &self.state.pickup,
                destination: &self.state.destination,
            }),
            _ => None,
        }
    }

    /// Force a state, bypassing the transition table
    #[cfg(test)]
    pub(crate) fn with_state(state: BookingState) -> Self {
        Self {
            state,
            session: SessionId::default(),
        }
    }
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(flow: &BookingFlow) {
        let state = flow.state();
        let ride_expected = matches!(state.view, View::Confirmed | View::Tracking);
        assert_eq!(state.selected_ride.is_some(), ride_expected, "{:?}", state);
        assert_eq!(
            state.driver.is_some(),
            state.view == View::Tracking,
            "{:?}",
            state
        );
    }

    fn flow_at_booking() -> BookingFlow {
        let mut flow = BookingFlow::new();
        flow.set_pickup("MG Road");
        flow.set_destination("Airport");
        assert!(flow.submit());
        flow
    }

    #[test]
    fn test_new_session_starts_home() {
        let flow = BookingFlow::new();
        assert_eq!(flow.view(), View::Home);
        assert!(flow.state().pickup.is_empty());
        assert!(flow.state().destination.is_empty());
        assert!(!flow.can_submit());
        assert_invariants(&flow);
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut flow = BookingFlow::new();
        flow.set_destination("Airport");
        let before = flow.state().clone();

        assert!(!flow.submit());
        assert_eq!(flow.state(), &before);

        flow.set_pickup("MG Road");
        flow.set_destination("");
        assert!(!flow.submit());
        assert_eq!(flow.view(), View::Home);
    }

    #[test]
    fn test_whitespace_is_not_validated() {
        let mut flow = BookingFlow::new();
        flow.set_pickup(" ");
        flow.set_destination(" ");
        assert!(flow.submit());
        assert_eq!(flow.view(), View::Booking);
    }

    #[test]
    fn test_full_scenario() {
        let mut flow = flow_at_booking();
        assert_eq!(flow.view(), View::Booking);
        assert_invariants(&flow);

        let ticket = flow.select_ride("mini").unwrap();
        assert_eq!(flow.view(), View::Confirmed);
        let ride = flow.state().selected_ride.unwrap();
        assert_eq!(ride.name, "Ola Mini");
        assert_eq!(ride.price, 89);
        assert_eq!(ride.eta, "3 min");
        assert_invariants(&flow);

        assert!(flow.complete_dispatch(ticket));
        assert_eq!(flow.view(), View::Tracking);
        assert_invariants(&flow);

        let tracking = flow.tracking().unwrap();
        assert_eq!(tracking.ride.id, "mini");
        assert_eq!(tracking.driver.name, "Rajesh Kumar");
        assert_eq!(tracking.driver.eta_minutes, 3);
        assert_eq!(tracking.pickup, "MG Road");
        assert_eq!(tracking.destination, "Airport");
    }

    #[test]
    fn test_unknown_ride_is_ignored() {
        let mut flow = flow_at_booking();
        assert!(flow.select_ride("helicopter").is_none());
        assert_eq!(flow.view(), View::Booking);
        assert_invariants(&flow);
    }

    #[test]
    fn test_select_ride_only_from_booking() {
        let mut flow = BookingFlow::new();
        assert!(flow.select_ride("mini").is_none());
        assert_eq!(flow.view(), View::Home);
    }

    #[test]
    fn test_back_keeps_route() {
        let mut flow = flow_at_booking();
        assert!(flow.back());
        assert_eq!(flow.view(), View::Home);
        assert_eq!(flow.state().pickup, "MG Road");
        assert_eq!(flow.state().destination, "Airport");
        assert!(!flow.back());
    }

    #[test]
    fn test_fields_locked_outside_home() {
        let mut flow = flow_at_booking();
        assert!(!flow.set_pickup("Elsewhere"));
        assert!(!flow.push_char(InputField::Destination, 'x'));
        assert_eq!(flow.state().pickup, "MG Road");
        assert_eq!(flow.state().destination, "Airport");
    }

    #[test]
    fn test_push_and_pop_chars() {
        let mut flow = BookingFlow::new();
        for c in "MG".chars() {
            flow.push_char(InputField::Pickup, c);
        }
        flow.push_char(InputField::Destination, 'A');
        flow.pop_char(InputField::Pickup);
        assert_eq!(flow.state().pickup, "M");
        assert_eq!(flow.state().destination, "A");

        flow.pop_char(InputField::Pickup);
        flow.pop_char(InputField::Pickup);
        assert!(flow.state().pickup.is_empty());
    }

    #[test]
    fn test_book_another_resets_session() {
        let mut flow = flow_at_booking();
        let ticket = flow.select_ride("prime").unwrap();
        flow.complete_dispatch(ticket);
        let first_session = flow.session();

        assert!(flow.book_another());
        assert_eq!(flow.view(), View::Home);
        assert!(flow.state().pickup.is_empty());
        assert!(flow.state().destination.is_empty());
        assert!(flow.state().selected_ride.is_none());
        assert!(flow.state().driver.is_none());
        assert_ne!(flow.session(), first_session);
        assert_invariants(&flow);

        // Behaves like a fresh session afterwards
        assert!(!flow.submit());
        flow.set_pickup("MG Road");
        flow.set_destination("Airport");
        assert!(flow.submit());
        assert_eq!(flow.view(), View::Booking);
    }

    #[test]
    fn test_book_another_only_from_tracking() {
        let mut flow = flow_at_booking();
        assert!(!flow.book_another());
        flow.select_ride("auto");
        assert!(!flow.book_another());
        assert_eq!(flow.view(), View::Confirmed);
    }

    #[test]
    fn test_stale_ticket_after_cancel() {
        let mut flow = flow_at_booking();
        let stale = flow.select_ride("mini").unwrap();
        assert!(flow.cancel());
        assert_eq!(flow.view(), View::Home);

        assert!(!flow.complete_dispatch(stale));
        assert_eq!(flow.view(), View::Home);
        assert_invariants(&flow);

        // Even once the new session reaches Confirmed the old ticket is rejected
        flow.set_pickup("MG Road");
        flow.set_destination("Airport");
        flow.submit();
        let fresh = flow.select_ride("bike").unwrap();
        assert!(!flow.complete_dispatch(stale));
        assert_eq!(flow.view(), View::Confirmed);
        assert!(flow.complete_dispatch(fresh));
        assert_eq!(flow.state().selected_ride.unwrap().id, "bike");
    }

    #[test]
    fn test_ticket_applies_once() {
        let mut flow = flow_at_booking();
        let ticket = flow.select_ride("mini").unwrap();
        assert!(flow.complete_dispatch(ticket));
        assert!(!flow.complete_dispatch(ticket));
        assert_eq!(flow.view(), View::Tracking);
    }

    #[test]
    fn test_cancel_requires_active_booking() {
        let mut flow = BookingFlow::new();
        assert!(!flow.cancel());
        let mut flow = flow_at_booking();
        assert!(!flow.cancel());
    }

    #[test]
    fn test_tracking_without_driver_is_empty() {
        let mut state = BookingState::fresh();
        state.view = View::Tracking;
        state.selected_ride = find_ride("mini").copied();
        let flow = BookingFlow::with_state(state);
        assert!(flow.tracking().is_none());

        let mut state = BookingState::fresh();
        state.view = View::Tracking;
        state.driver = Some(ASSIGNED_DRIVER);
        let flow = BookingFlow::with_state(state);
        assert!(flow.tracking().is_none());
    }

    #[test]
    fn test_view_titles() {
        assert_eq!(View::Booking.title(), "Choose Your Ride");
        assert_eq!(View::Tracking.title(), "Your Ride");
    }
}
