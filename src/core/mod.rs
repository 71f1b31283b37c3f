//! Core functionality for ridehail
//!
//! This module contains the terminal-independent logic:
//! - Static ride and driver catalog
//! - Booking flow state machine
//! - Delayed driver assignment
//! - Application configuration

pub mod booking;
pub mod catalog;
pub mod config;
pub mod dispatch;

pub use booking::{BookingFlow, BookingState, DispatchTicket, InputField, SessionId, View};
pub use catalog::{Driver, RideOption, ASSIGNED_DRIVER, RIDE_OPTIONS};
pub use config::Config;
pub use dispatch::Dispatcher;
