//! ridehail - a terminal ride-booking flow
//!
//! This library provides the booking state machine, its static ride
//! catalog and the delayed driver assignment, plus the TUI and CLI
//! front ends built on top of them.

pub mod cli;
pub mod core;
pub mod error;
pub mod tui;

pub use error::{RideError, Result};
