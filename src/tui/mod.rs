//! Terminal User Interface module
//!
//! This module contains the ratatui-based booking screens and the event
//! loop that feeds key presses and driver assignments into the booking flow.

pub mod app;
pub mod event;
pub mod screens;
pub mod theme;
pub mod ui;

pub use app::App;
