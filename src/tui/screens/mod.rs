//! TUI screens, one per booking view

pub mod booking;
pub mod confirmed;
pub mod home;
pub mod tracking;
