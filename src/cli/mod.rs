//! CLI module for ridehail
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod book;
pub mod commands;
pub mod config;
pub mod rides;

pub use commands::{Cli, Commands};
