//! Headless booking CLI command handler
//!
//! Drives the same booking flow as the TUI and waits on the delayed
//! driver assignment before printing the tracking details.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::cli::commands::BookArgs;
use crate::core::booking::BookingFlow;
use crate::core::catalog::ride_ids;
use crate::core::config::Config;
use crate::core::dispatch::Dispatcher;
use crate::error::{RideError, Result};

/// Handle the book command
pub async fn handle_book(args: BookArgs, config: &Config) -> Result<()> {
    let mut flow = BookingFlow::new();
    flow.set_pickup(args.pickup);
    flow.set_destination(args.destination);

    if !flow.submit() {
        return Err(RideError::InvalidInput(
            "Both a pickup location and a destination are required.\n\n  → Example: ridehail book --pickup \"MG Road\" --destination Airport".to_string(),
        ));
    }

    let ticket = flow
        .select_ride(&args.ride)
        .ok_or_else(|| RideError::UnknownRide {
            ride: args.ride.clone(),
            available: ride_ids().join(", "),
        })?;

    if let Some(ride) = &flow.state().selected_ride {
        println!("✓ Booking confirmed: {} {}", ride.name, ride.fare());
        println!("  {} · {} away", ride.description, ride.eta);
    }

    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.driver_assignment_delay());
    println!("  Finding a driver for you ({} ms)...", delay.as_millis());

    let (tx, mut rx) = mpsc::channel(1);
    let mut dispatcher = Dispatcher::new(tx, delay);
    dispatcher.schedule(ticket);

    let ticket = tokio::select! {
        ticket = rx.recv() => ticket.ok_or(RideError::DispatchInterrupted)?,
        _ = tokio::signal::ctrl_c() => {
            dispatcher.cancel();
            flow.cancel();
            return Err(RideError::DispatchInterrupted);
        }
    };

    if !flow.complete_dispatch(ticket) {
        return Err(RideError::DispatchInterrupted);
    }
    let tracking = flow.tracking().ok_or(RideError::DispatchInterrupted)?;
    let driver = tracking.driver;

    println!();
    println!("✓ Driver assigned: {} (★ {:.1})", driver.name, driver.rating);
    println!("  {} • {}", driver.car_model, driver.car_number);
    println!("  Phone: {}", driver.phone);
    println!("  Arriving in {} minutes", driver.eta_minutes);
    println!();
    println!("  Pickup:      {}", tracking.pickup);
    println!("  Destination: {}", tracking.destination);
    println!("  Fare:        {} ({})", tracking.ride.fare(), tracking.ride.name);

    Ok(())
}
