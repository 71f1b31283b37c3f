//! Ride catalog CLI command handler

use crate::cli::commands::RidesArgs;
use crate::core::catalog::{PAYMENT_METHOD, RIDE_OPTIONS};
use crate::error::Result;

/// Handle the rides command
pub fn handle_rides(args: RidesArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&RIDE_OPTIONS)?);
        return Ok(());
    }

    println!("Available rides:\n");
    for ride in &RIDE_OPTIONS {
        println!(
            "  {:<6} {:<10} {:<24} {:>5} away  {:<8} {}",
            ride.id,
            ride.name,
            ride.description,
            ride.eta,
            ride.capacity,
            ride.fare()
        );
    }
    println!("\nPayment: {}", PAYMENT_METHOD);

    Ok(())
}
