//! Static ride and driver catalog
//!
//! Everything here is declarative data. Nothing is derived from the
//! pickup or destination text.

use serde::Serialize;

/// A selectable vehicle tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RideOption {
    /// Catalog identifier (e.g. "mini")
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Vehicle description
    pub description: &'static str,
    /// Flat fare in rupees
    pub price: u32,
    /// Pickup estimate, already formatted
    pub eta: &'static str,
    /// Passenger capacity, already formatted
    pub capacity: &'static str,
}

impl RideOption {
    /// Fare formatted for display
    pub fn fare(&self) -> String {
        format!("₹{}", self.price)
    }
}

/// The person and vehicle assigned to a confirmed booking
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Driver {
    pub name: &'static str,
    pub rating: f32,
    pub car_model: &'static str,
    pub car_number: &'static str,
    pub phone: &'static str,
    /// Minutes until the driver reaches the pickup point
    pub eta_minutes: u32,
}

/// Ride options in display order
pub const RIDE_OPTIONS: [RideOption; 4] = [
    RideOption {
        id: "mini",
        name: "Ola Mini",
        description: "AC Hatchback, 4 seats",
        price: 89,
        eta: "3 min",
        capacity: "4 seats",
    },
    RideOption {
        id: "prime",
        name: "Ola Prime",
        description: "AC Sedan, 4 seats",
        price: 125,
        eta: "5 min",
        capacity: "4 seats",
    },
    RideOption {
        id: "auto",
        name: "Ola Auto",
        description: "Auto Rickshaw, 3 seats",
        price: 45,
        eta: "2 min",
        capacity: "3 seats",
    },
    RideOption {
        id: "bike",
        name: "Ola Bike",
        description: "Two Wheeler, 1 seat",
        price: 25,
        eta: "1 min",
        capacity: "1 seat",
    },
];

/// Every booking gets this driver
pub const ASSIGNED_DRIVER: Driver = Driver {
    name: "Rajesh Kumar",
    rating: 4.8,
    car_model: "Maruti Swift",
    car_number: "KA 01 AB 1234",
    phone: "+91 98765 43210",
    eta_minutes: 3,
};

/// Trip distance shown on the ride selection screen
pub const TRIP_DISTANCE: &str = "5.2 km";

/// Payment method shown on the ride selection screen
pub const PAYMENT_METHOD: &str = "Cash";

/// Look up a ride option by its exact id
pub fn find_ride(id: &str) -> Option<&'static RideOption> {
    RIDE_OPTIONS.iter().find(|ride| ride.id == id)
}

/// All catalog ids in display order
pub fn ride_ids() -> Vec<&'static str> {
    RIDE_OPTIONS.iter().map(|ride| ride.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ride() {
        let mini = find_ride("mini").unwrap();
        assert_eq!(mini.name, "Ola Mini");
        assert_eq!(mini.price, 89);
        assert_eq!(mini.eta, "3 min");

        assert_eq!(find_ride("bike").map(|r| r.price), Some(25));
        assert!(find_ride("MINI").is_none());
        assert!(find_ride("").is_none());
        assert!(find_ride("suv").is_none());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids = ride_ids();
        assert_eq!(ids, vec!["mini", "prime", "auto", "bike"]);

        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_fare_formatting() {
        assert_eq!(RIDE_OPTIONS[1].fare(), "₹125");
    }

    #[test]
    fn test_assigned_driver() {
        assert_eq!(ASSIGNED_DRIVER.name, "Rajesh Kumar");
        assert_eq!(ASSIGNED_DRIVER.eta_minutes, 3);
        assert_eq!(ASSIGNED_DRIVER.car_number, "KA 01 AB 1234");
    }
}
