//! Shared fixtures for fleet-booking-core integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, Weekday};
use fleet_booking_core::catalog::{CatalogSnapshot, MaintenanceCatalog, WorkshopCatalog};
use fleet_booking_core::service::ServiceType;
use fleet_booking_core::workshop::Workshop;
use std::sync::Arc;

pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Two workshops offering oil changes on Monday with one overlapping slot
///
/// A: 09:00 and 10:00 at x1.2, B: 09:00 and 13:00 at x0.9. Oil change is one
/// hour at 50.0.
pub fn two_workshop_catalog() -> Arc<CatalogSnapshot> {
    let a = Workshop::builder()
        .id("A")
        .name("Workshop A")
        .location("North")
        .rating(4.0)
        .cost_multiplier(1.2)
        .service("oil_change")
        .day(Weekday::Mon, ["09:00", "10:00"])
        .build()
        .expect("Failed to create workshop A");
    let b = Workshop::builder()
        .id("B")
        .name("Workshop B")
        .location("South")
        .rating(4.0)
        .cost_multiplier(0.9)
        .service("oil_change")
        .day(Weekday::Mon, ["09:00", "13:00"])
        .build()
        .expect("Failed to create workshop B");

    let services = MaintenanceCatalog::new(vec![
        ServiceType::new("oil_change", "Oil Change", 1, 50.0).expect("Failed to create service"),
        ServiceType::new("brake_service", "Brake Service", 3, 200.0)
            .expect("Failed to create service"),
    ])
    .expect("Failed to create maintenance catalog");

    CatalogSnapshot::new(
        WorkshopCatalog::new(vec![a, b]).expect("Failed to create workshop catalog"),
        services,
    )
    .into_shared()
}

pub fn sample_catalog() -> Arc<CatalogSnapshot> {
    CatalogSnapshot::sample().into_shared()
}
