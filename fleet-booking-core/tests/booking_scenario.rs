//! End-to-end booking flow over a small two-workshop catalog

mod common;

use assert_matches::assert_matches;
use common::{monday, two_workshop_catalog};
use fleet_booking_core::availability::AvailabilityResolver;
use fleet_booking_core::booking::BookingRequestBuilder;
use fleet_booking_core::pricing::BookingPriceCalculator;
use fleet_booking_core::slot::TimeSlot;
use fleet_booking_core::{Error, SelectionField};
use rstest::rstest;

#[test]
fn test_slots_are_union_of_supporting_workshops() {
    let resolver = AvailabilityResolver::new(two_workshop_catalog());
    let slots: Vec<String> = resolver
        .available_slots(monday(), "oil_change")
        .iter()
        .map(TimeSlot::to_string)
        .collect();
    assert_eq!(slots, vec!["09:00", "10:00", "13:00"]);
}

#[test]
fn test_service_without_workshops_has_no_slots() {
    let resolver = AvailabilityResolver::new(two_workshop_catalog());
    assert!(resolver.available_slots(monday(), "brake_service").is_empty());
    assert!(resolver.workshops_offering("brake_service").is_empty());
}

#[rstest]
#[case("A", 60.0)]
#[case("B", 45.0)]
fn test_cost_per_workshop(#[case] workshop_id: &str, #[case] expected: f64) {
    let catalog = two_workshop_catalog();
    let calculator = BookingPriceCalculator::new(catalog.clone());
    let workshop = catalog.workshops.get(workshop_id).unwrap();
    assert_eq!(calculator.estimated_cost("oil_change", workshop).unwrap(), expected);
}

#[rstest]
#[case("A", "10:00", 60.0)]
#[case("B", "10:00", 45.0)]
#[case("B", "13:00", 45.0)]
fn test_build_request_in_union(
    #[case] workshop_id: &str,
    #[case] time: &str,
    #[case] cost: f64,
) {
    let request = BookingRequestBuilder::new(two_workshop_catalog())
        .vehicle("V1")
        .workshop_id(workshop_id)
        .service_type("oil_change")
        .date(monday())
        .time(time)
        .build()
        .unwrap();

    assert_eq!(request.vehicle_id(), "V1");
    assert_eq!(request.workshop_id(), workshop_id);
    assert_eq!(request.time().as_str(), time);
    assert_eq!(request.estimated_duration_hours(), 1);
    assert_eq!(request.estimated_cost(), cost);
}

#[rstest]
#[case("11:00")]
#[case("08:59")]
#[case("25:00")]
fn test_time_outside_union_is_rejected(#[case] time: &str) {
    let result = BookingRequestBuilder::new(two_workshop_catalog())
        .vehicle("V1")
        .workshop_id("A")
        .service_type("oil_change")
        .date(monday())
        .time(time)
        .build();

    let err = result.unwrap_err();
    assert!(err.is_invalid_time_slot());
    assert!(err.is_recoverable());
}

#[test]
fn test_missing_vehicle_is_incomplete() {
    let result = BookingRequestBuilder::new(two_workshop_catalog())
        .workshop_id("A")
        .service_type("oil_change")
        .date(monday())
        .time("10:00")
        .build();

    assert_matches!(
        result,
        Err(Error::IncompleteSelection { missing }) if missing == vec![SelectionField::Vehicle]
    );
}

#[test]
fn test_unknown_service_is_reported_before_workshop_checks() {
    let result = BookingRequestBuilder::new(two_workshop_catalog())
        .vehicle("V1")
        .workshop_id("Z")
        .service_type("engine_swap")
        .date(monday())
        .time("10:00")
        .build();

    assert_matches!(result, Err(Error::UnknownServiceType { .. }));
}
