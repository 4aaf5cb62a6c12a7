// File: crates/pricing-core/tests/venue.rs
// Purpose: Validate room allocation and itemized venue breakdowns.

use pricing_core::venue::{RoomAllocation, StayPlan, VenueConfig};
use pricing_core::PricingError;
use rstest::rstest;

fn venue(key: &str) -> VenueConfig {
    let all = VenueConfig::presets();
    VenueConfig::find(&all, key).expect("preset").clone()
}

#[test]
fn stay_plan_counts() {
    let plan = StayPlan::default();
    assert_eq!(plan.meals_per_person(), 11);
    assert_eq!(plan.coffee_breaks_per_person(), 6);
}

#[test]
fn even_group_fills_cheapest_shared_rooms() {
    let alloc = venue("el-hierro").allocate(30).unwrap();
    assert_eq!(alloc, RoomAllocation { standard_shared: 15, ..Default::default() });
    assert_eq!(alloc.people(), 30);
}

#[test]
fn overflow_moves_to_superior_then_singles() {
    let alloc = venue("la-palma").allocate(45).unwrap();
    assert_eq!(
        alloc,
        RoomAllocation { standard_shared: 21, standard_single: 0, superior_shared: 1, superior_single: 1 }
    );
    assert_eq!(alloc.rooms_used(), 23);
    assert_eq!(alloc.people(), 45);
}

#[rstest]
#[case("el-hierro", 30, 25_850.0)]
#[case("el-hierro", 40, 34_400.0)]
#[case("el-hierro", 50, 43_525.0)]
fn group_totals(#[case] key: &str, #[case] people: u32, #[case] total: f64) {
    let b = venue(key).breakdown(people, &StayPlan::default()).unwrap();
    assert!((b.total - total).abs() < 1e-6, "got {}", b.total);
    assert_eq!(b.meals, 418.0);
    assert_eq!(b.coffee, 42.0);
}

#[test]
fn capacity_is_enforced() {
    let v = venue("el-hierro");
    assert_eq!(v.max_capacity(), 80);
    assert!(v.allocate(80).is_ok());
    assert!(matches!(v.allocate(81), Err(PricingError::CapacityExceeded { requested: 81, capacity: 80, .. })));
}

#[test]
fn unknown_venue_is_reported() {
    let all = VenueConfig::presets();
    assert_eq!(VenueConfig::find(&all, "nowhere").unwrap_err(), PricingError::UnknownVenue("nowhere".into()));
    assert!(VenueConfig::find(&all, "LA-PALMA").is_ok());
}

#[test]
fn empty_group_has_its_own_error() {
    let err = venue("el-hierro").breakdown(0, &StayPlan::default()).unwrap_err();
    assert_eq!(err, PricingError::EmptyGroup { venue: "Parador de El Hierro".into() });
    assert_eq!(err.to_string(), "group at Parador de El Hierro must have at least one person");
}
