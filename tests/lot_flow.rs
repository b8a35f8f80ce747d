//! End-to-end runs through the parking lot façade.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rust_decimal_macros::dec;

use parkinglot::{
    Clock, FareCalculator, FareStrategy, ManualClock, ParkingError, ParkingLot, ParkingManager,
    ParkingSpot, SpotKind, Vehicle,
};

fn morning(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn lot_from_tags(tags: &[&str], strategy: FareStrategy) -> ParkingLot {
    let mut manager = ParkingManager::new();
    for (number, tag) in (1..).zip(tags) {
        manager.add_spot(ParkingSpot::from_tag(tag, number).unwrap());
    }
    ParkingLot::new(manager, FareCalculator::new(strategy, dec!(5.00)))
}

#[test]
fn sample_lot_walkthrough() {
    let mut lot = ParkingLot::sample();
    let clock = ManualClock::new(morning(0));

    let car = Vehicle::car("ABC123");
    let motorcycle = Vehicle::motorcycle("XYZ789");
    let truck = Vehicle::truck("TRK456");

    let mut car_ticket = lot.enter_vehicle(&car, &clock).unwrap();
    let bike_ticket = lot.enter_vehicle(&motorcycle, &clock).unwrap();
    let truck_ticket = lot.enter_vehicle(&truck, &clock).unwrap();

    assert_eq!(car_ticket.spot_number(), 2);
    assert_eq!(bike_ticket.spot_number(), 1);
    assert_eq!(truck_ticket.spot_number(), 5);
    assert_ne!(car_ticket.id(), bike_ticket.id());

    clock.advance(TimeDelta::hours(2));
    assert_eq!(lot.leave_vehicle(&mut car_ticket, &clock), Some(dec!(10.00)));
    assert_eq!(lot.leave_vehicle(&mut car_ticket, &clock), None);

    let status = lot.status();
    assert_eq!(status.available, 3);
    assert!(status.spots[1].occupant.is_none());
    assert_eq!(status.spots[4].occupant.as_deref(), Some("TRK456"));
}

#[test]
fn motorcycle_first_fit_prefers_earliest_spot() {
    let mut lot = lot_from_tags(&["compact", "regular", "oversized"], FareStrategy::Linear);
    let clock = ManualClock::new(morning(8));

    let first = Vehicle::motorcycle("M1");
    let second = Vehicle::motorcycle("M2");
    let third = Vehicle::motorcycle("M3");
    let fourth = Vehicle::motorcycle("M4");

    assert_eq!(lot.enter_vehicle(&first, &clock).unwrap().spot_number(), 1);
    assert_eq!(lot.enter_vehicle(&second, &clock).unwrap().spot_number(), 2);
    assert_eq!(lot.enter_vehicle(&third, &clock).unwrap().spot_number(), 3);
    assert!(lot.enter_vehicle(&fourth, &clock).is_none());
}

#[test]
fn freed_compact_spot_is_reused_first() {
    let mut lot = lot_from_tags(&["compact", "regular"], FareStrategy::Linear);
    let clock = ManualClock::new(morning(8));

    let bike = Vehicle::motorcycle("M1");
    let mut ticket = lot.enter_vehicle(&bike, &clock).unwrap();
    clock.advance(TimeDelta::minutes(30));
    assert_eq!(lot.leave_vehicle(&mut ticket, &clock), Some(dec!(2.50)));

    let other = Vehicle::motorcycle("M2");
    assert_eq!(lot.enter_vehicle(&other, &clock).unwrap().spot_number(), 1);
}

#[test]
fn car_never_lands_in_compact() {
    let mut lot = lot_from_tags(&["compact", "compact"], FareStrategy::Linear);
    let clock = ManualClock::new(morning(8));
    let car = Vehicle::car("CAR001");

    assert!(lot.enter_vehicle(&car, &clock).is_none());
    assert!(lot.find_vehicle(&car).is_none());
    assert_eq!(lot.status().available, 2);
}

#[test]
fn peak_pricing_follows_entry_hour() {
    let mut lot = lot_from_tags(&["regular", "regular"], FareStrategy::peak_hours(dec!(1.5)));

    let clock = ManualClock::new(morning(9));
    let mut day = lot.enter_vehicle(&Vehicle::car("DAY"), &clock).unwrap();
    clock.advance(TimeDelta::hours(2));
    assert_eq!(lot.leave_vehicle(&mut day, &clock), Some(dec!(15.00)));

    clock.set(morning(19));
    let mut evening = lot.enter_vehicle(&Vehicle::car("EVE"), &clock).unwrap();
    clock.advance(TimeDelta::hours(2));
    assert_eq!(lot.leave_vehicle(&mut evening, &clock), Some(dec!(10.00)));
}

#[test]
fn calculator_rejects_open_ticket() {
    let mut lot = ParkingLot::sample();
    let clock = ManualClock::new(morning(10));
    let ticket = lot.enter_vehicle(&Vehicle::car("OPEN"), &clock).unwrap();

    assert!(matches!(
        lot.fare_calculator().calculate_fare(&ticket),
        Err(ParkingError::ExitNotRecorded { .. })
    ));
    assert!(ticket.duration().is_err());
    assert_eq!(ticket.entry_time(), clock.now());
}

#[test]
fn unknown_spot_tag_is_rejected() {
    assert_eq!(
        ParkingSpot::from_tag("motorhome", 9).unwrap_err(),
        ParkingError::UnknownSpotType("motorhome".to_string())
    );
    assert_eq!("handicapped".parse::<SpotKind>(), Ok(SpotKind::Handicapped));
}
