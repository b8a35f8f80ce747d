//! Building a lot from a TOML config on disk.

use chrono::{NaiveDate, TimeDelta};
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

use parkinglot::config::{FileConfig, StrategyKind};
use parkinglot::{ManualClock, ParkingError, SpotKind, Vehicle};

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn peak_lot_from_file() {
    let file = config_file(
        r#"
        base_rate = 3.0
        strategy = "peak"
        peak_multiplier = 2.0
        spots = ["oversized", "compact"]
        "#,
    );
    let config = FileConfig::from_path(file.path()).unwrap();
    assert_eq!(config.strategy, StrategyKind::Peak);

    let mut lot = config.build_lot().unwrap();
    let kinds: Vec<SpotKind> = lot.manager().spots().iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, vec![SpotKind::Oversized, SpotKind::Compact]);

    let entry = NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let clock = ManualClock::new(entry);
    let mut ticket = lot.enter_vehicle(&Vehicle::truck("BIG1"), &clock).unwrap();
    clock.advance(TimeDelta::hours(1));
    assert_eq!(lot.leave_vehicle(&mut ticket, &clock), Some(dec!(6)));
}

#[test]
fn unknown_tag_in_file_fails_build() {
    let file = config_file(r#"spots = ["regular", "helipad"]"#);
    let config = FileConfig::from_path(file.path()).unwrap();
    assert_eq!(
        config.build_lot().unwrap_err(),
        ParkingError::UnknownSpotType("helipad".to_string())
    );
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    assert_eq!(
        FileConfig::from_path(&path).unwrap_err(),
        ParkingError::ConfigNotFound(path)
    );
}

#[test]
fn malformed_file_is_a_parse_error() {
    let file = config_file("base_rate = \"five\"");
    assert!(matches!(
        FileConfig::from_path(file.path()),
        Err(ParkingError::ConfigParse { .. })
    ));
}

#[test]
fn unreadable_path_is_a_read_error() {
    // A directory exists but cannot be read as a file
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        FileConfig::from_path(dir.path()),
        Err(ParkingError::ConfigRead { .. })
    ));
}

#[test]
fn huge_rate_in_file_is_rejected_before_billing() {
    let file = config_file("base_rate = 1e28");
    let config = FileConfig::from_path(file.path()).unwrap();
    assert!(matches!(
        config.build_lot(),
        Err(ParkingError::InvalidConfig(_))
    ));
}
