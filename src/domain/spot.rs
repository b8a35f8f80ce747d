use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::vehicle::{Vehicle, VehicleSize};
use crate::error::{ParkingError, Result};

/// Spot classification, keyed by the tags accepted by the spot factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotKind {
    Regular,
    /// Motorcycles only, whatever the declared size
    Compact,
    Oversized,
    Handicapped,
}

impl SpotKind {
    pub const ALL: [SpotKind; 4] = [
        SpotKind::Regular,
        SpotKind::Compact,
        SpotKind::Oversized,
        SpotKind::Handicapped,
    ];

    /// Layout used by the demo lot and the default config
    pub const SAMPLE_LAYOUT: [SpotKind; 5] = [
        SpotKind::Compact,
        SpotKind::Regular,
        SpotKind::Regular,
        SpotKind::Handicapped,
        SpotKind::Oversized,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            SpotKind::Regular => "regular",
            SpotKind::Compact => "compact",
            SpotKind::Oversized => "oversized",
            SpotKind::Handicapped => "handicapped",
        }
    }

    pub fn size(self) -> VehicleSize {
        match self {
            SpotKind::Regular => VehicleSize::Medium,
            SpotKind::Compact => VehicleSize::Small,
            SpotKind::Oversized => VehicleSize::Large,
            SpotKind::Handicapped => VehicleSize::Medium,
        }
    }

    /// Accommodation rule: anything at or below the spot size, except
    /// compact spots which require an exact SMALL vehicle.
    pub fn accepts(self, vehicle: &Vehicle) -> bool {
        match self {
            SpotKind::Compact => vehicle.size() == VehicleSize::Small,
            _ => vehicle.size() <= self.size(),
        }
    }
}

impl FromStr for SpotKind {
    type Err = ParkingError;

    fn from_str(tag: &str) -> Result<Self> {
        SpotKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| ParkingError::UnknownSpotType(tag.to_string()))
    }
}

impl fmt::Display for SpotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single parking spot holding at most one vehicle
#[derive(Debug, Clone)]
pub struct ParkingSpot {
    number: u32,
    kind: SpotKind,
    occupant: Option<Vehicle>,
}

impl ParkingSpot {
    pub fn new(number: u32, kind: SpotKind) -> Self {
        Self {
            number,
            kind,
            occupant: None,
        }
    }

    /// Build a spot from its type tag (`regular`, `compact`, `oversized`,
    /// `handicapped`). Unknown tags are rejected.
    pub fn from_tag(tag: &str, number: u32) -> Result<Self> {
        Ok(Self::new(number, tag.parse()?))
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn kind(&self) -> SpotKind {
        self.kind
    }

    pub fn size(&self) -> VehicleSize {
        self.kind.size()
    }

    pub fn occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_ref()
    }

    pub fn is_available(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn can_accommodate(&self, vehicle: &Vehicle) -> bool {
        self.kind.accepts(vehicle)
    }

    /// Park `vehicle` here. Leaves the spot untouched and returns false if
    /// it is taken or the vehicle does not fit.
    pub fn occupy(&mut self, vehicle: Vehicle) -> bool {
        if self.is_available() && self.can_accommodate(&vehicle) {
            self.occupant = Some(vehicle);
            true
        } else {
            false
        }
    }

    /// Clear the spot, handing back whoever was in it.
    pub fn vacate(&mut self) -> Option<Vehicle> {
        self.occupant.take()
    }
}

impl fmt::Display for ParkingSpot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Spot {} ({}) - ", self.number, self.size())?;
        match &self.occupant {
            Some(vehicle) => write!(f, "Occupied by {}", vehicle),
            None => f.write_str("Available"),
        }
    }
}
