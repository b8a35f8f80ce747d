use std::collections::HashMap;
use tracing::{debug, warn};

use crate::domain::{ParkingSpot, SpotKind, Vehicle, VehicleId};

/// Owns the spots and tracks which vehicle sits where.
///
/// Spots are scanned in insertion order; the first one that is free and
/// accepts the vehicle wins (first-fit, not best-fit).
#[derive(Debug, Default)]
pub struct ParkingManager {
    spots: Vec<ParkingSpot>,
    /// Vehicle identity -> index into `spots`
    occupancy: HashMap<VehicleId, usize>,
}

impl ParkingManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manager with one spot per entry, numbered from 1 in order
    pub fn with_layout(layout: &[SpotKind]) -> Self {
        let mut manager = Self::new();
        for (number, kind) in (1..).zip(layout) {
            manager.add_spot(ParkingSpot::new(number, *kind));
        }
        manager
    }

    /// Append a spot. Duplicate spot numbers are not checked.
    pub fn add_spot(&mut self, spot: ParkingSpot) {
        self.spots.push(spot);
    }

    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }

    pub fn available_spots(&self) -> Vec<&ParkingSpot> {
        self.spots.iter().filter(|spot| spot.is_available()).collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.occupancy.len()
    }

    /// Park `vehicle` in the first free spot that fits it.
    ///
    /// Returns `None` without touching any spot when nothing qualifies, or
    /// when this vehicle is already parked.
    pub fn park_vehicle(&mut self, vehicle: &Vehicle) -> Option<&ParkingSpot> {
        if self.occupancy.contains_key(&vehicle.id()) {
            debug!(%vehicle, "vehicle already parked");
            return None;
        }

        let Some(index) = self
            .spots
            .iter()
            .position(|spot| spot.is_available() && spot.can_accommodate(vehicle))
        else {
            warn!(%vehicle, size = %vehicle.size(), "no spot available");
            return None;
        };

        if !self.spots[index].occupy(vehicle.clone()) {
            return None;
        }
        self.occupancy.insert(vehicle.id(), index);

        let spot = &self.spots[index];
        debug!(%vehicle, spot = spot.number(), kind = %spot.kind(), "spot occupied");
        Some(spot)
    }

    /// Free the spot held by `vehicle`. Returns `None` if it is not parked.
    pub fn unpark_vehicle(&mut self, vehicle: &Vehicle) -> Option<&ParkingSpot> {
        let index = *self.occupancy.get(&vehicle.id())?;
        let spot = self.spots.get_mut(index)?;
        if spot.is_available() {
            return None;
        }

        spot.vacate();
        self.occupancy.remove(&vehicle.id());

        let spot = &self.spots[index];
        debug!(%vehicle, spot = spot.number(), "spot vacated");
        Some(spot)
    }

    pub fn find_vehicle(&self, vehicle: &Vehicle) -> Option<&ParkingSpot> {
        self.occupancy
            .get(&vehicle.id())
            .and_then(|&index| self.spots.get(index))
    }
}
