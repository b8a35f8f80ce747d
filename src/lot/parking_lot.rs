use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::manager::ParkingManager;
use crate::clock::Clock;
use crate::domain::{ParkingSpot, SpotKind, Ticket, Vehicle, VehicleSize, generate_ticket_id};
use crate::fare::FareCalculator;

/// Entry point for drivers: issues tickets on the way in and charges on the
/// way out.
///
/// Not synchronised. Callers sharing a lot across threads must wrap it in
/// their own lock.
#[derive(Debug)]
pub struct ParkingLot {
    manager: ParkingManager,
    fare_calculator: FareCalculator,
}

impl ParkingLot {
    pub fn new(manager: ParkingManager, fare_calculator: FareCalculator) -> Self {
        Self {
            manager,
            fare_calculator,
        }
    }

    /// Five spots (compact, regular, regular, handicapped, oversized) billed
    /// linearly at the default base rate.
    pub fn sample() -> Self {
        Self::new(
            ParkingManager::with_layout(&SpotKind::SAMPLE_LAYOUT),
            FareCalculator::default(),
        )
    }

    pub fn manager(&self) -> &ParkingManager {
        &self.manager
    }

    pub fn fare_calculator(&self) -> &FareCalculator {
        &self.fare_calculator
    }

    /// Park the vehicle and issue a ticket stamped with `clock`'s time.
    /// `None` when no spot fits.
    pub fn enter_vehicle(&mut self, vehicle: &Vehicle, clock: &impl Clock) -> Option<Ticket> {
        let spot = self.manager.park_vehicle(vehicle)?;
        let ticket = Ticket::new(generate_ticket_id(), vehicle.clone(), spot, clock.now());
        info!(
            ticket = ticket.id(),
            %vehicle,
            spot = ticket.spot_number(),
            "ticket issued"
        );
        Some(ticket)
    }

    /// Close the ticket, free the spot and return the fare.
    ///
    /// A ticket that already has an exit time yields `None`. The fare is
    /// charged even if the vehicle was no longer mapped to a spot.
    pub fn leave_vehicle(&mut self, ticket: &mut Ticket, clock: &impl Clock) -> Option<Decimal> {
        if ticket.is_closed() {
            debug!(ticket = ticket.id(), "vehicle already left");
            return None;
        }

        let exit = clock.now();
        ticket.set_exit_time(exit);

        if self.manager.unpark_vehicle(ticket.vehicle()).is_none() {
            warn!(
                ticket = ticket.id(),
                vehicle = %ticket.vehicle(),
                "vehicle was not parked at exit"
            );
        }

        let fare = self.fare_calculator.fare_between(ticket.entry_time(), exit);
        info!(ticket = ticket.id(), %fare, "vehicle left");
        Some(fare)
    }

    pub fn find_vehicle(&self, vehicle: &Vehicle) -> Option<&ParkingSpot> {
        self.manager.find_vehicle(vehicle)
    }

    /// Snapshot of every spot, for printing or serialising
    pub fn status(&self) -> LotStatus {
        let spots: Vec<SpotStatus> = self
            .manager
            .spots()
            .iter()
            .map(SpotStatus::from)
            .collect();
        let available = spots.iter().filter(|s| s.occupant.is_none()).count();
        LotStatus {
            total: spots.len(),
            available,
            spots,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LotStatus {
    pub total: usize,
    pub available: usize,
    pub spots: Vec<SpotStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpotStatus {
    pub number: u32,
    pub kind: SpotKind,
    pub size: VehicleSize,
    /// Licence plate of the parked vehicle
    pub occupant: Option<String>,
}

impl From<&ParkingSpot> for SpotStatus {
    fn from(spot: &ParkingSpot) -> Self {
        Self {
            number: spot.number(),
            kind: spot.kind(),
            size: spot.size(),
            occupant: spot.occupant().map(|v| v.license_plate().to_string()),
        }
    }
}
