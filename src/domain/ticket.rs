use chrono::{NaiveDateTime, TimeDelta};
use std::fmt;
use uuid::Uuid;

use super::spot::{ParkingSpot, SpotKind};
use super::vehicle::Vehicle;
use crate::error::{ParkingError, Result};

/// Generate a ticket id: `TICKET-` followed by 8 uppercase hex characters.
pub fn generate_ticket_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("TICKET-{}", hex[..8].to_uppercase())
}

/// Proof of entry handed to the driver.
///
/// The exit time is set once, when the vehicle leaves.
#[derive(Debug, Clone)]
pub struct Ticket {
    id: String,
    vehicle: Vehicle,
    spot_number: u32,
    spot_kind: SpotKind,
    entry_time: NaiveDateTime,
    exit_time: Option<NaiveDateTime>,
}

impl Ticket {
    pub fn new(
        id: impl Into<String>,
        vehicle: Vehicle,
        spot: &ParkingSpot,
        entry_time: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            vehicle,
            spot_number: spot.number(),
            spot_kind: spot.kind(),
            entry_time,
            exit_time: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn spot_number(&self) -> u32 {
        self.spot_number
    }

    pub fn spot_kind(&self) -> SpotKind {
        self.spot_kind
    }

    pub fn entry_time(&self) -> NaiveDateTime {
        self.entry_time
    }

    pub fn exit_time(&self) -> Option<NaiveDateTime> {
        self.exit_time
    }

    pub fn is_closed(&self) -> bool {
        self.exit_time.is_some()
    }

    pub fn set_exit_time(&mut self, exit_time: NaiveDateTime) {
        self.exit_time = Some(exit_time);
    }

    /// Exit time, or `ExitNotRecorded` if the vehicle is still inside.
    pub fn require_exit(&self) -> Result<NaiveDateTime> {
        self.exit_time.ok_or_else(|| ParkingError::ExitNotRecorded {
            ticket: self.id.clone(),
        })
    }

    /// Time between entry and exit.
    pub fn duration(&self) -> Result<TimeDelta> {
        Ok(self.require_exit()? - self.entry_time)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ticket {} - {} at Spot {} ({})",
            self.id, self.vehicle, self.spot_number, self.spot_kind
        )
    }
}
