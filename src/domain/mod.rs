pub mod spot;
pub mod ticket;
pub mod vehicle;

pub use spot::{ParkingSpot, SpotKind};
pub use ticket::{Ticket, generate_ticket_id};
pub use vehicle::{Vehicle, VehicleId, VehicleKind, VehicleSize};
