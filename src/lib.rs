//! parkinglot - In-memory parking lot: first-fit spot allocation and
//! pluggable fare strategies

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod fare;
pub mod lot;

pub use clock::{Clock, ManualClock, SystemClock};
pub use domain::{ParkingSpot, SpotKind, Ticket, Vehicle, VehicleKind, VehicleSize};
pub use error::{ParkingError, Result};
pub use fare::{FareCalculator, FareStrategy, PeakWindow};
pub use lot::{LotStatus, ParkingLot, ParkingManager};
