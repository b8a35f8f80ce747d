pub mod manager;
pub mod parking_lot;

pub use manager::ParkingManager;
pub use parking_lot::{LotStatus, ParkingLot, SpotStatus};
