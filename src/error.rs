use std::path::PathBuf;
use thiserror::Error;

/// Faults raised by the parking lot model.
///
/// Ordinary misses (no free spot, vehicle not parked, ticket already closed)
/// are `None` results, never one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParkingError {
    #[error("Unknown spot type: {0}")]
    UnknownSpotType(String),

    #[error("Vehicle hasn't left yet: ticket {ticket} has no exit time")]
    ExitNotRecorded { ticket: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config file not found: {0:?}")]
    ConfigNotFound(PathBuf),

    #[error("Failed to read config file {path:?}: {message}")]
    ConfigRead { path: PathBuf, message: String },

    #[error("Failed to parse config file {path:?}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, ParkingError>;
