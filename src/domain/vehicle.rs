use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// Size class used to decide whether a spot fits a vehicle.
/// Ordered SMALL < MEDIUM < LARGE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VehicleSize {
    Small,
    Medium,
    Large,
}

impl VehicleSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleSize::Small => "SMALL",
            VehicleSize::Medium => "MEDIUM",
            VehicleSize::Large => "LARGE",
        }
    }
}

impl fmt::Display for VehicleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of vehicle types the lot knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Car,
    Motorcycle,
    Truck,
}

impl VehicleKind {
    pub fn size(self) -> VehicleSize {
        match self {
            VehicleKind::Car => VehicleSize::Medium,
            VehicleKind::Motorcycle => VehicleSize::Small,
            VehicleKind::Truck => VehicleSize::Large,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Motorcycle => "Motorcycle",
            VehicleKind::Truck => "Truck",
        }
    }
}

static NEXT_VEHICLE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one constructed vehicle. Minted once per `Vehicle::new`;
/// clones share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(u64);

impl VehicleId {
    fn next() -> Self {
        Self(NEXT_VEHICLE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A vehicle identified by instance, not by plate.
///
/// Two vehicles built separately with the same plate string are different
/// vehicles as far as the lot is concerned.
#[derive(Debug, Clone)]
pub struct Vehicle {
    id: VehicleId,
    license_plate: String,
    kind: VehicleKind,
}

impl Vehicle {
    pub fn new(license_plate: impl Into<String>, kind: VehicleKind) -> Self {
        Self {
            id: VehicleId::next(),
            license_plate: license_plate.into(),
            kind,
        }
    }

    pub fn car(license_plate: impl Into<String>) -> Self {
        Self::new(license_plate, VehicleKind::Car)
    }

    pub fn motorcycle(license_plate: impl Into<String>) -> Self {
        Self::new(license_plate, VehicleKind::Motorcycle)
    }

    pub fn truck(license_plate: impl Into<String>) -> Self {
        Self::new(license_plate, VehicleKind::Truck)
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn size(&self) -> VehicleSize {
        self.kind.size()
    }
}

impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vehicle {}

impl Hash for Vehicle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind.name(), self.license_plate)
    }
}
