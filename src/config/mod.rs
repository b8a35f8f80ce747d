use clap::ValueEnum;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;
use rust_decimal_macros::dec;
use std::path::{Path, PathBuf};

use crate::domain::{ParkingSpot, SpotKind};
use crate::error::{ParkingError, Result};
use crate::fare::{FareCalculator, FareStrategy, PeakWindow};
use crate::lot::{ParkingLot, ParkingManager};

/// Which fare strategy the lot bills with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Linear,
    Peak,
}

/// Upper bounds keep `rate * hours * multiplier` well inside `Decimal` range
const MAX_BASE_RATE: Decimal = dec!(10000);
const MAX_PEAK_MULTIPLIER: Decimal = dec!(100);

fn default_base_rate() -> f64 {
    5.0
}
fn default_peak_multiplier() -> f64 {
    1.5
}
fn default_peak_start_hour() -> u32 {
    8
}
fn default_peak_end_hour() -> u32 {
    18
}
fn default_spots() -> Vec<String> {
    SpotKind::SAMPLE_LAYOUT
        .iter()
        .map(|kind| kind.tag().to_string())
        .collect()
}

/// Lot layout and pricing read from `parkinglot.toml`
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_base_rate")]
    pub base_rate: f64,
    #[serde(default)]
    pub strategy: StrategyKind,
    #[serde(default = "default_peak_multiplier")]
    pub peak_multiplier: f64,
    #[serde(default = "default_peak_start_hour")]
    pub peak_start_hour: u32,
    #[serde(default = "default_peak_end_hour")]
    pub peak_end_hour: u32,
    #[serde(default)]
    pub verbose: bool,
    /// Spot type tags, numbered from 1 in this order
    #[serde(default = "default_spots")]
    pub spots: Vec<String>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            base_rate: default_base_rate(),
            strategy: StrategyKind::default(),
            peak_multiplier: default_peak_multiplier(),
            peak_start_hour: default_peak_start_hour(),
            peak_end_hour: default_peak_end_hour(),
            verbose: false,
            spots: default_spots(),
        }
    }
}

impl FileConfig {
    /// Read and parse one config file
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ParkingError::ConfigNotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path).map_err(|e| ParkingError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| ParkingError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// First config found on the search path, if any
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_path(&path) {
                Ok(config) => return Some(config),
                Err(e) => eprintln!("Warning: {}", e),
            }
        }
        None
    }

    pub fn fare_strategy(&self) -> Result<FareStrategy> {
        match self.strategy {
            StrategyKind::Linear => Ok(FareStrategy::Linear),
            StrategyKind::Peak => {
                let multiplier = to_decimal("peak_multiplier", self.peak_multiplier)?;
                if multiplier <= Decimal::ZERO || multiplier > MAX_PEAK_MULTIPLIER {
                    return Err(ParkingError::InvalidConfig(format!(
                        "peak_multiplier must be in (0, {}], got {}",
                        MAX_PEAK_MULTIPLIER, multiplier
                    )));
                }
                Ok(FareStrategy::PeakHours {
                    multiplier,
                    window: PeakWindow::new(self.peak_start_hour, self.peak_end_hour)?,
                })
            }
        }
    }

    pub fn fare_calculator(&self) -> Result<FareCalculator> {
        let base_rate = to_decimal("base_rate", self.base_rate)?;
        if base_rate < Decimal::ZERO || base_rate > MAX_BASE_RATE {
            return Err(ParkingError::InvalidConfig(format!(
                "base_rate must be in [0, {}], got {}",
                MAX_BASE_RATE, base_rate
            )));
        }
        Ok(FareCalculator::new(self.fare_strategy()?, base_rate))
    }

    /// Spots built through the tag factory; an unknown tag fails the lot
    pub fn parking_manager(&self) -> Result<ParkingManager> {
        let mut manager = ParkingManager::new();
        for (number, tag) in (1..).zip(&self.spots) {
            manager.add_spot(ParkingSpot::from_tag(tag, number)?);
        }
        Ok(manager)
    }

    pub fn build_lot(&self) -> Result<ParkingLot> {
        Ok(ParkingLot::new(
            self.parking_manager()?,
            self.fare_calculator()?,
        ))
    }
}

fn to_decimal(field: &str, value: f64) -> Result<Decimal> {
    Decimal::from_f64(value)
        .ok_or_else(|| ParkingError::InvalidConfig(format!("{} is out of range: {}", field, value)))
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("parkinglot.toml"));
    paths.push(PathBuf::from(".parkinglot.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("parkinglot").join("config.toml"));
        paths.push(config_dir.join("parkinglot.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".parkinglot.toml"));
    }

    paths
}
