pub mod calculator;
pub mod strategy;

pub use calculator::{DEFAULT_BASE_RATE, FareCalculator};
pub use strategy::{DEFAULT_PEAK_MULTIPLIER, FareStrategy, PeakWindow};
