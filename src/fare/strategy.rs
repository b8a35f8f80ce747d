use chrono::{NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{ParkingError, Result};

pub const DEFAULT_PEAK_MULTIPLIER: Decimal = dec!(1.5);

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Hours of the day, inclusive on both ends, during which entries are
/// billed at the peak multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakWindow {
    start_hour: u32,
    end_hour: u32,
}

impl PeakWindow {
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self> {
        if start_hour > 23 || end_hour > 23 {
            return Err(ParkingError::InvalidConfig(format!(
                "peak hours must be within 0-23, got {}-{}",
                start_hour, end_hour
            )));
        }
        if start_hour > end_hour {
            return Err(ParkingError::InvalidConfig(format!(
                "peak window starts after it ends: {}-{}",
                start_hour, end_hour
            )));
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn contains(&self, hour: u32) -> bool {
        (self.start_hour..=self.end_hour).contains(&hour)
    }
}

impl Default for PeakWindow {
    /// 08:00 through 18:59
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 18,
        }
    }
}

/// Pricing model applied to a completed stay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FareStrategy {
    /// `base_rate` per hour, prorated to the millisecond
    #[default]
    Linear,
    /// Linear fare, scaled by `multiplier` when the stay *began* inside
    /// `window`. The exit hour and any overlap with the window are ignored,
    /// so a 17:59 entry leaving at 02:00 pays peak rate for the whole stay.
    PeakHours {
        multiplier: Decimal,
        window: PeakWindow,
    },
}

impl FareStrategy {
    /// Peak-hour pricing over the default 8-18 window
    pub fn peak_hours(multiplier: Decimal) -> Self {
        FareStrategy::PeakHours {
            multiplier,
            window: PeakWindow::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FareStrategy::Linear => "linear",
            FareStrategy::PeakHours { .. } => "peak",
        }
    }

    pub fn fare(&self, entry: NaiveDateTime, exit: NaiveDateTime, base_rate: Decimal) -> Decimal {
        let linear = base_rate * hours_between(entry, exit);
        match self {
            FareStrategy::Linear => linear,
            FareStrategy::PeakHours { multiplier, window } => {
                if window.contains(entry.hour()) {
                    linear * *multiplier
                } else {
                    linear
                }
            }
        }
    }
}

/// Elapsed time in fractional hours
fn hours_between(entry: NaiveDateTime, exit: NaiveDateTime) -> Decimal {
    let millis = (exit - entry).num_milliseconds();
    Decimal::from(millis) / Decimal::from(MILLIS_PER_HOUR)
}
