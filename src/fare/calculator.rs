use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use super::strategy::FareStrategy;
use crate::domain::Ticket;
use crate::error::Result;

pub const DEFAULT_BASE_RATE: Decimal = dec!(5.00);

/// Binds one pricing strategy to a base hourly rate
#[derive(Debug, Clone)]
pub struct FareCalculator {
    strategy: FareStrategy,
    base_rate: Decimal,
}

impl FareCalculator {
    pub fn new(strategy: FareStrategy, base_rate: Decimal) -> Self {
        Self {
            strategy,
            base_rate,
        }
    }

    pub fn with_strategy(strategy: FareStrategy) -> Self {
        Self::new(strategy, DEFAULT_BASE_RATE)
    }

    pub fn strategy(&self) -> &FareStrategy {
        &self.strategy
    }

    pub fn base_rate(&self) -> Decimal {
        self.base_rate
    }

    /// Fare owed on a closed ticket. Fails if the exit time is unset.
    pub fn calculate_fare(&self, ticket: &Ticket) -> Result<Decimal> {
        let exit = ticket.require_exit()?;
        Ok(self.fare_between(ticket.entry_time(), exit))
    }

    pub fn fare_between(&self, entry: NaiveDateTime, exit: NaiveDateTime) -> Decimal {
        let fare = self.strategy.fare(entry, exit, self.base_rate);
        debug!(
            strategy = self.strategy.name(),
            base_rate = %self.base_rate,
            %fare,
            "computed fare"
        );
        fare
    }
}

impl Default for FareCalculator {
    fn default() -> Self {
        Self::with_strategy(FareStrategy::Linear)
    }
}
