//! Usage-related CLI arguments.

use charge_compare::{core::ChargeFrequency, quantity::rate::KilowattHourRate};
use clap::Parser;

#[must_use]
#[derive(Copy, Clone, Parser)]
#[group(required = true, multiple = false)]
pub struct FrequencyArgs {
    /// Charge cycles per day, fractions allowed.
    #[clap(long, env = "CYCLES_PER_DAY")]
    pub cycles_per_day: Option<f64>,

    /// Charge cycles per month, converted with a flat 30-day month.
    #[clap(long, env = "CYCLES_PER_MONTH")]
    pub cycles_per_month: Option<f64>,
}

impl FrequencyArgs {
    pub const fn frequency(self) -> Option<ChargeFrequency> {
        match (self.cycles_per_day, self.cycles_per_month) {
            (Some(cycles), _) => Some(ChargeFrequency::PerDay(cycles)),
            (None, Some(cycles)) => Some(ChargeFrequency::PerMonth(cycles)),
            (None, None) => None,
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct EnergyPriceArgs {
    /// Energy price per kilowatt-hour.
    #[clap(long = "price-per-kwh", env = "PRICE_PER_KWH")]
    pub price: KilowattHourRate,
}

#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct OutputArgs {
    /// Print the report as JSON instead of tables.
    #[clap(long)]
    pub json: bool,
}
