use bon::bon;
use serde::Serialize;

use crate::{core::error::ComparisonError, quantity::rate::KilowattHourRate};

/// Flat month length used by every projection.
///
/// Monthly and daily figures must stay convertible into each other.
pub const DAYS_PER_MONTH: f64 = 30.0;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// How often the vehicle gets charged.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeFrequency {
    PerDay(f64),
    PerMonth(f64),
}

impl ChargeFrequency {
    /// Canonical per-day cycle count.
    #[must_use]
    pub fn cycles_per_day(self) -> f64 {
        match self {
            Self::PerDay(cycles) => cycles,
            Self::PerMonth(cycles) => cycles / DAYS_PER_MONTH,
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct UsageParameters {
    #[serde(rename = "price_per_kwh")]
    pub price: KilowattHourRate,

    pub cycles_per_day: f64,
}

#[bon]
impl UsageParameters {
    #[builder]
    pub fn new(price: KilowattHourRate, frequency: ChargeFrequency) -> Result<Self, ComparisonError> {
        let cycles_per_day = frequency.cycles_per_day();
        ComparisonError::ensure_positive("price per kWh", price.get())?;
        ComparisonError::ensure_positive("charge cycles", cycles_per_day)?;
        Ok(Self { price, cycles_per_day })
    }
}
