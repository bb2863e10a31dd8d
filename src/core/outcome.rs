use serde::Serialize;

use crate::{
    core::{charger::Charger, vehicle::VehicleProfile},
    quantity::{
        cost::Cost,
        energy::KilowattHours,
        power::Kilowatts,
        price::KilowattPrice,
        time::Hours,
    },
};

/// Charging hours beyond which the requested frequency cannot fit in a day.
pub const MAX_HOURS_PER_DAY: Hours = Hours::new(24.0);

/// Hardware price per effective kilowatt.
///
/// The variant order matters: an unpriced charger sorts after any priced one.
#[derive(Copy, Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostEfficiency {
    Priced(KilowattPrice),

    /// The price is zero, meaning unknown or free.
    Unpriced,
}

impl CostEfficiency {
    #[must_use]
    pub fn new(price: Cost, effective_power: Kilowatts) -> Self {
        if price.is_positive() { Self::Priced(price / effective_power) } else { Self::Unpriced }
    }

    #[must_use]
    pub const fn priced(self) -> Option<KilowattPrice> {
        match self {
            Self::Priced(price) => Some(price),
            Self::Unpriced => None,
        }
    }
}

/// Power actually delivered to the vehicle by the charger.
pub fn effective_power(vehicle: &VehicleProfile, charger: &Charger) -> Kilowatts {
    vehicle.max_power(charger.current_type).min(charger.rated_power)
}

/// Result of pairing a vehicle with a single charger.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct ChargingOutcome<'a> {
    pub charger: &'a Charger,

    #[serde(rename = "effective_power_kw")]
    pub effective_power: Kilowatts,

    /// Time to deliver the usable energy of one cycle.
    #[serde(rename = "charge_duration_hours")]
    pub charge_duration: Hours,

    pub cost_efficiency: CostEfficiency,

    /// The requested number of cycles does not fit in 24 hours. Advisory.
    #[serde(rename = "over_24h_flag")]
    pub is_over_24h: bool,
}

impl<'a> ChargingOutcome<'a> {
    /// # Returns
    ///
    /// - [`Some`] outcome, if the charger delivers any power to the vehicle.
    /// - [`None`], if the pairing is incompatible.
    #[must_use]
    pub fn try_new(
        vehicle: &VehicleProfile,
        charger: &'a Charger,
        usable_energy: KilowattHours,
        cycles_per_day: f64,
    ) -> Option<Self> {
        let effective_power = effective_power(vehicle, charger);
        if !effective_power.is_positive() {
            return None;
        }
        let charge_duration = usable_energy / effective_power;
        Some(Self {
            charger,
            effective_power,
            charge_duration,
            cost_efficiency: CostEfficiency::new(charger.price, effective_power),
            is_over_24h: charge_duration * cycles_per_day > MAX_HOURS_PER_DAY,
        })
    }

    /// Total time spent charging per day.
    pub fn daily_charging_time(&self, cycles_per_day: f64) -> Hours {
        self.charge_duration * cycles_per_day
    }
}
