use std::fmt::{Display, Formatter};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    core::{charger::CurrentType, error::ComparisonError},
    quantity::{energy::KilowattHours, power::Kilowatts},
};

/// Share of the nominal capacity delivered per charge cycle, that is charging from 20% to 80%.
pub const USABLE_CAPACITY_FRACTION: f64 = 0.6;

#[must_use]
#[derive(Builder, Clone, Debug, Serialize, Deserialize)]
pub struct VehicleProfile {
    #[builder(into, default)]
    pub id: String,

    #[builder(into, default)]
    pub brand: String,

    #[builder(into, default)]
    pub model: String,

    #[serde(rename = "battery_capacity_kwh")]
    pub battery_capacity: KilowattHours,

    #[builder(default = VehicleProfile::DEFAULT_MAX_AC_POWER)]
    #[serde(rename = "max_ac_power_kw", default = "VehicleProfile::default_max_ac_power")]
    pub max_ac_power: Kilowatts,

    /// Zero when the vehicle cannot charge on DC.
    #[builder(default)]
    #[serde(rename = "max_dc_power_kw", default)]
    pub max_dc_power: Kilowatts,
}

impl VehicleProfile {
    pub const DEFAULT_MAX_AC_POWER: Kilowatts = Kilowatts::new(7.4);

    const fn default_max_ac_power() -> Kilowatts {
        Self::DEFAULT_MAX_AC_POWER
    }

    pub fn validate(&self) -> Result<(), ComparisonError> {
        ComparisonError::ensure_positive("battery capacity", self.battery_capacity.get())?;
        ComparisonError::ensure_non_negative("max AC power", self.max_ac_power.get())?;
        ComparisonError::ensure_non_negative("max DC power", self.max_dc_power.get())
    }

    /// Energy delivered by a single charge cycle.
    pub fn usable_energy(&self) -> KilowattHours {
        self.battery_capacity * USABLE_CAPACITY_FRACTION
    }

    /// Maximum power the vehicle accepts for the current type.
    pub const fn max_power(&self, current_type: CurrentType) -> Kilowatts {
        match current_type {
            CurrentType::Ac => self.max_ac_power,
            CurrentType::Dc => self.max_dc_power,
        }
    }

    #[must_use]
    pub fn supports_dc(&self) -> bool {
        self.max_dc_power.is_positive()
    }
}

impl Display for VehicleProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({} | AC: {} | DC: ",
            self.brand, self.model, self.battery_capacity, self.max_ac_power
        )?;
        if self.supports_dc() {
            write!(f, "{})", self.max_dc_power)
        } else {
            write!(f, "no)")
        }
    }
}
