use serde::Serialize;

use crate::{
    core::{
        error::ComparisonError,
        usage::{DAYS_PER_MONTH, DAYS_PER_YEAR},
        vehicle::VehicleProfile,
    },
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
};

/// Running costs of charging a vehicle, independent of the charger.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct AggregateCosts {
    #[serde(rename = "usable_energy_kwh")]
    pub usable_energy: KilowattHours,

    pub cost_per_cycle: Cost,

    #[serde(rename = "daily_cost")]
    pub daily: Cost,

    /// Flat 30-day month.
    #[serde(rename = "monthly_cost")]
    pub monthly: Cost,

    /// 365 days, so this is **not** twelve flat months.
    #[serde(rename = "annual_cost")]
    pub annual: Cost,
}

#[instrument(skip_all, fields(%vehicle, %price, cycles_per_day = cycles_per_day))]
pub fn compute_aggregate_costs(
    vehicle: &VehicleProfile,
    price: KilowattHourRate,
    cycles_per_day: f64,
) -> Result<AggregateCosts, ComparisonError> {
    vehicle.validate()?;
    ComparisonError::ensure_positive("price per kWh", price.get())?;
    ComparisonError::ensure_positive("charge cycles", cycles_per_day)?;

    let usable_energy = vehicle.usable_energy();
    let cost_per_cycle = usable_energy * price;
    let daily = cost_per_cycle * cycles_per_day;
    let costs = AggregateCosts {
        usable_energy,
        cost_per_cycle,
        daily,
        monthly: daily * DAYS_PER_MONTH,
        annual: daily * DAYS_PER_YEAR,
    };
    debug!(?costs.cost_per_cycle, ?costs.monthly, "computed");
    Ok(costs)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{core::usage::ChargeFrequency, quantity::power::Kilowatts};

    fn vehicle() -> VehicleProfile {
        VehicleProfile::builder()
            .battery_capacity(KilowattHours::from(60.0))
            .max_ac_power(Kilowatts::from(7.4))
            .max_dc_power(Kilowatts::from(50.0))
            .build()
    }

    #[test]
    fn test_reference_vehicle() {
        let costs = compute_aggregate_costs(&vehicle(), KilowattHourRate::from(0.8), 1.0).unwrap();
        assert_abs_diff_eq!(costs.usable_energy.get(), 36.0);
        assert_abs_diff_eq!(costs.cost_per_cycle.get(), 28.8, epsilon = 1e-9);
        assert_abs_diff_eq!(costs.daily.get(), 28.8, epsilon = 1e-9);
        assert_abs_diff_eq!(costs.monthly.get(), 864.0, epsilon = 1e-9);
        assert_abs_diff_eq!(costs.annual.get(), 10512.0, epsilon = 1e-9);
    }

    #[test]
    fn test_daily_to_monthly() {
        for cycles_per_day in [0.1, 0.5, 1.0, 2.5, 6.0] {
            let costs =
                compute_aggregate_costs(&vehicle(), KilowattHourRate::from(0.35), cycles_per_day)
                    .unwrap();
            assert_abs_diff_eq!(costs.daily.get() * 30.0, costs.monthly.get(), epsilon = 1e-9);
            assert_abs_diff_eq!(costs.daily.get() * 365.0, costs.annual.get(), epsilon = 1e-9);
        }
    }

    /// Twenty cycles per month must cost twenty cycles' worth per month.
    #[test]
    fn test_monthly_frequency() {
        let cycles_per_day = ChargeFrequency::PerMonth(20.0).cycles_per_day();
        let costs =
            compute_aggregate_costs(&vehicle(), KilowattHourRate::from(0.8), cycles_per_day)
                .unwrap();
        assert_abs_diff_eq!(costs.monthly.get(), 28.8 * 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_input() {
        let zero_capacity = VehicleProfile::builder().battery_capacity(KilowattHours::ZERO).build();
        assert!(compute_aggregate_costs(&zero_capacity, KilowattHourRate::from(0.8), 1.0).is_err());
        assert!(compute_aggregate_costs(&vehicle(), KilowattHourRate::ZERO, 1.0).is_err());
        assert!(compute_aggregate_costs(&vehicle(), KilowattHourRate::from(-0.1), 1.0).is_err());
        assert!(compute_aggregate_costs(&vehicle(), KilowattHourRate::from(0.8), 0.0).is_err());
    }
}
