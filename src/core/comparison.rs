use serde::Serialize;

use crate::{
    core::{
        charger::Charger,
        costs::{AggregateCosts, compute_aggregate_costs},
        error::ComparisonError,
        outcome::ChargingOutcome,
        ranking::{RankingPolicy, rank_chargers},
        usage::UsageParameters,
        vehicle::VehicleProfile,
    },
    prelude::*,
    quantity::rate::KilowattHourRate,
};

/// Everything the presentation layer needs to show a catalog comparison.
#[derive(Debug, Serialize)]
pub struct ComparisonReport<'a> {
    pub vehicle: &'a VehicleProfile,
    pub usage: UsageParameters,
    pub policy: RankingPolicy,
    pub costs: AggregateCosts,
    pub outcomes: Vec<ChargingOutcome<'a>>,
}

/// Compare the whole charger catalog for the vehicle.
#[instrument(skip_all, fields(vehicle = %vehicle))]
pub fn compare_catalog<'a>(
    vehicle: &'a VehicleProfile,
    chargers: &'a [Charger],
    usage: UsageParameters,
    policy: RankingPolicy,
) -> Result<ComparisonReport<'a>, ComparisonError> {
    let costs = compute_aggregate_costs(vehicle, usage.price, usage.cycles_per_day)?;
    let outcomes =
        rank_chargers(vehicle, chargers, costs.usable_energy, usage.cycles_per_day, policy)?;
    info!(n_chargers = chargers.len(), n_compatible = outcomes.len(), "compared");
    Ok(ComparisonReport { vehicle, usage, policy, costs, outcomes })
}

/// Compare a single vehicle and charger pairing.
///
/// Unlike [`rank_chargers`], an incompatible pairing is an error here, since there is nothing
/// else to show instead.
#[instrument(skip_all, fields(%vehicle, %charger))]
pub fn compute_single_comparison<'a>(
    vehicle: &VehicleProfile,
    charger: &'a Charger,
    price: KilowattHourRate,
    cycles_per_day: f64,
) -> Result<ChargingOutcome<'a>, ComparisonError> {
    vehicle.validate()?;
    charger.validate()?;
    ComparisonError::ensure_positive("price per kWh", price.get())?;
    ComparisonError::ensure_positive("charge cycles", cycles_per_day)?;

    ChargingOutcome::try_new(vehicle, charger, vehicle.usable_energy(), cycles_per_day)
        .ok_or(ComparisonError::Incompatible { current_type: charger.current_type })
}
