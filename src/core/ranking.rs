use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::Serialize;

use crate::{
    core::{
        charger::Charger,
        error::ComparisonError,
        outcome::ChargingOutcome,
        vehicle::VehicleProfile,
    },
    prelude::*,
    quantity::energy::KilowattHours,
};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RankingPolicy {
    /// Fastest charge first, cheaper charger first among equally fast ones.
    #[default]
    TimeThenPrice,

    /// Lowest price per effective kilowatt first, chargers without a price last.
    CostPerEffectiveKw,
}

impl Display for RankingPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TimeThenPrice => write!(f, "time, then price"),
            Self::CostPerEffectiveKw => write!(f, "price per effective kW"),
        }
    }
}

/// Rank the compatible chargers for the vehicle.
///
/// Incompatible chargers are skipped without an error, so an empty catalog or a catalog
/// without any compatible charger produces an empty ranking. Sorting is stable: ties keep
/// the catalog order.
#[instrument(skip_all, fields(n_chargers = chargers.len(), ?policy))]
pub fn rank_chargers<'a>(
    vehicle: &VehicleProfile,
    chargers: &'a [Charger],
    usable_energy: KilowattHours,
    cycles_per_day: f64,
    policy: RankingPolicy,
) -> Result<Vec<ChargingOutcome<'a>>, ComparisonError> {
    vehicle.validate()?;
    ComparisonError::ensure_positive("usable energy", usable_energy.get())?;
    ComparisonError::ensure_positive("charge cycles", cycles_per_day)?;

    let outcomes = chargers.iter().filter_map(|charger| {
        let outcome = ChargingOutcome::try_new(vehicle, charger, usable_energy, cycles_per_day);
        if outcome.is_none() {
            debug!(%charger, "incompatible, skipping");
        }
        outcome
    });
    let ranking = match policy {
        RankingPolicy::TimeThenPrice => outcomes
            .sorted_by_key(|outcome| (outcome.charge_duration, outcome.charger.price))
            .collect_vec(),
        RankingPolicy::CostPerEffectiveKw => {
            outcomes.sorted_by_key(|outcome| outcome.cost_efficiency).collect_vec()
        }
    };
    debug!(n_compatible = ranking.len(), "ranked");
    Ok(ranking)
}
