//! Charging comparison engine.
//!
//! Pure functions over a vehicle profile, a charger catalog and usage parameters.
//! Nothing here performs I/O: the same inputs always produce the same report.

mod charger;
mod commission;
mod comparison;
mod costs;
mod error;
mod outcome;
mod ranking;
mod usage;
mod vehicle;

pub use self::{
    charger::{Charger, CurrentType},
    commission::{CommissionReport, compute_commission_projection},
    comparison::{ComparisonReport, compare_catalog, compute_single_comparison},
    costs::{AggregateCosts, compute_aggregate_costs},
    error::ComparisonError,
    outcome::{ChargingOutcome, CostEfficiency, MAX_HOURS_PER_DAY, effective_power},
    ranking::{RankingPolicy, rank_chargers},
    usage::{ChargeFrequency, DAYS_PER_MONTH, DAYS_PER_YEAR, UsageParameters},
    vehicle::{USABLE_CAPACITY_FRACTION, VehicleProfile},
};
