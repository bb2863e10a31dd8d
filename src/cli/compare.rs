use charge_compare::{
    catalog::Catalog,
    core::{
        AggregateCosts,
        ChargingOutcome,
        VehicleProfile,
        compute_aggregate_costs,
        compute_single_comparison,
    },
    prelude::*,
};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::usage::{EnergyPriceArgs, FrequencyArgs, OutputArgs},
    tables::{build_costs_table, build_outcomes_table},
};

#[derive(Parser)]
pub struct CompareArgs {
    /// Vehicle identifier from the catalog.
    #[clap(long = "vehicle", env = "VEHICLE_ID")]
    pub vehicle_id: String,

    /// Charger identifier from the catalog.
    #[clap(long = "charger", env = "CHARGER_ID")]
    pub charger_id: String,

    #[clap(flatten)]
    pub price: EnergyPriceArgs,

    #[clap(flatten)]
    pub frequency: FrequencyArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Serialize)]
struct DirectComparison<'a> {
    vehicle: &'a VehicleProfile,
    cycles_per_day: f64,
    outcome: ChargingOutcome<'a>,
    costs: AggregateCosts,
}

#[instrument(skip_all, fields(vehicle_id = %args.vehicle_id, charger_id = %args.charger_id))]
pub fn compare(catalog: &Catalog, args: &CompareArgs) -> Result {
    let vehicle = catalog.vehicle(&args.vehicle_id)?;
    let charger = catalog.charger(&args.charger_id)?;
    let cycles_per_day = args
        .frequency
        .frequency()
        .context("charge frequency is required")?
        .cycles_per_day();

    let outcome = compute_single_comparison(vehicle, charger, args.price.price, cycles_per_day)
        .with_context(|| format!("failed to compare `{vehicle}` with `{charger}`"))?;
    let costs = compute_aggregate_costs(vehicle, args.price.price, cycles_per_day)?;

    if args.output.json {
        let comparison = DirectComparison { vehicle, cycles_per_day, outcome, costs };
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }
    println!("{vehicle}");
    println!("{}", build_outcomes_table(&[outcome], cycles_per_day));
    println!("{}", build_costs_table(&costs));
    Ok(())
}
