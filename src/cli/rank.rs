use charge_compare::{
    catalog::Catalog,
    core::{RankingPolicy, UsageParameters, compare_catalog},
    prelude::*,
};
use clap::Parser;

use crate::{
    cli::usage::{EnergyPriceArgs, FrequencyArgs, OutputArgs},
    tables::{build_costs_table, build_outcomes_table},
};

#[derive(Parser)]
pub struct RankArgs {
    /// Vehicle identifier from the catalog.
    #[clap(long = "vehicle", env = "VEHICLE_ID")]
    pub vehicle_id: String,

    #[clap(flatten)]
    pub price: EnergyPriceArgs,

    #[clap(flatten)]
    pub frequency: FrequencyArgs,

    #[clap(long, env = "RANKING_POLICY", default_value = "time-then-price")]
    pub policy: RankingPolicy,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[instrument(skip_all, fields(vehicle_id = %args.vehicle_id))]
pub fn rank(catalog: &Catalog, args: &RankArgs) -> Result {
    let vehicle = catalog.vehicle(&args.vehicle_id)?;
    let usage = UsageParameters::builder()
        .price(args.price.price)
        .frequency(args.frequency.frequency().context("charge frequency is required")?)
        .build()?;
    let report = compare_catalog(vehicle, &catalog.chargers, usage, args.policy)?;

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!("{vehicle}");
    println!("{}", build_costs_table(&report.costs));
    if report.outcomes.is_empty() {
        warn!("no compatible chargers in the catalog");
    } else {
        println!("{}", build_outcomes_table(&report.outcomes, usage.cycles_per_day));
    }
    Ok(())
}
