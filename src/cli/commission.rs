use charge_compare::{
    catalog::Catalog,
    core::compute_commission_projection,
    prelude::*,
    quantity::{percent::Percent, rate::KilowattHourRate},
};
use clap::Parser;

use crate::{
    cli::usage::{FrequencyArgs, OutputArgs},
    tables::build_commission_table,
};

#[derive(Parser)]
pub struct CommissionArgs {
    /// Vehicle identifier from the catalog.
    #[clap(long = "vehicle", env = "VEHICLE_ID")]
    pub vehicle_id: String,

    /// Energy price per kilowatt-hour charged to the driver.
    #[clap(long = "sale-price-per-kwh", env = "SALE_PRICE_PER_KWH")]
    pub sale_price: KilowattHourRate,

    #[clap(flatten)]
    pub frequency: FrequencyArgs,

    /// Share of the gross revenue paid to the hosting customer, `0..=100`.
    #[clap(long = "customer-share-percent", env = "CUSTOMER_SHARE_PERCENT")]
    pub customer_share: Percent,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[instrument(skip_all, fields(vehicle_id = %args.vehicle_id))]
pub fn commission(catalog: &Catalog, args: &CommissionArgs) -> Result {
    let vehicle = catalog.vehicle(&args.vehicle_id)?;
    let cycles_per_day = args
        .frequency
        .frequency()
        .context("charge frequency is required")?
        .cycles_per_day();
    let report = compute_commission_projection(
        vehicle,
        args.sale_price,
        cycles_per_day,
        args.customer_share,
    )?;

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{vehicle}");
        println!("{}", build_commission_table(&report));
    }
    Ok(())
}
