mod cli;
mod fmt;
mod tables;

use charge_compare::{catalog::Catalog, prelude::*};
use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, commission, compare, rank},
    tables::{build_chargers_table, build_vehicles_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let catalog = Catalog::read_from(&args.catalog)?;

    match args.command {
        Command::Catalog => {
            println!("{}", build_vehicles_table(&catalog.vehicles));
            println!("{}", build_chargers_table(&catalog.chargers));
        }
        Command::Rank(args) => {
            rank(&catalog, &args)?;
        }
        Command::Compare(args) => {
            compare(&catalog, &args)?;
        }
        Command::Commission(args) => {
            commission(&catalog, &args)?;
        }
    }

    info!("done!");
    Ok(())
}
