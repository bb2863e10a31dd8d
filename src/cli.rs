mod commission;
mod compare;
mod rank;
mod usage;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use self::{
    commission::{CommissionArgs, commission},
    compare::{CompareArgs, compare},
    rank::{RankArgs, rank},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Vehicle and charger catalog in TOML.
    #[clap(long, env = "CATALOG_PATH", default_value = "catalog.toml", global = true)]
    pub catalog: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the catalog vehicles and chargers.
    #[clap(name = "catalog")]
    Catalog,

    /// Main command: rank all catalog chargers for a vehicle.
    #[clap(name = "rank")]
    Rank(Box<RankArgs>),

    /// Compare a single vehicle and charger pairing.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Project the monthly commission for a customer hosting a charger.
    #[clap(name = "commission")]
    Commission(Box<CommissionArgs>),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }
}
