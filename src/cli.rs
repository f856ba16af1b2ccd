use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use tariff_detect::{
    catalog::{Contract, ContractChoice, CustomerClass},
    core::parse_timestamp,
    matcher::CandidatePolicy,
    quantity::{cost::Won, energy::KilowattHours},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Settings file, see the README for the keys.
    #[clap(long, env = "TARIFF_DETECT_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Override the candidate plans from the settings.
    #[clap(long, env = "TARIFF_DETECT_CANDIDATES")]
    pub candidates: Option<CandidatePolicy>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the validated tariff catalog.
    #[clap(name = "catalog")]
    Catalog,

    /// Classify a timestamp into season, load tier, and policy period.
    #[clap(name = "classify")]
    Classify(ClassifyArgs),

    /// Find the rate plan that best reproduces an actual bill.
    #[clap(name = "match")]
    Match(MatchArgs),
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Metering timestamp in local time, for example `2024-07-15 03:00`.
    #[clap(long = "at", value_parser = parse_timestamp)]
    pub timestamp: NaiveDateTime,

    /// Customer class of the contract to show the unit price for.
    #[clap(long, default_value = "a", ignore_case = true)]
    pub class: CustomerClass,

    /// Contract choice to show the unit price for.
    #[clap(long, default_value = "III", ignore_case = true)]
    pub choice: ContractChoice,
}

impl ClassifyArgs {
    pub const fn contract(&self) -> Contract {
        Contract { class: self.class, choice: self.choice }
    }
}

#[derive(Parser)]
pub struct MatchArgs {
    /// Metering timestamp in local time, for example `2024-07-15 03:00`.
    #[clap(long = "at", value_parser = parse_timestamp)]
    pub timestamp: NaiveDateTime,

    /// Consumed energy in the interval.
    #[clap(long = "energy-kwh")]
    pub energy: KilowattHours,

    /// Billed amount in won.
    #[clap(long = "actual-cost")]
    pub actual_cost: Won,
}
