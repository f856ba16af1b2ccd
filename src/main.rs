mod cli;
mod tables;

use clap::{Parser, crate_version};
use tariff_detect::{
    config::Settings,
    core::{Classification, UsageRecord},
    prelude::*,
};

use crate::{
    cli::{Args, Command},
    tables::{build_catalog_table, build_classification_table, build_match_table},
};

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let mut settings = match &args.settings {
        Some(path) => Settings::from_path(path)?,
        None => Settings::default(),
    };
    if let Some(candidates) = args.candidates {
        settings.candidates = candidates;
    }
    let catalog = settings.load_catalog()?;

    match args.command {
        Command::Catalog => {
            println!("{}", build_catalog_table(&catalog));
        }
        Command::Classify(args) => {
            let classification = Classification::of(args.timestamp, settings.cutover)?;
            let unit_price = catalog.unit_price(args.contract(), classification)?;
            println!(
                "{}",
                build_classification_table(
                    args.timestamp,
                    classification,
                    args.contract(),
                    unit_price
                ),
            );
        }
        Command::Match(args) => {
            let record =
                UsageRecord::try_new(args.timestamp, args.energy, Some(args.actual_cost))?;
            let result = settings
                .matcher(&catalog)
                .best_matching_plan(&record)
                .context("failed to match the record")?;
            info!(best = %result.best, deviation = %result.deviation, "matched");
            println!("{}", build_match_table(&result));
        }
    }

    info!("done!");
    Ok(())
}
