//! countrydb — load world country reference data into SQLite
//!
//! Usage examples
//! --------------
//!
//! - Create the schema
//!   $ countrydb --db countries.sqlite init
//!
//! - Seed everything under ./data, skipping countries that fail
//!   $ countrydb --data ./data seed --keep-going
//!
//! - Re-apply one language after fixing its files
//!   $ countrydb --data ./data translate ar
//!
//! - Row counts
//!   $ countrydb stats
//!
//! `--db` and `--data` may also come from `COUNTRYDB_PATH` / `COUNTRYDB_DATA`.
//! Logging honours `RUST_LOG`, falling back to `--log-level`.
mod args;
mod logging;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use countrydb_core::pipeline::{self, FailurePolicy, SeedOptions, SeedReport};
use countrydb_core::{Builder, DbStats, SeedSource, SqliteStore, Store};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init_tracing(&args.log_level)?;

    let store = SqliteStore::open(&args.db)
        .with_context(|| format!("opening database {}", args.db.display()))?;
    // Every command works on a bootstrapped schema.
    store.migrate().context("creating tables")?;

    match args.command {
        Commands::Init => {
            info!(db = %args.db.display(), "schema ready");
            println!("Schema ready in {}", args.db.display());
        }

        Commands::Seed { keep_going } => {
            let source = open_source(&args.data)?;
            let options = SeedOptions {
                on_country_failure: if keep_going {
                    FailurePolicy::Continue
                } else {
                    FailurePolicy::Halt
                },
            };
            let mut builder = Builder::new(store);
            let report = pipeline::seed(&mut builder, &source, &options)
                .context("seeding failed; the failing unit was rolled back")?;
            print_report(&report);
            print_stats(&builder.store().stats()?);
        }

        Commands::Translate { locale } => {
            let source = open_source(&args.data)?;
            let mut builder = Builder::new(store);
            let report = pipeline::translate(&mut builder, &source, &locale)
                .with_context(|| format!("translating locale {locale}"))?;
            print_report(&report);
        }

        Commands::Stats => print_stats(&store.stats()?),
    }

    Ok(())
}

fn open_source(dir: &std::path::Path) -> anyhow::Result<SeedSource> {
    SeedSource::open(dir).with_context(|| format!("opening seed data {}", dir.display()))
}

fn print_report(report: &SeedReport) {
    println!("Seed report:");
    println!("  Regions: {}", report.regions);
    println!("  Countries: {}", report.countries);
    println!("  Region translations: {}", report.region_translations);
    println!("  Country translations: {}", report.country_translations);
    if !report.failed_countries.is_empty() {
        println!("  Failed countries: {}", report.failed_countries.join(", "));
    }
    for (locale, iso) in &report.skipped_country_translations {
        println!("  Skipped translation: {iso} ({locale})");
    }
}

fn print_stats(stats: &DbStats) {
    println!("Database statistics:");
    println!("  Regions: {} ({} translations)", stats.regions, stats.region_translations);
    println!("  Countries: {} ({} translations)", stats.countries, stats.country_translations);
    println!("  Extras: {}", stats.extras);
    println!("  Coordinates: {}", stats.coordinates);
    println!("  Geographies: {}", stats.geographies);
}
