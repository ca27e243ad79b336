use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for countrydb
#[derive(Debug, Parser)]
#[command(
    name = "countrydb",
    version,
    about = "Seed a SQLite database with world country reference data"
)]
pub struct CliArgs {
    /// Path to the SQLite database file (created if missing)
    #[arg(long = "db", env = "COUNTRYDB_PATH", default_value = "countries.sqlite", global = true)]
    pub db: PathBuf,

    /// Seed data directory (regions.json, countries/, translations/<locale>/)
    #[arg(short = 'd', long = "data", env = "COUNTRYDB_DATA", default_value = "data", global = true)]
    pub data: PathBuf,

    /// Log filter used when RUST_LOG is not set (e.g. info, debug, countrydb_core=trace)
    #[arg(long = "log-level", default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the tables if they do not exist
    Init,

    /// Seed regions, countries and every locale's translations
    Seed {
        /// Log failed countries and continue instead of stopping at the first one
        #[arg(long)]
        keep_going: bool,
    },

    /// Re-run the translations of a single locale
    Translate {
        /// Locale directory under translations/ (e.g. es, ar)
        locale: String,
    },

    /// Show row counts per table
    Stats,
}
