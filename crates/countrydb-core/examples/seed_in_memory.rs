//! Seeds the bundled sample data set into an in-memory store and prints
//! what was written.
//!
//! Run with: cargo run -p countrydb-core --example seed_in_memory

use countrydb_core::codec::decode;
use countrydb_core::pipeline::{self, SeedOptions};
use countrydb_core::{Builder, MemoryStore, Result, SeedSource, Store};

fn main() -> Result<()> {
    println!("=== countrydb: seed sample data ===\n");

    let source = SeedSource::open(SeedSource::default_data_dir())?;
    let mut builder = Builder::new(MemoryStore::new());

    let report = pipeline::seed(&mut builder, &source, &SeedOptions::default())?;
    println!(
        "Seeded {} regions, {} countries ({} failed)",
        report.regions,
        report.countries,
        report.failed_countries.len()
    );
    for (locale, iso) in &report.skipped_country_translations {
        println!("  skipped translation {iso} ({locale}): no such country");
    }

    let tables = builder.store().tables();
    for country in &tables.countries {
        let name = tables
            .country_translations
            .iter()
            .find(|t| t.parent == country.id && t.translation.locale == "en")
            .map(|t| t.translation.name.as_str())
            .unwrap_or("?");
        let borders: Vec<String> = decode(&country.columns.borders)?;
        println!(
            "- {name} ({}) borders: {}",
            country.columns.iso_alpha_2.as_deref().unwrap_or("--"),
            if borders.is_empty() { "none".to_string() } else { borders.join(", ") }
        );
    }

    let stats = builder.store().stats()?;
    println!("\n{stats:#?}");
    Ok(())
}
