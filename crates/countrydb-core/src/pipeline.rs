// crates/countrydb-core/src/pipeline.rs

//! Full seeding run: regions, then countries, then every locale's translations.

use crate::builder::Builder;
use crate::error::Result;
use crate::loader::SeedSource;
use crate::store::Store;
use tracing::{error, info, warn};

/// What the pipeline does when a single country fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failed country and return its error.
    #[default]
    Halt,
    /// Log the failure, count it, move on to the next country.
    Continue,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SeedOptions {
    pub on_country_failure: FailurePolicy,
}

/// Counts accumulated by a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub regions: usize,
    pub countries: usize,
    pub failed_countries: Vec<String>,
    pub region_translations: usize,
    pub country_translations: usize,
    /// `(locale, iso)` pairs that matched no country.
    pub skipped_country_translations: Vec<(String, String)>,
}

pub fn seed<S: Store>(
    builder: &mut Builder<S>,
    source: &SeedSource,
    options: &SeedOptions,
) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    info!(root = %source.root().display(), "seeding");

    let regions = source.regions()?;
    report.regions = builder.regions(&regions)?.len();

    for entry in source.country_entries()? {
        let outcome = entry.seed.and_then(|seed| builder.country(&seed));
        match outcome {
            Ok(_) => report.countries += 1,
            Err(e) => match options.on_country_failure {
                FailurePolicy::Halt => {
                    error!(country = %entry.label, error = %e, "country failed, halting");
                    return Err(e);
                }
                FailurePolicy::Continue => {
                    warn!(country = %entry.label, error = %e, "country failed, continuing");
                    report.failed_countries.push(entry.label);
                }
            },
        }
    }

    for locale in source.locales()? {
        translate_into(builder, source, &locale, &mut report)?;
    }

    info!(
        regions = report.regions,
        countries = report.countries,
        failed = report.failed_countries.len(),
        "seeding finished"
    );
    Ok(report)
}

/// Re-run a single locale's translations against an already seeded store.
pub fn translate<S: Store>(
    builder: &mut Builder<S>,
    source: &SeedSource,
    locale: &str,
) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    translate_into(builder, source, locale, &mut report)?;
    Ok(report)
}

fn translate_into<S: Store>(
    builder: &mut Builder<S>,
    source: &SeedSource,
    locale: &str,
    report: &mut SeedReport,
) -> Result<()> {
    if let Some(regions) = source.region_translations(locale)? {
        report.region_translations += builder.regions_translations(&regions, locale)?.inserted;
    }
    if let Some(countries) = source.country_translations(locale)? {
        let batch = builder.countries_translations(&countries, locale)?;
        report.country_translations += batch.inserted;
        report
            .skipped_country_translations
            .extend(batch.skipped.into_iter().map(|iso| (locale.to_string(), iso)));
    }
    Ok(())
}
