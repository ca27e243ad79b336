// crates/countrydb-core/src/builder.rs

//! # Builder
//!
//! Ingestion entry points. Each public method is one transaction: begin, do
//! all the work, commit. Any error before the commit drops the transaction,
//! which discards everything that method wrote.

use crate::convert;
use crate::error::{Result, SeedError};
use crate::model::{CountryId, RegionId, DEFAULT_LOCALE};
use crate::raw::{CountrySeed, RegionSeed};
use crate::store::{Store, Transaction};
use crate::text::slugify;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// What to do when a translation entry names a parent that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingParentPolicy {
    /// Roll back the whole batch and return [`SeedError::MissingParent`].
    Abort,
    /// Skip the entry, keep going, report it in [`TranslationReport::skipped`].
    Skip,
}

/// Outcome of a translation batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationReport {
    pub inserted: usize,
    /// Lookup keys that matched no parent, in batch order.
    pub skipped: Vec<String>,
}

/// Stateless ingestion service over a [`Store`].
pub struct Builder<S> {
    store: S,
}

impl<S: Store> Builder<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    // -----------------------------------------------------------------------
    // REGIONS
    // -----------------------------------------------------------------------

    /// Create a region with its default-locale translation.
    pub fn region(&mut self, seed: &RegionSeed) -> Result<RegionId> {
        let mut tx = self.store.begin()?;
        let id = insert_region(&mut tx, seed)?;
        tx.commit()?;
        Ok(id)
    }

    /// Create several regions atomically.
    pub fn regions(&mut self, seeds: &[RegionSeed]) -> Result<Vec<RegionId>> {
        let mut tx = self.store.begin()?;
        let ids = seeds
            .iter()
            .map(|seed| insert_region(&mut tx, seed))
            .collect::<Result<Vec<_>>>()?;
        tx.commit()?;
        info!(count = ids.len(), "regions created");
        Ok(ids)
    }

    // -----------------------------------------------------------------------
    // COUNTRIES
    // -----------------------------------------------------------------------

    /// Create a country, its default translation, extras, coordinates and,
    /// when the seed has a typed geographic payload, its geography.
    ///
    /// The parent region is looked up by `seed.region` in `seed.lang`
    /// (default `en`). If it does not exist nothing is written and
    /// [`SeedError::MissingParent`] is returned.
    pub fn country(&mut self, seed: &CountrySeed) -> Result<CountryId> {
        let locale = seed.lang.as_deref().unwrap_or(DEFAULT_LOCALE);
        let mut tx = self.store.begin()?;

        let region = tx
            .find_region_by_slug(&seed.region, locale)?
            .ok_or_else(|| SeedError::missing_region(format!("{} ({locale})", seed.region)))?;

        let bundle = convert::country_bundle(seed);

        let id = tx.insert_country(region, &bundle.country)?;
        tx.insert_country_translation(id, &bundle.translation)?;
        debug!(country = id.0, region = region.0, "country row written");

        tx.insert_extras(id, &bundle.extras)?;
        tx.insert_coordinates(id, &bundle.coordinates)?;
        if let Some(geo) = &bundle.geography {
            tx.insert_geography(id, geo)?;
        }

        tx.commit()?;
        info!(
            country = %seed.name,
            id = id.0,
            geography = bundle.geography.is_some(),
            "country created"
        );
        Ok(id)
    }

    // -----------------------------------------------------------------------
    // TRANSLATIONS
    // -----------------------------------------------------------------------

    /// Attach `locale` names to existing regions, keyed by their `en` slug.
    ///
    /// All-or-nothing: one unknown slug rolls back the whole batch.
    pub fn regions_translations(
        &mut self,
        regions: &BTreeMap<String, String>,
        locale: &str,
    ) -> Result<TranslationReport> {
        self.regions_translations_with_policy(regions, locale, MissingParentPolicy::Abort)
    }

    pub fn regions_translations_with_policy(
        &mut self,
        regions: &BTreeMap<String, String>,
        locale: &str,
        policy: MissingParentPolicy,
    ) -> Result<TranslationReport> {
        let mut tx = self.store.begin()?;
        let mut report = TranslationReport::default();

        for (slug, name) in regions {
            let Some(region) = tx.find_region_by_slug(slug, DEFAULT_LOCALE)? else {
                match policy {
                    MissingParentPolicy::Abort => {
                        if let Err(e) = tx.rollback() {
                            warn!(error = %e, "rollback failed");
                        }
                        return Err(SeedError::missing_region(format!("{name} ({slug})")));
                    }
                    MissingParentPolicy::Skip => {
                        warn!(%slug, %locale, "region not found, translation skipped");
                        report.skipped.push(slug.clone());
                        continue;
                    }
                }
            };
            tx.insert_region_translation(region, &convert::translation(locale, name))?;
            report.inserted += 1;
        }

        tx.commit()?;
        info!(%locale, inserted = report.inserted, skipped = report.skipped.len(), "region translations stored");
        Ok(report)
    }

    /// Attach `locale` names to existing countries, keyed by ISO alpha-2 or alpha-3.
    ///
    /// Lenient: unknown codes are skipped and listed in the report.
    pub fn countries_translations(
        &mut self,
        countries: &BTreeMap<String, String>,
        locale: &str,
    ) -> Result<TranslationReport> {
        self.countries_translations_with_policy(countries, locale, MissingParentPolicy::Skip)
    }

    pub fn countries_translations_with_policy(
        &mut self,
        countries: &BTreeMap<String, String>,
        locale: &str,
        policy: MissingParentPolicy,
    ) -> Result<TranslationReport> {
        let mut tx = self.store.begin()?;
        let mut report = TranslationReport::default();

        for (iso, name) in countries {
            let Some(country) = tx.find_country_by_iso(iso)? else {
                match policy {
                    MissingParentPolicy::Abort => {
                        if let Err(e) = tx.rollback() {
                            warn!(error = %e, "rollback failed");
                        }
                        return Err(SeedError::missing_country(format!("{name} ({iso})")));
                    }
                    MissingParentPolicy::Skip => {
                        warn!(%iso, %locale, "country not found, translation skipped");
                        report.skipped.push(iso.clone());
                        continue;
                    }
                }
            };
            tx.insert_country_translation(country, &convert::translation(locale, name))?;
            report.inserted += 1;
        }

        tx.commit()?;
        info!(%locale, inserted = report.inserted, skipped = report.skipped.len(), "country translations stored");
        Ok(report)
    }
}

fn insert_region<T: Transaction>(tx: &mut T, seed: &RegionSeed) -> Result<RegionId> {
    let mut translation = convert::default_translation(&seed.name);
    if let Some(slug) = seed.slug.as_deref() {
        translation.slug = slugify(slug);
    }
    if translation.slug.is_empty() {
        return Err(SeedError::InvalidData(format!(
            "region {:?} has an empty slug",
            seed.name
        )));
    }
    let id = tx.insert_region()?;
    tx.insert_region_translation(id, &translation)?;
    debug!(region = id.0, slug = %translation.slug, "region row written");
    Ok(id)
}
