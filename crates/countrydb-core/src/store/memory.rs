// crates/countrydb-core/src/store/memory.rs

//! In-process store.
//!
//! `begin` stages a full copy of the tables; `commit` swaps the copy in and
//! dropping the transaction throws it away. Rows are stored in their encoded
//! column form so tests see exactly what a relational adapter would write.

use super::tables;
use super::{DbStats, Store, Transaction};
use crate::codec::{
    self, CoordinatesColumns, CountryColumns, ExtrasColumns, GeographyColumns,
};
use crate::error::{Result, SeedError};
use crate::model::{
    CountryCoordinates, CountryExtras, CountryGeography, CountryId, CountryRecord, RegionId,
    Translation,
};
use crate::text::iso_eq;
use std::collections::HashSet;

/// Failpoint name that makes [`Transaction::rollback`] fail.
pub const ROLLBACK: &str = "rollback";

#[derive(Debug, Clone, PartialEq)]
pub struct CountryRow {
    pub id: CountryId,
    pub region: RegionId,
    pub columns: CountryColumns,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRow<P> {
    pub parent: P,
    pub translation: Translation,
}

/// A 1:1 / 0:1 dependent of a country.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildRow<T> {
    pub country: CountryId,
    pub columns: T,
}

#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub regions: Vec<RegionId>,
    pub region_translations: Vec<TranslationRow<RegionId>>,
    pub countries: Vec<CountryRow>,
    pub country_translations: Vec<TranslationRow<CountryId>>,
    pub extras: Vec<ChildRow<ExtrasColumns>>,
    pub coordinates: Vec<ChildRow<CoordinatesColumns>>,
    pub geographies: Vec<ChildRow<GeographyColumns>>,
}

impl Tables {
    fn stats(&self) -> DbStats {
        DbStats {
            regions: self.regions.len(),
            region_translations: self.region_translations.len(),
            countries: self.countries.len(),
            country_translations: self.country_translations.len(),
            extras: self.extras.len(),
            coordinates: self.coordinates.len(),
            geographies: self.geographies.len(),
        }
    }

    pub fn country(&self, id: CountryId) -> Option<&CountryRow> {
        self.countries.iter().find(|c| c.id == id)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Tables,
    failpoints: HashSet<&'static str>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed rows.
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Make every later insert into `table` fail with [`SeedError::Write`].
    ///
    /// `table` is one of the names in [`super::tables`], or [`ROLLBACK`].
    pub fn fail_on(&mut self, table: &'static str) {
        self.failpoints.insert(table);
    }

    pub fn clear_failpoints(&mut self) {
        self.failpoints.clear();
    }
}

impl Store for MemoryStore {
    type Tx<'a> = MemoryTx<'a>;

    fn begin(&mut self) -> Result<MemoryTx<'_>> {
        let staged = self.tables.clone();
        Ok(MemoryTx {
            store: self,
            staged,
        })
    }

    fn stats(&self) -> Result<DbStats> {
        Ok(self.tables.stats())
    }
}

pub struct MemoryTx<'a> {
    store: &'a mut MemoryStore,
    staged: Tables,
}

impl MemoryTx<'_> {
    fn check(&self, table: &'static str) -> Result<()> {
        if self.store.failpoints.contains(table) {
            return Err(SeedError::Write(format!("failpoint hit on {table}")));
        }
        Ok(())
    }

    fn require_country(&self, table: &str, country: CountryId) -> Result<()> {
        if self.staged.country(country).is_none() {
            return Err(SeedError::Write(format!(
                "{table}: unknown country id {}",
                country.0
            )));
        }
        Ok(())
    }
}

impl Transaction for MemoryTx<'_> {
    fn find_region_by_slug(&mut self, slug: &str, locale: &str) -> Result<Option<RegionId>> {
        Ok(self
            .staged
            .region_translations
            .iter()
            .find(|r| {
                r.translation.locale == locale && r.translation.slug.eq_ignore_ascii_case(slug)
            })
            .map(|r| r.parent))
    }

    fn find_country_by_iso(&mut self, code: &str) -> Result<Option<CountryId>> {
        let matches = |v: &Option<String>| v.as_deref().is_some_and(|v| iso_eq(v, code));
        Ok(self
            .staged
            .countries
            .iter()
            .find(|c| matches(&c.columns.iso_alpha_2) || matches(&c.columns.iso_alpha_3))
            .map(|c| c.id))
    }

    fn insert_region(&mut self) -> Result<RegionId> {
        self.check(tables::REGIONS)?;
        let id = RegionId(self.staged.regions.len() as i64 + 1);
        self.staged.regions.push(id);
        Ok(id)
    }

    fn insert_region_translation(&mut self, region: RegionId, t: &Translation) -> Result<()> {
        self.check(tables::REGION_TRANSLATIONS)?;
        if !self.staged.regions.contains(&region) {
            return Err(SeedError::Write(format!(
                "{}: unknown region id {}",
                tables::REGION_TRANSLATIONS,
                region.0
            )));
        }
        self.staged.region_translations.push(TranslationRow {
            parent: region,
            translation: t.clone(),
        });
        Ok(())
    }

    fn insert_country(&mut self, region: RegionId, country: &CountryRecord) -> Result<CountryId> {
        self.check(tables::COUNTRIES)?;
        if !self.staged.regions.contains(&region) {
            return Err(SeedError::Write(format!(
                "{}: unknown region id {}",
                tables::COUNTRIES,
                region.0
            )));
        }
        let id = CountryId(self.staged.countries.len() as i64 + 1);
        self.staged.countries.push(CountryRow {
            id,
            region,
            columns: codec::encode_country(country)?,
        });
        Ok(id)
    }

    fn insert_country_translation(&mut self, country: CountryId, t: &Translation) -> Result<()> {
        self.check(tables::COUNTRY_TRANSLATIONS)?;
        self.require_country(tables::COUNTRY_TRANSLATIONS, country)?;
        self.staged.country_translations.push(TranslationRow {
            parent: country,
            translation: t.clone(),
        });
        Ok(())
    }

    fn insert_extras(&mut self, country: CountryId, extras: &CountryExtras) -> Result<()> {
        self.check(tables::EXTRAS)?;
        self.require_country(tables::EXTRAS, country)?;
        self.staged.extras.push(ChildRow {
            country,
            columns: codec::encode_extras(extras)?,
        });
        Ok(())
    }

    fn insert_coordinates(
        &mut self,
        country: CountryId,
        coords: &CountryCoordinates,
    ) -> Result<()> {
        self.check(tables::COORDINATES)?;
        self.require_country(tables::COORDINATES, country)?;
        self.staged.coordinates.push(ChildRow {
            country,
            columns: codec::encode_coordinates(coords),
        });
        Ok(())
    }

    fn insert_geography(&mut self, country: CountryId, geo: &CountryGeography) -> Result<()> {
        self.check(tables::GEOGRAPHICAL)?;
        self.require_country(tables::GEOGRAPHICAL, country)?;
        self.staged.geographies.push(ChildRow {
            country,
            columns: codec::encode_geography(geo)?,
        });
        Ok(())
    }

    fn commit(self) -> Result<()> {
        self.store.tables = self.staged;
        Ok(())
    }

    fn rollback(self) -> Result<()> {
        self.check(ROLLBACK)
    }
}
