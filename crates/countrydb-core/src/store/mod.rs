// crates/countrydb-core/src/store/mod.rs

//! # Storage Layer
//!
//! [`Builder`](crate::Builder) talks to a store only through the two traits
//! below, so the same ingestion code runs against SQLite in production and
//! against [`MemoryStore`] in tests.
//!
//! A [`Transaction`] that is dropped without [`Transaction::commit`] must
//! discard every write it made. The builder relies on this: any `?` between
//! `begin` and `commit` rolls the whole unit back.

use crate::error::Result;
use crate::model::{
    CountryCoordinates, CountryExtras, CountryGeography, CountryId, CountryRecord, RegionId,
    Translation,
};
use serde::{Deserialize, Serialize};

pub mod memory;
#[cfg(feature = "sqlite")]
pub mod schema;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

/// Table names, shared by every adapter (and by failpoints in tests).
pub mod tables {
    pub const REGIONS: &str = "lc_regions";
    pub const REGION_TRANSLATIONS: &str = "lc_region_translations";
    pub const COUNTRIES: &str = "lc_countries";
    pub const COUNTRY_TRANSLATIONS: &str = "lc_country_translations";
    pub const EXTRAS: &str = "lc_countries_extras";
    pub const COORDINATES: &str = "lc_countries_coordinates";
    pub const GEOGRAPHICAL: &str = "lc_countries_geographical";
}

/// Row counts per table.
///
/// Returned by [`Store::stats`]; used by the CLI to report what a run wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub regions: usize,
    pub region_translations: usize,
    pub countries: usize,
    pub country_translations: usize,
    pub extras: usize,
    pub coordinates: usize,
    pub geographies: usize,
}

/// A backing store that hands out transactions.
pub trait Store {
    type Tx<'a>: Transaction
    where
        Self: 'a;

    /// Open a transaction. Only one may be open at a time.
    fn begin(&mut self) -> Result<Self::Tx<'_>>;

    /// Committed row counts.
    fn stats(&self) -> Result<DbStats>;
}

/// The persisted-store operations ingestion needs, scoped to one transaction.
pub trait Transaction {
    // --- lookups ---

    /// Region whose translation in `locale` has this `slug`, ignoring ASCII case.
    fn find_region_by_slug(&mut self, slug: &str, locale: &str) -> Result<Option<RegionId>>;

    /// Country whose alpha-2 *or* alpha-3 code equals `code`, ignoring ASCII case.
    fn find_country_by_iso(&mut self, code: &str) -> Result<Option<CountryId>>;

    // --- inserts ---

    fn insert_region(&mut self) -> Result<RegionId>;

    fn insert_region_translation(&mut self, region: RegionId, t: &Translation) -> Result<()>;

    fn insert_country(&mut self, region: RegionId, country: &CountryRecord) -> Result<CountryId>;

    fn insert_country_translation(&mut self, country: CountryId, t: &Translation) -> Result<()>;

    fn insert_extras(&mut self, country: CountryId, extras: &CountryExtras) -> Result<()>;

    fn insert_coordinates(&mut self, country: CountryId, coords: &CountryCoordinates)
        -> Result<()>;

    fn insert_geography(&mut self, country: CountryId, geo: &CountryGeography) -> Result<()>;

    // --- boundary ---

    fn commit(self) -> Result<()>
    where
        Self: Sized;

    /// Explicit rollback. Equivalent to dropping the transaction.
    fn rollback(self) -> Result<()>
    where
        Self: Sized;
}
