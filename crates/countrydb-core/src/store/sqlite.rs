// crates/countrydb-core/src/store/sqlite.rs
#![cfg(feature = "sqlite")]

use super::schema::SCHEMA;
use super::tables;
use super::{DbStats, Store, Transaction};
use crate::codec;
use crate::error::Result;
use crate::model::{
    CountryCoordinates, CountryExtras, CountryGeography, CountryId, CountryRecord, RegionId,
    Translation,
};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::debug;

/// SQLite-backed store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a database file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening sqlite store");
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Wrap an existing connection. Turns foreign key enforcement on.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self { conn })
    }

    /// Create any missing tables and indexes.
    pub fn migrate(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn count(&self, table: &str) -> Result<usize> {
        let n: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        Ok(n as usize)
    }
}

impl Store for SqliteStore {
    type Tx<'a> = SqliteTx<'a>;

    fn begin(&mut self) -> Result<SqliteTx<'_>> {
        Ok(SqliteTx {
            tx: self.conn.transaction()?,
        })
    }

    fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            regions: self.count(tables::REGIONS)?,
            region_translations: self.count(tables::REGION_TRANSLATIONS)?,
            countries: self.count(tables::COUNTRIES)?,
            country_translations: self.count(tables::COUNTRY_TRANSLATIONS)?,
            extras: self.count(tables::EXTRAS)?,
            coordinates: self.count(tables::COORDINATES)?,
            geographies: self.count(tables::GEOGRAPHICAL)?,
        })
    }
}

/// Wraps a `rusqlite::Transaction`, which rolls back on drop.
pub struct SqliteTx<'a> {
    tx: rusqlite::Transaction<'a>,
}

impl SqliteTx<'_> {
    fn insert_translation(
        &mut self,
        table: &str,
        parent_column: &str,
        parent: i64,
        t: &Translation,
    ) -> Result<()> {
        self.tx.execute(
            &format!(
                "INSERT INTO {table} ({parent_column}, locale, slug, name) VALUES (?1, ?2, ?3, ?4)"
            ),
            params![parent, t.locale, t.slug, t.name],
        )?;
        Ok(())
    }
}

impl Transaction for SqliteTx<'_> {
    fn find_region_by_slug(&mut self, slug: &str, locale: &str) -> Result<Option<RegionId>> {
        let id = self
            .tx
            .query_row(
                "SELECT lc_region_id FROM lc_region_translations
                 WHERE slug = ?1 COLLATE NOCASE AND locale = ?2
                 ORDER BY id LIMIT 1",
                params![slug, locale],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id.map(RegionId))
    }

    fn find_country_by_iso(&mut self, code: &str) -> Result<Option<CountryId>> {
        let id = self
            .tx
            .query_row(
                "SELECT id FROM lc_countries
                 WHERE iso_alpha_2 = ?1 COLLATE NOCASE OR iso_alpha_3 = ?1 COLLATE NOCASE
                 ORDER BY id LIMIT 1",
                params![code.trim()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id.map(CountryId))
    }

    fn insert_region(&mut self) -> Result<RegionId> {
        self.tx.execute("INSERT INTO lc_regions DEFAULT VALUES", [])?;
        Ok(RegionId(self.tx.last_insert_rowid()))
    }

    fn insert_region_translation(&mut self, region: RegionId, t: &Translation) -> Result<()> {
        self.insert_translation(tables::REGION_TRANSLATIONS, "lc_region_id", region.0, t)
    }

    fn insert_country(&mut self, region: RegionId, country: &CountryRecord) -> Result<CountryId> {
        let c = codec::encode_country(country)?;
        let population = c.population.and_then(|p| i64::try_from(p).ok());
        self.tx.execute(
            "INSERT INTO lc_countries (
                lc_region_id, capital, official_name, iso_alpha_2, iso_alpha_3, iso_numeric,
                international_phone, geoname_id, wmo, independence_day, population, area, gdp,
                languages, tld, alternative_tld, borders, timezones, currency, flag_emoji,
                flag_colors, flag_colors_web, flag_colors_contrast, flag_colors_hex,
                flag_colors_rgb, flag_colors_cmyk, flag_colors_hsl, flag_colors_hsv,
                flag_colors_pantone, is_visible
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15,
                ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28, ?29, ?30
            )",
            params![
                region.0,
                c.capital,
                c.official_name,
                c.iso_alpha_2,
                c.iso_alpha_3,
                c.iso_numeric,
                c.international_phone,
                c.geoname_id,
                c.wmo,
                c.independence_day,
                population,
                c.area,
                c.gdp,
                c.languages,
                c.tld,
                c.alternative_tld,
                c.borders,
                c.timezones,
                c.currency,
                c.flag_emoji,
                c.flag_colors,
                c.flag_colors_web,
                c.flag_colors_contrast,
                c.flag_colors_hex,
                c.flag_colors_rgb,
                c.flag_colors_cmyk,
                c.flag_colors_hsl,
                c.flag_colors_hsv,
                c.flag_colors_pantone,
                c.is_visible,
            ],
        )?;
        Ok(CountryId(self.tx.last_insert_rowid()))
    }

    fn insert_country_translation(&mut self, country: CountryId, t: &Translation) -> Result<()> {
        self.insert_translation(tables::COUNTRY_TRANSLATIONS, "lc_country_id", country.0, t)
    }

    fn insert_extras(&mut self, country: CountryId, extras: &CountryExtras) -> Result<()> {
        let e = codec::encode_extras(extras)?;
        self.tx.execute(
            "INSERT INTO lc_countries_extras (
                lc_country_id, national_sport, cybersecurity_agency, popular_technologies,
                internet, religions, international_organizations
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                country.0,
                e.national_sport,
                e.cybersecurity_agency,
                e.popular_technologies,
                e.internet,
                e.religions,
                e.international_organizations,
            ],
        )?;
        Ok(())
    }

    fn insert_coordinates(
        &mut self,
        country: CountryId,
        coords: &CountryCoordinates,
    ) -> Result<()> {
        let c = codec::encode_coordinates(coords);
        self.tx.execute(
            "INSERT INTO lc_countries_coordinates (
                lc_country_id, latitude, longitude, degrees_with_decimal,
                degrees_minutes_seconds, degrees_and_decimal_minutes, gps
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                country.0,
                c.latitude,
                c.longitude,
                c.degrees_with_decimal,
                c.degrees_minutes_seconds,
                c.degrees_and_decimal_minutes,
                c.gps,
            ],
        )?;
        Ok(())
    }

    fn insert_geography(&mut self, country: CountryId, geo: &CountryGeography) -> Result<()> {
        let g = codec::encode_geography(geo)?;
        self.tx.execute(
            "INSERT INTO lc_countries_geographical (
                lc_country_id, type, features_type, properties, geometry
            ) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![country.0, g.kind, g.features_type, g.properties, g.geometry],
        )?;
        Ok(())
    }

    fn commit(self) -> Result<()> {
        self.tx.commit()?;
        Ok(())
    }

    fn rollback(self) -> Result<()> {
        self.tx.rollback()?;
        Ok(())
    }
}
