// crates/countrydb-core/src/store/schema.rs

//! SQLite schema for the country tables.
//!
//! Document columns (`languages`, `currency`, `flag_colors_*`, ...) are plain
//! `TEXT` holding JSON written by [`crate::codec`]. Parent references are
//! enforced with foreign keys; the adapter turns `PRAGMA foreign_keys` on.

/// Idempotent bootstrap, run by [`super::SqliteStore::migrate`].
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS lc_regions (
    id          INTEGER PRIMARY KEY,
    created_at  TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS lc_region_translations (
    id            INTEGER PRIMARY KEY,
    lc_region_id  INTEGER NOT NULL REFERENCES lc_regions(id) ON DELETE CASCADE,
    locale        TEXT NOT NULL,
    slug          TEXT NOT NULL,
    name          TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS lc_region_translations_locale_slug
    ON lc_region_translations (locale, slug COLLATE NOCASE);

CREATE TABLE IF NOT EXISTS lc_countries (
    id                    INTEGER PRIMARY KEY,
    lc_region_id          INTEGER NOT NULL REFERENCES lc_regions(id),
    capital               TEXT,
    official_name         TEXT,
    iso_alpha_2           TEXT,
    iso_alpha_3           TEXT,
    iso_numeric           TEXT,
    international_phone   TEXT,
    geoname_id            TEXT,
    wmo                   TEXT,
    independence_day      TEXT,
    population            INTEGER,
    area                  REAL,
    gdp                   REAL,
    languages             TEXT NOT NULL,
    tld                   TEXT NOT NULL,
    alternative_tld       TEXT NOT NULL,
    borders               TEXT NOT NULL,
    timezones             TEXT NOT NULL,
    currency              TEXT NOT NULL,
    flag_emoji            TEXT NOT NULL,
    flag_colors           TEXT NOT NULL,
    flag_colors_web       TEXT NOT NULL,
    flag_colors_contrast  TEXT NOT NULL,
    flag_colors_hex       TEXT NOT NULL,
    flag_colors_rgb       TEXT NOT NULL,
    flag_colors_cmyk      TEXT NOT NULL,
    flag_colors_hsl       TEXT NOT NULL,
    flag_colors_hsv       TEXT NOT NULL,
    flag_colors_pantone   TEXT NOT NULL,
    is_visible            INTEGER NOT NULL DEFAULT 1,
    created_at            TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);
CREATE INDEX IF NOT EXISTS lc_countries_iso_alpha_2 ON lc_countries (iso_alpha_2 COLLATE NOCASE);
CREATE INDEX IF NOT EXISTS lc_countries_iso_alpha_3 ON lc_countries (iso_alpha_3 COLLATE NOCASE);

CREATE TABLE IF NOT EXISTS lc_country_translations (
    id             INTEGER PRIMARY KEY,
    lc_country_id  INTEGER NOT NULL REFERENCES lc_countries(id) ON DELETE CASCADE,
    locale         TEXT NOT NULL,
    slug           TEXT NOT NULL,
    name           TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS lc_countries_extras (
    id                           INTEGER PRIMARY KEY,
    lc_country_id                INTEGER NOT NULL UNIQUE REFERENCES lc_countries(id) ON DELETE CASCADE,
    national_sport               TEXT,
    cybersecurity_agency         TEXT,
    popular_technologies         TEXT NOT NULL,
    internet                     TEXT NOT NULL,
    religions                    TEXT NOT NULL,
    international_organizations  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS lc_countries_coordinates (
    id                           INTEGER PRIMARY KEY,
    lc_country_id                INTEGER NOT NULL UNIQUE REFERENCES lc_countries(id) ON DELETE CASCADE,
    latitude                     REAL,
    longitude                    REAL,
    degrees_with_decimal         TEXT,
    degrees_minutes_seconds      TEXT,
    degrees_and_decimal_minutes  TEXT,
    gps                          TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS lc_countries_geographical (
    id             INTEGER PRIMARY KEY,
    lc_country_id  INTEGER NOT NULL UNIQUE REFERENCES lc_countries(id) ON DELETE CASCADE,
    type           TEXT NOT NULL,
    features_type  TEXT,
    properties     TEXT NOT NULL,
    geometry       TEXT NOT NULL
);
"#;
