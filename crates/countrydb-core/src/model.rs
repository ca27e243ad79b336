// crates/countrydb-core/src/model.rs

//! Normalized records, ready to be handed to a [`Transaction`](crate::store::Transaction).
//!
//! Structured attributes stay typed here; they are turned into encoded
//! document columns only by [`crate::codec`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Locale of the inline translation created with every country and region.
pub const DEFAULT_LOCALE: &str = "en";

/// Row id of a persisted region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub i64);

/// Row id of a persisted country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CountryId(pub i64);

/// A locale-specific slug and display name for a region or a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub locale: String,
    pub slug: String,
    pub name: String,
}

/// `{main, others}`: the first listed zone and the rest, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timezones {
    pub main: String,
    pub others: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coins {
    pub main: Vec<Value>,
    pub sub: Vec<Value>,
}

/// Currency unit hierarchy, e.g. euro / cent / 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyUnit {
    pub main: Option<String>,
    pub sub: Option<String>,
    pub to_unit: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub name: Option<String>,
    pub code: Option<String>,
    pub symbol: Option<String>,
    pub banknotes: Vec<Value>,
    pub coins: Coins,
    pub unit: CurrencyUnit,
}

/// The flag emoji in every notation the seed data carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagEmoji {
    pub img: Option<String>,
    pub utf8: Option<String>,
    pub utf16: Option<String>,
    #[serde(rename = "uCode")]
    pub u_code: Option<String>,
    pub hex: Option<String>,
    pub html: Option<String>,
    pub css: Option<String>,
    pub decimal: Option<String>,
    pub shortcode: Option<String>,
}

/// One color of a flag, described in every supported color space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlagColor {
    pub name: Option<String>,
    pub web_name: Option<String>,
    pub contrast: Option<String>,
    pub hex: Option<String>,
    pub rgb: Option<Value>,
    pub cmyk: Option<Value>,
    pub hsl: Option<Value>,
    pub hsv: Option<Value>,
    pub pantone: Option<String>,
}

/// Scalar identity fields and structured attributes of a country row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CountryRecord {
    pub capital: Option<String>,
    pub official_name: Option<String>,
    pub iso_alpha_2: Option<String>,
    pub iso_alpha_3: Option<String>,
    pub iso_numeric: Option<String>,
    pub international_phone: Option<String>,
    pub geoname_id: Option<String>,
    pub wmo: Option<String>,
    pub independence_day: Option<String>,
    pub population: Option<u64>,
    pub area: Option<f64>,
    pub gdp: Option<f64>,

    pub languages: Vec<String>,
    pub tld: Vec<String>,
    pub alternative_tld: Vec<String>,
    /// Lowercased alpha-2 codes.
    pub borders: Vec<String>,
    pub timezones: Timezones,
    pub currency: Currency,
    pub flag_emoji: FlagEmoji,
    /// Flag colors in flag order. Split into parallel columns by the codec.
    pub flag_colors: Vec<FlagColor>,

    pub is_visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternetSpeed {
    pub average_fixed: Option<Value>,
    pub average_mobile: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Internet {
    pub speed: InternetSpeed,
    pub penetration: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountryExtras {
    pub national_sport: Option<String>,
    pub cybersecurity_agency: Option<String>,
    pub popular_technologies: Vec<String>,
    pub internet: Internet,
    pub religions: Vec<String>,
    pub international_organizations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CountryCoordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub degrees_with_decimal: Option<String>,
    pub degrees_minutes_seconds: Option<String>,
    pub degrees_and_decimal_minutes: Option<String>,
}

/// GeoJSON-style outline of a country: collection type plus its first feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryGeography {
    pub kind: String,
    pub features_type: Option<String>,
    pub properties: Value,
    pub geometry: Value,
}

/// Everything [`crate::Builder::country`] writes for one seed, in write order.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryBundle {
    pub country: CountryRecord,
    pub translation: Translation,
    pub extras: CountryExtras,
    pub coordinates: CountryCoordinates,
    pub geography: Option<CountryGeography>,
}
