// crates/countrydb-core/src/raw.rs

//! Raw seed structures as they come from the JSON seed files.
//!
//! Every field is individually optional; a missing source value becomes
//! `None`/empty here and `null`/`[]` in the stored documents. Nothing in this
//! module can fail on an absent field.

use crate::de;
use serde::Deserialize;
use serde_json::Value;

/// One entry of `regions.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionSeed {
    /// Canonical `en` slug. Derived from `name` when absent.
    #[serde(default)]
    pub slug: Option<String>,
    pub name: String,
}

/// Raw `borders[]` entry. Only the alpha-2 code is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BorderRaw {
    #[serde(default, deserialize_with = "de::opt_string")]
    pub iso_alpha_2: Option<String>,
}

/// Raw `currency` map.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrencyRaw {
    #[serde(default, deserialize_with = "de::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub symbol: Option<String>,
    /// Banknote denominations; numbers or labels depending on the country.
    #[serde(default, deserialize_with = "de::vec_or_null")]
    pub banknotes: Vec<Value>,
    #[serde(default, deserialize_with = "de::vec_or_null")]
    pub coins_main: Vec<Value>,
    #[serde(default, deserialize_with = "de::vec_or_null")]
    pub coins_sub: Vec<Value>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub main_unit: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub sub_unit: Option<String>,
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub sub_unit_to_unit: Option<u64>,
}

/// Raw flag `emoji` map, e.g.
/// {
///   "img": "🇫🇷",
///   "utf8": "\\xF0\\x9F\\x87\\xAB...",
///   "uCode": "U+1F1EB U+1F1F7",
///   "shortcode": ":flag-fr:"
/// }
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmojiRaw {
    #[serde(default, deserialize_with = "de::opt_string")]
    pub img: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub utf8: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub utf16: Option<String>,
    #[serde(rename = "uCode", default, deserialize_with = "de::opt_string")]
    pub u_code: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub hex: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub html: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub css: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub decimal: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub shortcode: Option<String>,
}

/// Raw `flag_colors[]` entry.
///
/// `rgb`, `cmyk`, `hsl` and `hsv` are kept as raw JSON: seed files write
/// them both as strings (`"0,85,164"`) and as arrays.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlagColorRaw {
    #[serde(default, deserialize_with = "de::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub web_name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub contrast: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub hex: Option<String>,
    #[serde(default)]
    pub rgb: Option<Value>,
    #[serde(default)]
    pub cmyk: Option<Value>,
    #[serde(default)]
    pub hsl: Option<Value>,
    #[serde(default)]
    pub hsv: Option<Value>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub pantone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InternetSpeedRaw {
    #[serde(default)]
    pub average_speed_fixed: Option<Value>,
    #[serde(default)]
    pub average_speed_mobile: Option<Value>,
}

/// Raw `coordinates` map. `dd`, `dms` and `dm` are the alternate geodetic
/// notations (decimal degrees, degrees-minutes-seconds, decimal minutes).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoordinatesRaw {
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub dd: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub dms: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub dm: Option<String>,
}

/// Raw GeoJSON feature.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureRaw {
    #[serde(rename = "type", default, deserialize_with = "de::opt_string")]
    pub kind: Option<String>,
    #[serde(default)]
    pub properties: Option<Value>,
    #[serde(default)]
    pub geometry: Option<Value>,
}

/// Raw GeoJSON-like `geographical` payload (usually a `FeatureCollection`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeographicalRaw {
    #[serde(rename = "type", default, deserialize_with = "de::opt_string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "de::vec_or_null")]
    pub features: Vec<FeatureRaw>,
}

/// Raw country structure from a seed file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountrySeed {
    pub name: String,
    /// Slug of the parent region, in `lang`.
    pub region: String,
    /// Locale the `region` slug is written in. Defaults to `en`.
    #[serde(default)]
    pub lang: Option<String>,

    #[serde(default, deserialize_with = "de::opt_string")]
    pub official_name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub capital: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub iso_alpha_2: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub iso_alpha_3: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub iso_numeric: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub international_phone: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub geoname_id: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub wmo: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub independence_day: Option<String>,
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub population: Option<u64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub area: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub gdp: Option<f64>,

    #[serde(default, deserialize_with = "de::vec_or_null")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "de::vec_or_null")]
    pub tld: Vec<String>,
    #[serde(default, deserialize_with = "de::vec_or_null")]
    pub alternative_tlds: Vec<String>,
    #[serde(default, deserialize_with = "de::vec_or_null")]
    pub borders: Vec<BorderRaw>,
    #[serde(default, deserialize_with = "de::vec_or_null")]
    pub timezones: Vec<String>,

    #[serde(default)]
    pub currency: Option<CurrencyRaw>,
    #[serde(default)]
    pub emoji: Option<EmojiRaw>,
    #[serde(default, deserialize_with = "de::vec_or_null")]
    pub flag_colors: Vec<FlagColorRaw>,

    // --- extras ---
    #[serde(default, deserialize_with = "de::opt_string")]
    pub national_sport: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub cybersecurity_agency: Option<String>,
    #[serde(default, deserialize_with = "de::vec_or_null")]
    pub popular_technologies: Vec<String>,
    #[serde(default)]
    pub internet_speed: Option<InternetSpeedRaw>,
    #[serde(default)]
    pub internet_penetration: Option<Value>,
    #[serde(default, deserialize_with = "de::vec_or_null")]
    pub religions: Vec<String>,
    #[serde(default, deserialize_with = "de::vec_or_null")]
    pub international_organizations: Vec<String>,

    #[serde(default)]
    pub coordinates: Option<CoordinatesRaw>,
    #[serde(default)]
    pub geographical: Option<GeographicalRaw>,
}

/// `{lookup key: display name}` as found in `translations/<locale>/*.json`.
pub type TranslationsRaw = std::collections::BTreeMap<String, String>;
