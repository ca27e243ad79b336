// crates/countrydb-core/src/convert.rs

//! **Standard Converter:** Raw seed -> normalized records.
//!
//! Every function here is total: missing source values become `None` or an
//! empty list, never an error.

use crate::model::{
    Coins, CountryBundle, CountryCoordinates, CountryExtras, CountryGeography, CountryRecord,
    Currency, CurrencyUnit, FlagColor, FlagEmoji, Internet, InternetSpeed, Timezones, Translation,
    DEFAULT_LOCALE,
};
use crate::raw::{
    BorderRaw, CoordinatesRaw, CountrySeed, CurrencyRaw, EmojiRaw, FlagColorRaw, GeographicalRaw,
    InternetSpeedRaw,
};
use crate::text::{slugify, title_case};
use serde_json::Value;

pub fn country_bundle(seed: &CountrySeed) -> CountryBundle {
    CountryBundle {
        country: country_record(seed),
        translation: default_translation(&seed.name),
        extras: extras(seed),
        coordinates: coordinates(seed.coordinates.as_ref()),
        geography: seed.geographical.as_ref().and_then(geography),
    }
}

pub fn country_record(seed: &CountrySeed) -> CountryRecord {
    CountryRecord {
        capital: seed.capital.clone(),
        official_name: seed.official_name.clone(),
        iso_alpha_2: seed.iso_alpha_2.clone(),
        iso_alpha_3: seed.iso_alpha_3.clone(),
        iso_numeric: seed.iso_numeric.clone(),
        international_phone: seed.international_phone.clone(),
        geoname_id: seed.geoname_id.clone(),
        wmo: seed.wmo.clone(),
        independence_day: seed.independence_day.clone(),
        population: seed.population,
        area: seed.area,
        gdp: seed.gdp,
        languages: seed.languages.clone(),
        tld: seed.tld.clone(),
        alternative_tld: seed.alternative_tlds.clone(),
        borders: borders(&seed.borders),
        timezones: timezones(&seed.timezones),
        currency: currency(seed.currency.as_ref()),
        flag_emoji: flag_emoji(seed.emoji.as_ref()),
        flag_colors: seed.flag_colors.iter().map(flag_color).collect(),
        is_visible: true,
    }
}

/// The inline translation stored with a new country or region: raw name,
/// slugified name, default locale.
pub fn default_translation(name: &str) -> Translation {
    Translation {
        locale: DEFAULT_LOCALE.to_string(),
        slug: slugify(name),
        name: name.to_string(),
    }
}

/// Translation row for a batch entry: slugified and title-cased display name.
pub fn translation(locale: &str, display_name: &str) -> Translation {
    Translation {
        locale: locale.to_string(),
        slug: slugify(display_name),
        name: title_case(display_name),
    }
}

/// Lowercased alpha-2 code of every border entry that has one.
pub fn borders(raw: &[BorderRaw]) -> Vec<String> {
    raw.iter()
        .filter_map(|b| b.iso_alpha_2.as_deref())
        .map(|code| code.trim().to_lowercase())
        .collect()
}

pub fn timezones(raw: &[String]) -> Timezones {
    match raw.split_first() {
        Some((main, others)) => Timezones {
            main: main.clone(),
            others: others.to_vec(),
        },
        None => Timezones::default(),
    }
}

pub fn currency(raw: Option<&CurrencyRaw>) -> Currency {
    let Some(c) = raw else {
        return Currency::default();
    };
    Currency {
        name: c.name.clone(),
        code: c.code.clone(),
        symbol: c.symbol.clone(),
        banknotes: c.banknotes.clone(),
        coins: Coins {
            main: c.coins_main.clone(),
            sub: c.coins_sub.clone(),
        },
        unit: CurrencyUnit {
            main: c.main_unit.clone(),
            sub: c.sub_unit.clone(),
            to_unit: c.sub_unit_to_unit,
        },
    }
}

pub fn flag_emoji(raw: Option<&EmojiRaw>) -> FlagEmoji {
    let Some(e) = raw else {
        return FlagEmoji::default();
    };
    FlagEmoji {
        img: e.img.clone(),
        utf8: e.utf8.clone(),
        utf16: e.utf16.clone(),
        u_code: e.u_code.clone(),
        hex: e.hex.clone(),
        html: e.html.clone(),
        css: e.css.clone(),
        decimal: e.decimal.clone(),
        shortcode: e.shortcode.clone(),
    }
}

pub fn flag_color(raw: &FlagColorRaw) -> FlagColor {
    FlagColor {
        name: raw.name.clone(),
        web_name: raw.web_name.clone(),
        contrast: raw.contrast.clone(),
        hex: raw.hex.clone(),
        rgb: raw.rgb.clone(),
        cmyk: raw.cmyk.clone(),
        hsl: raw.hsl.clone(),
        hsv: raw.hsv.clone(),
        pantone: raw.pantone.clone(),
    }
}

pub fn extras(seed: &CountrySeed) -> CountryExtras {
    CountryExtras {
        national_sport: seed.national_sport.clone(),
        cybersecurity_agency: seed.cybersecurity_agency.clone(),
        popular_technologies: seed.popular_technologies.clone(),
        internet: internet(seed.internet_speed.as_ref(), seed.internet_penetration.clone()),
        religions: seed.religions.clone(),
        international_organizations: seed.international_organizations.clone(),
    }
}

fn internet(speed: Option<&InternetSpeedRaw>, penetration: Option<Value>) -> Internet {
    Internet {
        speed: InternetSpeed {
            average_fixed: speed.and_then(|s| s.average_speed_fixed.clone()),
            average_mobile: speed.and_then(|s| s.average_speed_mobile.clone()),
        },
        penetration,
    }
}

pub fn coordinates(raw: Option<&CoordinatesRaw>) -> CountryCoordinates {
    let Some(c) = raw else {
        return CountryCoordinates::default();
    };
    CountryCoordinates {
        latitude: c.latitude,
        longitude: c.longitude,
        degrees_with_decimal: c.dd.clone(),
        degrees_minutes_seconds: c.dms.clone(),
        degrees_and_decimal_minutes: c.dm.clone(),
    }
}

/// `None` unless the payload carries a `type`. Only the first feature is kept.
pub fn geography(raw: &GeographicalRaw) -> Option<CountryGeography> {
    let kind = raw.kind.as_ref()?;
    let first = raw.features.first();
    Some(CountryGeography {
        kind: kind.clone(),
        features_type: first.and_then(|f| f.kind.clone()),
        properties: first
            .and_then(|f| f.properties.clone())
            .unwrap_or(Value::Null),
        geometry: first.and_then(|f| f.geometry.clone()).unwrap_or(Value::Null),
    })
}
