// crates/countrydb-core/src/codec.rs

//! # Document Codec
//!
//! The store is schema-flat: structured attributes live in single text
//! columns as JSON documents. This module is the only place that knows the
//! column layout. Both adapters call it, business logic never does.
//!
//! Flag colors are the one non-obvious mapping: the typed model keeps one
//! record per color, the columns keep one list per descriptor
//! (`flag_colors`, `flag_colors_web`, ..., `flag_colors_pantone`), all
//! index-aligned. A color that lacks a descriptor contributes `null` at its
//! index so the lists never drift apart.

use crate::error::{Result, SeedError};
use crate::model::{
    CountryCoordinates, CountryExtras, CountryGeography, CountryRecord, FlagColor,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Stored form of [`CountryCoordinates::gps`]: reserved, always empty.
pub const EMPTY_GPS: &str = "[]";

/// A country row as it is written to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryColumns {
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
    pub languages: String,
    pub tld: String,
    pub alternative_tld: String,
    pub borders: String,
    pub timezones: String,
    pub currency: String,
    pub flag_emoji: String,
    pub flag_colors: String,
    pub flag_colors_web: String,
    pub flag_colors_contrast: String,
    pub flag_colors_hex: String,
    pub flag_colors_rgb: String,
    pub flag_colors_cmyk: String,
    pub flag_colors_hsl: String,
    pub flag_colors_hsv: String,
    pub flag_colors_pantone: String,
    pub is_visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtrasColumns {
    pub national_sport: Option<String>,
    pub cybersecurity_agency: Option<String>,
    pub popular_technologies: String,
    pub internet: String,
    pub religions: String,
    pub international_organizations: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoordinatesColumns {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub degrees_with_decimal: Option<String>,
    pub degrees_minutes_seconds: Option<String>,
    pub degrees_and_decimal_minutes: Option<String>,
    pub gps: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeographyColumns {
    pub kind: String,
    pub features_type: Option<String>,
    pub properties: String,
    pub geometry: String,
}

// -----------------------------------------------------------------------------
// ENCODE
// -----------------------------------------------------------------------------

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Pick one descriptor from every color, preserving order.
fn parallel<T: Serialize>(colors: &[FlagColor], pick: impl Fn(&FlagColor) -> &T) -> Result<String> {
    let column: Vec<&T> = colors.iter().map(pick).collect();
    encode(&column)
}

pub fn encode_country(c: &CountryRecord) -> Result<CountryColumns> {
    let colors = &c.flag_colors;
    Ok(CountryColumns {
        capital: c.capital.clone(),
        official_name: c.official_name.clone(),
        iso_alpha_2: c.iso_alpha_2.clone(),
        iso_alpha_3: c.iso_alpha_3.clone(),
        iso_numeric: c.iso_numeric.clone(),
        international_phone: c.international_phone.clone(),
        geoname_id: c.geoname_id.clone(),
        wmo: c.wmo.clone(),
        independence_day: c.independence_day.clone(),
        population: c.population,
        area: c.area,
        gdp: c.gdp,
        languages: encode(&c.languages)?,
        tld: encode(&c.tld)?,
        alternative_tld: encode(&c.alternative_tld)?,
        borders: encode(&c.borders)?,
        timezones: encode(&c.timezones)?,
        currency: encode(&c.currency)?,
        flag_emoji: encode(&c.flag_emoji)?,
        flag_colors: parallel(colors, |f| &f.name)?,
        flag_colors_web: parallel(colors, |f| &f.web_name)?,
        flag_colors_contrast: parallel(colors, |f| &f.contrast)?,
        flag_colors_hex: parallel(colors, |f| &f.hex)?,
        flag_colors_rgb: parallel(colors, |f| &f.rgb)?,
        flag_colors_cmyk: parallel(colors, |f| &f.cmyk)?,
        flag_colors_hsl: parallel(colors, |f| &f.hsl)?,
        flag_colors_hsv: parallel(colors, |f| &f.hsv)?,
        flag_colors_pantone: parallel(colors, |f| &f.pantone)?,
        is_visible: c.is_visible,
    })
}

pub fn encode_extras(e: &CountryExtras) -> Result<ExtrasColumns> {
    Ok(ExtrasColumns {
        national_sport: e.national_sport.clone(),
        cybersecurity_agency: e.cybersecurity_agency.clone(),
        popular_technologies: encode(&e.popular_technologies)?,
        internet: encode(&e.internet)?,
        religions: encode(&e.religions)?,
        international_organizations: encode(&e.international_organizations)?,
    })
}

pub fn encode_coordinates(c: &CountryCoordinates) -> CoordinatesColumns {
    CoordinatesColumns {
        latitude: c.latitude,
        longitude: c.longitude,
        degrees_with_decimal: c.degrees_with_decimal.clone(),
        degrees_minutes_seconds: c.degrees_minutes_seconds.clone(),
        degrees_and_decimal_minutes: c.degrees_and_decimal_minutes.clone(),
        gps: EMPTY_GPS.to_string(),
    }
}

pub fn encode_geography(g: &CountryGeography) -> Result<GeographyColumns> {
    Ok(GeographyColumns {
        kind: g.kind.clone(),
        features_type: g.features_type.clone(),
        properties: encode(&g.properties)?,
        geometry: encode(&g.geometry)?,
    })
}

// -----------------------------------------------------------------------------
// DECODE
// -----------------------------------------------------------------------------

/// Decode one document column.
pub fn decode<T: DeserializeOwned>(column: &str) -> Result<T> {
    Ok(serde_json::from_str(column)?)
}

impl CountryColumns {
    /// Reassemble the parallel flag-color columns into color records.
    ///
    /// Fails with [`SeedError::InvalidData`] if the columns disagree on length.
    pub fn flag_colors(&self) -> Result<Vec<FlagColor>> {
        let names: Vec<Option<String>> = decode(&self.flag_colors)?;
        let web: Vec<Option<String>> = decode(&self.flag_colors_web)?;
        let contrast: Vec<Option<String>> = decode(&self.flag_colors_contrast)?;
        let hex: Vec<Option<String>> = decode(&self.flag_colors_hex)?;
        let rgb: Vec<Option<Value>> = decode(&self.flag_colors_rgb)?;
        let cmyk: Vec<Option<Value>> = decode(&self.flag_colors_cmyk)?;
        let hsl: Vec<Option<Value>> = decode(&self.flag_colors_hsl)?;
        let hsv: Vec<Option<Value>> = decode(&self.flag_colors_hsv)?;
        let pantone: Vec<Option<String>> = decode(&self.flag_colors_pantone)?;

        let n = names.len();
        let lengths = [
            web.len(),
            contrast.len(),
            hex.len(),
            rgb.len(),
            cmyk.len(),
            hsl.len(),
            hsv.len(),
            pantone.len(),
        ];
        if lengths.iter().any(|&len| len != n) {
            return Err(SeedError::InvalidData(format!(
                "flag color columns are misaligned: {n} names vs {lengths:?}"
            )));
        }

        let mut colors = Vec::with_capacity(n);
        for i in 0..n {
            colors.push(FlagColor {
                name: names[i].clone(),
                web_name: web[i].clone(),
                contrast: contrast[i].clone(),
                hex: hex[i].clone(),
                rgb: rgb[i].clone(),
                cmyk: cmyk[i].clone(),
                hsl: hsl[i].clone(),
                hsv: hsv[i].clone(),
                pantone: pantone[i].clone(),
            });
        }
        Ok(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Currency, Timezones};
    use serde_json::json;

    fn tricolore() -> Vec<FlagColor> {
        vec![
            FlagColor {
                name: Some("Blue".into()),
                hex: Some("#0055A4".into()),
                rgb: Some(json!("0,85,164")),
                ..Default::default()
            },
            // No hex and no rgb: both columns must hold null at index 1.
            FlagColor {
                name: Some("White".into()),
                pantone: Some("Safe".into()),
                ..Default::default()
            },
            FlagColor {
                name: Some("Red".into()),
                hex: Some("#EF4135".into()),
                rgb: Some(json!([239, 65, 53])),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn flag_color_columns_stay_aligned() {
        let record = CountryRecord {
            flag_colors: tricolore(),
            ..Default::default()
        };
        let cols = encode_country(&record).unwrap();

        assert_eq!(cols.flag_colors, r#"["Blue","White","Red"]"#);
        assert_eq!(cols.flag_colors_hex, r##"["#0055A4",null,"#EF4135"]"##);
        assert_eq!(cols.flag_colors_rgb, r#"["0,85,164",null,[239,65,53]]"#);
        assert_eq!(cols.flag_colors_pantone, r#"[null,"Safe",null]"#);

        assert_eq!(cols.flag_colors().unwrap(), tricolore());
    }

    #[test]
    fn misaligned_columns_are_rejected() {
        let mut cols = encode_country(&CountryRecord {
            flag_colors: tricolore(),
            ..Default::default()
        })
        .unwrap();
        cols.flag_colors_hex = r##"["#0055A4"]"##.to_string();
        assert!(matches!(cols.flag_colors(), Err(SeedError::InvalidData(_))));
    }

    #[test]
    fn documents_use_stable_field_names() {
        let cols = encode_country(&CountryRecord::default()).unwrap();
        assert_eq!(cols.borders, "[]");
        assert_eq!(cols.timezones, r#"{"main":"","others":[]}"#);
        assert_eq!(
            decode::<Value>(&cols.currency).unwrap(),
            json!({
                "name": null, "code": null, "symbol": null, "banknotes": [],
                "coins": {"main": [], "sub": []},
                "unit": {"main": null, "sub": null, "to_unit": null}
            })
        );
        assert_eq!(
            decode::<Value>(&cols.flag_emoji).unwrap()["uCode"],
            Value::Null
        );
        assert_eq!(decode::<Currency>(&cols.currency).unwrap(), Currency::default());
        assert_eq!(decode::<Timezones>(&cols.timezones).unwrap(), Timezones::default());
    }

    #[test]
    fn coordinates_reserve_empty_gps() {
        let cols = encode_coordinates(&CountryCoordinates {
            latitude: Some(46.0),
            ..Default::default()
        });
        assert_eq!(cols.gps, "[]");
        assert_eq!(cols.latitude, Some(46.0));
    }

    #[test]
    fn extras_encode_internet_document() {
        let cols = encode_extras(&CountryExtras::default()).unwrap();
        assert_eq!(
            decode::<Value>(&cols.internet).unwrap(),
            json!({"speed": {"average_fixed": null, "average_mobile": null}, "penetration": null})
        );
        assert_eq!(cols.religions, "[]");
    }
}
