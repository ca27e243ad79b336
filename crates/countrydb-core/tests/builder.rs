use countrydb_core::codec::decode;
use countrydb_core::model::Timezones;
use countrydb_core::store::{memory, tables};
use countrydb_core::{
    Builder, CountrySeed, DbStats, MemoryStore, MissingParentPolicy, RegionSeed, SeedError, Store,
};
use serde_json::{json, Value};
use std::collections::BTreeMap;

fn builder_with_regions(names: &[&str]) -> Builder<MemoryStore> {
    let mut builder = Builder::new(MemoryStore::new());
    let seeds: Vec<RegionSeed> = names
        .iter()
        .map(|name| RegionSeed {
            slug: None,
            name: name.to_string(),
        })
        .collect();
    builder.regions(&seeds).unwrap();
    builder
}

fn seed(value: Value) -> CountrySeed {
    serde_json::from_value(value).unwrap()
}

fn france() -> CountrySeed {
    seed(json!({
        "name": "France",
        "region": "europe",
        "iso_alpha_2": "FR",
        "iso_alpha_3": "FRA",
        "borders": [{"iso_alpha_2": "DE"}, {"iso_alpha_2": "ES"}],
        "timezones": ["CET", "CEST"]
    }))
}

fn batch(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn france_end_to_end() {
    let mut builder = builder_with_regions(&["Europe"]);
    let id = builder.country(&france()).unwrap();

    let tables = builder.store().tables();
    let row = tables.country(id).unwrap();
    assert_eq!(decode::<Vec<String>>(&row.columns.borders).unwrap(), vec!["de", "es"]);
    assert_eq!(
        decode::<Timezones>(&row.columns.timezones).unwrap(),
        Timezones {
            main: "CET".into(),
            others: vec!["CEST".into()],
        }
    );
    assert!(row.columns.is_visible);

    let t = &tables.country_translations[0];
    assert_eq!(t.parent, id);
    assert_eq!(t.translation.locale, "en");
    assert_eq!(t.translation.slug, "france");
    assert_eq!(t.translation.name, "France");
}

#[test]
fn country_creates_one_row_per_dependent_table() {
    let mut builder = builder_with_regions(&["Europe"]);
    builder.country(&france()).unwrap();

    let stats = builder.store().stats().unwrap();
    assert_eq!(stats.countries, 1);
    assert_eq!(stats.country_translations, 1);
    assert_eq!(stats.extras, 1);
    assert_eq!(stats.coordinates, 1);
    assert_eq!(stats.geographies, 0);
}

#[test]
fn geography_row_only_when_payload_is_typed() {
    let mut builder = builder_with_regions(&["Europe"]);

    let mut untyped = france();
    untyped.geographical = Some(serde_json::from_value(json!({"features": [{"type": "Feature"}]})).unwrap());
    builder.country(&untyped).unwrap();
    assert_eq!(builder.store().stats().unwrap().geographies, 0);

    let mut typed = france();
    typed.geographical = Some(
        serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [{"type": "Feature", "properties": {"cca2": "fr"}, "geometry": {"type": "Point", "coordinates": [2.2, 46.2]}}]
        }))
        .unwrap(),
    );
    let id = builder.country(&typed).unwrap();

    let geo = &builder.store().tables().geographies[0];
    assert_eq!(geo.country, id);
    assert_eq!(geo.columns.kind, "FeatureCollection");
    assert_eq!(geo.columns.features_type.as_deref(), Some("Feature"));
    assert_eq!(decode::<Value>(&geo.columns.properties).unwrap(), json!({"cca2": "fr"}));
}

#[test]
fn unknown_region_writes_nothing() {
    let mut builder = builder_with_regions(&["Europe"]);
    let before = builder.store().stats().unwrap();

    let mut lost = france();
    lost.region = "atlantis".into();
    let err = builder.country(&lost).unwrap_err();

    assert!(err.is_missing_parent());
    assert!(err.to_string().contains("atlantis"));
    assert_eq!(builder.store().stats().unwrap(), before);
}

#[test]
fn region_is_resolved_in_the_seed_locale() {
    let mut builder = builder_with_regions(&["Europe"]);
    builder
        .regions_translations(&batch(&[("europe", "Europa")]), "es")
        .unwrap();

    let mut spanish = france();
    spanish.region = "europa".into();
    spanish.lang = Some("es".into());
    builder.country(&spanish).unwrap();

    // `europa` is not an `en` slug.
    let mut wrong_locale = france();
    wrong_locale.region = "europa".into();
    assert!(builder.country(&wrong_locale).unwrap_err().is_missing_parent());
}

#[test]
fn region_slug_matches_regardless_of_case() {
    let mut builder = builder_with_regions(&["Europe"]);
    let mut capitalized = france();
    capitalized.region = "Europe".into();
    builder.country(&capitalized).unwrap();
    assert_eq!(builder.store().stats().unwrap().countries, 1);
}

#[test]
fn write_failure_rolls_back_every_table() {
    let mut builder = builder_with_regions(&["Europe"]);
    builder.store_mut().fail_on(tables::COORDINATES);

    let err = builder.country(&france()).unwrap_err();
    assert!(matches!(err, SeedError::Write(_)));

    let stats = builder.store().stats().unwrap();
    assert_eq!(stats.countries, 0);
    assert_eq!(stats.country_translations, 0);
    assert_eq!(stats.extras, 0);

    builder.store_mut().clear_failpoints();
    builder.country(&france()).unwrap();
    assert_eq!(builder.store().stats().unwrap().coordinates, 1);
}

#[test]
fn flag_color_lists_match_input_length_and_order() {
    let mut builder = builder_with_regions(&["Europe"]);
    let mut s = france();
    s.flag_colors = serde_json::from_value(json!([
        {"name": "Blue", "hex": "#0055A4", "rgb": "0,85,164"},
        {"name": "White", "rgb": "255,255,255"},
        {"name": "Red", "hex": "#EF4135", "rgb": "239,65,53"}
    ]))
    .unwrap();
    let id = builder.country(&s).unwrap();

    let columns = &builder.store().tables().country(id).unwrap().columns;
    let hex: Vec<Option<String>> = decode(&columns.flag_colors_hex).unwrap();
    let rgb: Vec<Option<String>> = decode(&columns.flag_colors_rgb).unwrap();
    let pantone: Vec<Option<String>> = decode(&columns.flag_colors_pantone).unwrap();
    assert_eq!(hex, vec![Some("#0055A4".into()), None, Some("#EF4135".into())]);
    assert_eq!(
        rgb,
        vec![
            Some("0,85,164".into()),
            Some("255,255,255".into()),
            Some("239,65,53".into())
        ]
    );
    assert_eq!(pantone.len(), 3);

    let colors = columns.flag_colors().unwrap();
    assert_eq!(colors[1].name.as_deref(), Some("White"));
    assert_eq!(colors[1].hex, None);
}

#[test]
fn region_translation_example() {
    let mut builder = builder_with_regions(&["Europe"]);
    let report = builder
        .regions_translations(&batch(&[("europe", "Europa")]), "es")
        .unwrap();
    assert_eq!(report.inserted, 1);

    let row = builder
        .store()
        .tables()
        .region_translations
        .iter()
        .find(|r| r.translation.locale == "es")
        .unwrap();
    assert_eq!(row.translation.slug, "europa");
    assert_eq!(row.translation.name, "Europa");
}

#[test]
fn region_translations_are_all_or_nothing() {
    let mut builder = builder_with_regions(&["Asia", "Europe"]);
    let before = builder.store().stats().unwrap();

    // "asia" sorts first and is written before "atlantis" fails.
    let err = builder
        .regions_translations(
            &batch(&[("asia", "Asia"), ("atlantis", "Atlántida"), ("europe", "Europa")]),
            "es",
        )
        .unwrap_err();

    assert!(matches!(err, SeedError::MissingParent { entity: "Region", .. }));
    assert!(err.to_string().contains("Atlántida"));
    assert_eq!(builder.store().stats().unwrap(), before);
}

#[test]
fn missing_parent_survives_a_failed_rollback() {
    let mut builder = builder_with_regions(&["Europe"]);
    builder.country(&france()).unwrap();
    builder.store_mut().fail_on(memory::ROLLBACK);

    let err = builder
        .regions_translations(&batch(&[("atlantis", "Atlántida")]), "es")
        .unwrap_err();
    assert!(matches!(err, SeedError::MissingParent { entity: "Region", .. }));

    let err = builder
        .countries_translations_with_policy(
            &batch(&[("XK", "Kosovo")]),
            "es",
            MissingParentPolicy::Abort,
        )
        .unwrap_err();
    assert!(matches!(err, SeedError::MissingParent { entity: "Country", .. }));
}

#[test]
fn region_translations_can_skip_when_asked() {
    let mut builder = builder_with_regions(&["Europe"]);
    let report = builder
        .regions_translations_with_policy(
            &batch(&[("atlantis", "Atlántida"), ("europe", "Europa")]),
            "es",
            MissingParentPolicy::Skip,
        )
        .unwrap();
    assert_eq!(report.inserted, 1);
    assert_eq!(report.skipped, vec!["atlantis"]);
}

#[test]
fn country_translations_skip_unknown_codes() {
    let mut builder = builder_with_regions(&["Europe"]);
    builder.country(&france()).unwrap();

    let report = builder
        .countries_translations(&batch(&[("FRA", " francia "), ("XK", "Kosovo")]), "es")
        .unwrap();
    assert_eq!(report.inserted, 1);
    assert_eq!(report.skipped, vec!["XK"]);

    let row = builder
        .store()
        .tables()
        .country_translations
        .iter()
        .find(|r| r.translation.locale == "es")
        .unwrap();
    assert_eq!(row.translation.slug, "francia");
    assert_eq!(row.translation.name, "Francia");
}

#[test]
fn country_translations_strict_policy_rolls_back() {
    let mut builder = builder_with_regions(&["Europe"]);
    builder.country(&france()).unwrap();
    let before = builder.store().stats().unwrap();

    let err = builder
        .countries_translations_with_policy(
            &batch(&[("FR", "Francia"), ("XK", "Kosovo")]),
            "es",
            MissingParentPolicy::Abort,
        )
        .unwrap_err();
    assert!(matches!(err, SeedError::MissingParent { entity: "Country", .. }));
    assert_eq!(builder.store().stats().unwrap(), before);
}

#[test]
fn empty_batches_commit_nothing() {
    let mut builder = builder_with_regions(&[]);
    let report = builder.countries_translations(&BTreeMap::new(), "de").unwrap();
    assert_eq!(report.inserted, 0);
    assert_eq!(builder.store().stats().unwrap(), DbStats::default());
}

#[test]
fn region_with_empty_slug_is_rejected_atomically() {
    let mut builder = Builder::new(MemoryStore::new());
    let err = builder
        .regions(&[
            RegionSeed {
                slug: None,
                name: "Europe".into(),
            },
            RegionSeed {
                slug: None,
                name: "???".into(),
            },
        ])
        .unwrap_err();
    assert!(matches!(err, SeedError::InvalidData(_)));
    assert_eq!(builder.store().stats().unwrap().regions, 0);
}
