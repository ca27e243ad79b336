use countrydb_core::codec::decode;
use countrydb_core::model::{Currency, FlagEmoji};
use countrydb_core::pipeline::{self, FailurePolicy, SeedOptions};
use countrydb_core::{Builder, DbStats, MemoryStore, SeedError, SeedSource, Store};
use serde_json::{json, Value};
use std::path::PathBuf;

fn fixtures() -> SeedSource {
    SeedSource::open(SeedSource::default_data_dir()).unwrap()
}

fn broken() -> SeedSource {
    SeedSource::open(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("broken"))
        .unwrap()
}

fn malformed() -> SeedSource {
    SeedSource::open(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("malformed"))
        .unwrap()
}

/// Rows the fixture set produces: 5 regions, 4 countries (France has the
/// only typed outline), `es` + `fr` translations with `XK` skipped.
const FIXTURE_STATS: DbStats = DbStats {
    regions: 5,
    region_translations: 5 + 3 + 2,
    countries: 4,
    country_translations: 4 + 3 + 2,
    extras: 4,
    coordinates: 4,
    geographies: 1,
};

#[test]
fn loader_reads_the_fixture_layout() {
    let source = fixtures();
    assert_eq!(source.regions().unwrap().len(), 5);

    let names: Vec<String> = source
        .countries()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["France", "Germany", "Spain", "Japan"]);

    assert_eq!(source.locales().unwrap(), vec!["es", "fr"]);
    assert!(source.country_translations("de").unwrap().is_none());
}

#[test]
fn seeds_fixture_set_into_memory() {
    let mut builder = Builder::new(MemoryStore::new());
    let report = pipeline::seed(&mut builder, &fixtures(), &SeedOptions::default()).unwrap();

    assert_eq!(report.regions, 5);
    assert_eq!(report.countries, 4);
    assert_eq!(report.region_translations, 5);
    assert_eq!(report.country_translations, 5);
    assert_eq!(
        report.skipped_country_translations,
        vec![("es".to_string(), "XK".to_string())]
    );
    assert_eq!(builder.store().stats().unwrap(), FIXTURE_STATS);
}

#[test]
fn loose_seed_values_are_normalized() {
    let mut builder = Builder::new(MemoryStore::new());
    pipeline::seed(&mut builder, &fixtures(), &SeedOptions::default()).unwrap();
    let tables = builder.store().tables();

    let france = &tables.countries[0].columns;
    assert_eq!(france.geoname_id.as_deref(), Some("3017382"));
    assert_eq!(france.area, Some(551_695.0));
    let currency: Currency = decode(&france.currency).unwrap();
    assert_eq!(currency.unit.to_unit, Some(100));
    assert_eq!(currency.banknotes.len(), 7);
    let emoji: FlagEmoji = decode(&france.flag_emoji).unwrap();
    assert_eq!(emoji.shortcode.as_deref(), Some(":flag-fr:"));
    assert_eq!(france.flag_colors().unwrap().len(), 3);

    let internet: Value = decode(&tables.extras[0].columns.internet).unwrap();
    assert_eq!(internet["speed"]["average_fixed"], json!(194.08));
    assert_eq!(internet["speed"]["average_mobile"], "84.28");
    assert_eq!(internet["penetration"], "92.3%");

    let germany = &tables.countries[1].columns;
    assert_eq!(germany.iso_numeric.as_deref(), Some("276"));
    assert_eq!(germany.population, Some(83_200_000));
    let currency: Currency = decode(&germany.currency).unwrap();
    assert_eq!(currency.name, None);
    assert_eq!(currency.code.as_deref(), Some("EUR"));

    let spain = &tables.countries[2].columns;
    assert_eq!(spain.borders, "[]");
    assert_eq!(spain.timezones, r#"{"main":"","others":[]}"#);
    assert_eq!(tables.coordinates[2].columns.latitude, Some(40.4637));
}

#[test]
fn halt_policy_stops_at_first_failed_country() {
    let mut builder = Builder::new(MemoryStore::new());
    let err = pipeline::seed(&mut builder, &broken(), &SeedOptions::default()).unwrap_err();
    assert!(err.is_missing_parent());

    let stats = builder.store().stats().unwrap();
    assert_eq!(stats.regions, 1);
    assert_eq!(stats.countries, 0);
}

#[test]
fn continue_policy_records_failures_and_moves_on() {
    let mut builder = Builder::new(MemoryStore::new());
    let options = SeedOptions {
        on_country_failure: FailurePolicy::Continue,
    };
    let report = pipeline::seed(&mut builder, &broken(), &options).unwrap();
    assert_eq!(report.countries, 1);
    assert_eq!(report.failed_countries, vec!["Atlantis"]);
    assert_eq!(builder.store().stats().unwrap().countries, 1);
}

#[test]
fn malformed_record_is_one_failed_country_under_continue() {
    let mut builder = Builder::new(MemoryStore::new());
    let options = SeedOptions {
        on_country_failure: FailurePolicy::Continue,
    };
    let report = pipeline::seed(&mut builder, &malformed(), &options).unwrap();
    assert_eq!(report.countries, 2);
    assert_eq!(report.failed_countries, vec!["Bad"]);
    assert_eq!(builder.store().stats().unwrap().countries, 2);
}

#[test]
fn malformed_record_halts_after_earlier_countries() {
    let mut builder = Builder::new(MemoryStore::new());
    let err = pipeline::seed(&mut builder, &malformed(), &SeedOptions::default()).unwrap_err();
    assert!(matches!(err, SeedError::InvalidData(_)));
    assert_eq!(builder.store().stats().unwrap().countries, 1);
}

#[test]
fn translate_reruns_one_locale() {
    let mut builder = Builder::new(MemoryStore::new());
    pipeline::seed(&mut builder, &fixtures(), &SeedOptions::default()).unwrap();

    let report = pipeline::translate(&mut builder, &fixtures(), "fr").unwrap();
    assert_eq!(report.region_translations, 2);
    assert_eq!(report.country_translations, 2);
    assert_eq!(
        builder.store().stats().unwrap().country_translations,
        FIXTURE_STATS.country_translations + 2
    );
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use countrydb_core::SqliteStore;

    fn store() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        store.migrate().unwrap();
        store
    }

    #[test]
    fn seeds_fixture_set_into_sqlite() {
        let mut builder = Builder::new(store());
        pipeline::seed(&mut builder, &fixtures(), &SeedOptions::default()).unwrap();
        assert_eq!(builder.store().stats().unwrap(), FIXTURE_STATS);

        let (borders, timezones, slug): (String, String, String) = builder
            .store()
            .connection()
            .query_row(
                "SELECT c.borders, c.timezones, t.slug
                 FROM lc_countries c
                 JOIN lc_country_translations t ON t.lc_country_id = c.id
                 WHERE c.iso_alpha_2 = 'FR' AND t.locale = 'es'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!(borders, r#"["de","es"]"#);
        assert_eq!(timezones, r#"{"main":"CET","others":["CEST"]}"#);
        assert_eq!(slug, "francia");
    }

    #[test]
    fn failed_country_leaves_no_rows_in_sqlite() {
        let mut builder = Builder::new(store());
        let options = SeedOptions {
            on_country_failure: FailurePolicy::Continue,
        };
        let report = pipeline::seed(&mut builder, &broken(), &options).unwrap();
        assert_eq!(report.failed_countries, vec!["Atlantis"]);

        let stats = builder.store().stats().unwrap();
        assert_eq!(stats.countries, 1);
        assert_eq!(stats.extras, 1);
        assert_eq!(stats.coordinates, 1);
    }

    #[test]
    fn region_translation_batch_rolls_back_in_sqlite() {
        let mut builder = Builder::new(store());
        pipeline::seed(&mut builder, &fixtures(), &SeedOptions::default()).unwrap();

        let batch = [("asia", "Asia"), ("mu", "Mu"), ("oceania", "Oceanía")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert!(builder
            .regions_translations(&batch, "it")
            .unwrap_err()
            .is_missing_parent());
        assert_eq!(
            builder.store().stats().unwrap().region_translations,
            FIXTURE_STATS.region_translations
        );
    }
}
