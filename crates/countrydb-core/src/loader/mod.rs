// crates/countrydb-core/src/loader/mod.rs

//! # Seed Loader
//!
//! Handles the Physical Layer (directory layout, I/O, decompression) and
//! hands parsed [`raw`](crate::raw) structures to the builder.
//!
//! Expected layout (every file may also be `*.json.gz`):
//!
//! ```text
//! <root>/regions.json                          [RegionSeed]
//! <root>/countries.json                        CountrySeed | [CountrySeed]
//! <root>/countries/*.json                      CountrySeed | [CountrySeed]
//! <root>/translations/<locale>/regions.json    { "<en slug>": "<name>" }
//! <root>/translations/<locale>/countries.json  { "<iso2|iso3>": "<name>" }
//! ```

pub mod common_io;

use crate::error::{Result, SeedError};
use crate::raw::{CountrySeed, RegionSeed, TranslationsRaw};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const REGIONS: &str = "regions";
const COUNTRIES: &str = "countries";
const TRANSLATIONS: &str = "translations";

/// One record of a countries file.
#[derive(Debug)]
pub struct CountryEntry {
    /// The record's `name`, or `<file>[<index>]` when it has none.
    pub label: String,
    pub seed: Result<CountrySeed>,
}

/// A seed directory on disk.
#[derive(Debug, Clone)]
pub struct SeedSource {
    root: PathBuf,
}

impl SeedSource {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(SeedError::NotFound(format!(
                "Seed directory not found at {}",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    /// The bundled sample data set used by the tests and the example.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Regions from `regions.json`. Empty when the file is absent, for data
    /// sets whose regions are seeded by some other step.
    pub fn regions(&self) -> Result<Vec<RegionSeed>> {
        match find_json(&self.root, REGIONS) {
            Some(path) => common_io::read_json(&path),
            None => {
                debug!(root = %self.root.display(), "no regions file");
                Ok(Vec::new())
            }
        }
    }

    /// Countries from `countries.json` followed by every file in
    /// `countries/`, in file-name order. Fails on the first bad record.
    pub fn countries(&self) -> Result<Vec<CountrySeed>> {
        self.country_entries()?
            .into_iter()
            .map(|entry| entry.seed)
            .collect()
    }

    /// Same records as [`countries`](Self::countries), each parsed on its
    /// own so one malformed record does not hide the others. Only an
    /// unreadable file or invalid JSON fails the whole call.
    pub fn country_entries(&self) -> Result<Vec<CountryEntry>> {
        let mut files = Vec::new();
        if let Some(path) = find_json(&self.root, COUNTRIES) {
            files.push(path);
        }
        let dir = self.root.join(COUNTRIES);
        if dir.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(&dir)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && is_json(p))
                .collect();
            entries.sort();
            files.extend(entries);
        }

        let mut out = Vec::new();
        for path in files {
            for (index, record) in read_one_or_many(&path)?.into_iter().enumerate() {
                let label = record
                    .get("name")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{}[{index}]", path.display()));
                let seed = serde_json::from_value(record).map_err(|e| {
                    SeedError::InvalidData(format!("{}[{index}]: {}", path.display(), e))
                });
                out.push(CountryEntry { label, seed });
            }
        }
        debug!(count = out.len(), "country records loaded");
        Ok(out)
    }

    /// Locale directories under `translations/`, sorted.
    pub fn locales(&self) -> Result<Vec<String>> {
        let dir = self.root.join(TRANSLATIONS);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut locales: Vec<String> = fs::read_dir(&dir)?
            .filter_map(|entry| entry.ok())
            .filter(|e| e.path().is_dir())
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .collect();
        locales.sort();
        Ok(locales)
    }

    pub fn region_translations(&self, locale: &str) -> Result<Option<TranslationsRaw>> {
        self.translations(locale, REGIONS)
    }

    pub fn country_translations(&self, locale: &str) -> Result<Option<TranslationsRaw>> {
        self.translations(locale, COUNTRIES)
    }

    fn translations(&self, locale: &str, kind: &str) -> Result<Option<TranslationsRaw>> {
        let dir = self.root.join(TRANSLATIONS).join(locale);
        find_json(&dir, kind)
            .map(|path| common_io::read_json(&path))
            .transpose()
    }
}

/// `<dir>/<stem>.json`, falling back to `<dir>/<stem>.json.gz`.
fn find_json(dir: &Path, stem: &str) -> Option<PathBuf> {
    [format!("{stem}.json"), format!("{stem}.json.gz")]
        .into_iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}

fn is_json(path: &Path) -> bool {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    name.ends_with(".json") || name.ends_with(".json.gz")
}

/// Records of a file holding either one object or an array of them.
fn read_one_or_many(path: &Path) -> Result<Vec<Value>> {
    match common_io::read_json(path)? {
        Value::Array(items) => Ok(items),
        one => Ok(vec![one]),
    }
}
