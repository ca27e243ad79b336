// crates/countrydb-core/src/lib.rs

//! countrydb-core
//! ==============
//!
//! Seeds a relational store with world country reference data: regions,
//! countries (identity, currency, flag, timezones), extras, coordinates,
//! GeoJSON outlines and localized names.
//!
//! ```rust
//! use countrydb_core::{Builder, CountrySeed, MemoryStore, RegionSeed};
//!
//! let mut builder = Builder::new(MemoryStore::new());
//! builder.region(&RegionSeed { slug: None, name: "Europe".into() })?;
//!
//! let france: CountrySeed = serde_json::from_str(
//!     r#"{"name": "France", "region": "europe", "iso_alpha_2": "FR", "timezones": ["CET"]}"#,
//! )?;
//! builder.country(&france)?;
//!
//! assert_eq!(builder.store().tables().countries.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod codec;
pub mod convert;
mod de;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod raw;
pub mod store;
pub mod text;

// Re-exports
pub use crate::builder::{Builder, MissingParentPolicy, TranslationReport};
pub use crate::error::{Result, SeedError};
pub use crate::loader::{CountryEntry, SeedSource};
pub use crate::model::{CountryId, RegionId, Translation, DEFAULT_LOCALE};
pub use crate::pipeline::{FailurePolicy, SeedOptions, SeedReport};
pub use crate::raw::{CountrySeed, RegionSeed};
pub use crate::store::{DbStats, MemoryStore, Store, Transaction};
#[cfg(feature = "sqlite")]
pub use crate::store::SqliteStore;
