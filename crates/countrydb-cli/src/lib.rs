//! countrydb-cli
//! =============
//!
//! Command-line loader for the `countrydb-core` seeding library.
//!
//! This crate primarily provides a binary (`countrydb`). The library target
//! exists so that docs render this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! countrydb --db countries.sqlite init
//! countrydb --db countries.sqlite --data ./data seed --keep-going
//! countrydb --db countries.sqlite --data ./data translate ar
//! countrydb --db countries.sqlite stats
//! ```
//!
//! For programmatic access, use `countrydb-core` directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
