// crates/countrydb-core/src/loader/common_io.rs
use crate::error::{Result, SeedError};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the name ends in `.gz`.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        SeedError::NotFound(format!("Seed file not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(SeedError::InvalidData(format!(
            "{} is gzipped but 'compact' is disabled",
            path.display()
        )))
    }
}

/// Parse a JSON (or JSON.gz) file. Parse errors name the offending file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = open_stream(path)?;
    serde_json::from_reader(reader)
        .map_err(|e| SeedError::InvalidData(format!("{}: {}", path.display(), e)))
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
