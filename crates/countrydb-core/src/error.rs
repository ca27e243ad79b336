// crates/countrydb-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading seed files or writing them to a store.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A referenced parent row (region or country) does not exist.
    ///
    /// Fatal to the enclosing transaction.
    #[error("{entity} {key} not found")]
    MissingParent { entity: &'static str, key: String },

    /// A seed file or directory could not be located.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The seed data is structurally unusable.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A store refused a write.
    #[error("Write failed: {0}")]
    Write(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl SeedError {
    pub fn missing_region(key: impl Into<String>) -> Self {
        SeedError::MissingParent {
            entity: "Region",
            key: key.into(),
        }
    }

    pub fn missing_country(key: impl Into<String>) -> Self {
        SeedError::MissingParent {
            entity: "Country",
            key: key.into(),
        }
    }

    /// True when this error means a parent row could not be resolved.
    pub fn is_missing_parent(&self) -> bool {
        matches!(self, SeedError::MissingParent { .. })
    }
}

pub type Result<T> = std::result::Result<T, SeedError>;
