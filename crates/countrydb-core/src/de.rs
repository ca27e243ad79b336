// crates/countrydb-core/src/de.rs

//! Lenient `deserialize_with` helpers for seed files.
//!
//! Hand-maintained seed data is loosely typed: a population may be written
//! as `67750000` or `"67750000"`, a list may be `null`. These helpers accept
//! either form and fall back to `None`/empty instead of failing the file.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// String or number → `Option<String>`. `null`, objects and arrays → `None`.
pub fn opt_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Number or numeric string → `Option<u64>`. Separators like `_` or `,` are ignored.
pub fn opt_u64<'de, D>(d: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Some(Value::String(s)) => {
            let digits: String = s.chars().filter(|c| !matches!(c, '_' | ',' | ' ')).collect();
            digits.parse().ok()
        }
        _ => None,
    })
}

/// Number or numeric string → `Option<f64>`.
pub fn opt_f64<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// `null` or missing list → empty `Vec`.
pub fn vec_or_null<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}
