//! Ticker universe loading.

use crate::models::Ticker;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UniverseError {
    #[error("failed to read universe file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse universe file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One row of an exchange listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingRow {
    #[serde(alias = "Code")]
    pub code: String,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
}

/// Keep listing codes made only of digits and append the market suffix,
/// e.g. `2330` becomes `2330.TW`. Warrants and other lettered codes drop out.
pub fn normalize_listing(rows: Vec<ListingRow>, suffix: &str) -> Vec<Ticker> {
    rows.into_iter()
        .filter(|row| !row.code.is_empty() && row.code.chars().all(|c| c.is_ascii_digit()))
        .map(|row| Ticker {
            code: format!("{}{}", row.code, suffix),
            name: row.name,
        })
        .collect()
}

/// Load tickers from a JSON array of `{ "code": ..., "name": ... }`.
pub fn load_universe(path: impl AsRef<Path>) -> Result<Vec<Ticker>, UniverseError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| UniverseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| UniverseError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Load an exchange listing and normalize it with `suffix`.
pub fn load_listing(path: impl AsRef<Path>, suffix: &str) -> Result<Vec<Ticker>, UniverseError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| UniverseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let rows: Vec<ListingRow> =
        serde_json::from_str(&raw).map_err(|source| UniverseError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(normalize_listing(rows, suffix))
}
