//! Bar source reading one JSON array of bars per ticker from a directory.

use crate::models::{Bar, Ticker};
use crate::services::market_data::{BarSource, SourceError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads `<dir>/<code>.json`. A missing file is an empty series.
#[derive(Debug, Clone)]
pub struct JsonDirBarSource {
    dir: PathBuf,
}

impl JsonDirBarSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, ticker: &Ticker) -> PathBuf {
        self.dir.join(format!("{}.json", ticker.code))
    }
}

#[async_trait]
impl BarSource for JsonDirBarSource {
    async fn fetch_bars(&self, ticker: &Ticker) -> Result<Vec<Bar>, SourceError> {
        let path = self.path_for(ticker);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(ticker = %ticker.code, path = %path.display(), "JsonDirBarSource: no file");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(SourceError::Io {
                    ticker: ticker.code.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&raw).map_err(|source| SourceError::Decode {
            ticker: ticker.code.clone(),
            source,
        })
    }
}
