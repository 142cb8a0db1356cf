//! Configuration from environment variables (optionally loaded from `.env`).

use crate::core::runtime::RuntimeConfig;
use crate::strategies::{presets, ProfileError, ScreeningProfile};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_RULE: &str = presets::MOMENTUM_BREAKOUT;
pub const DEFAULT_FETCH_SPACING_MS: u64 = 500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown screening rule '{name}' (available: {available})")]
    UnknownRule { name: String, available: String },
    #[error("invalid value '{value}' for {key}: expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Deployment environment from `APP_ENV`, defaulting to `development`.
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .map(|e| e.trim().to_lowercase())
        .unwrap_or_else(|_| "development".to_string())
}

/// Where the active profile comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    Preset(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenerConfig {
    pub profile: ProfileSource,
    pub concurrency: usize,
    pub max_outstanding_fetches: usize,
    pub fetch_spacing: Duration,
    pub universe_file: Option<PathBuf>,
    /// Suffix appended to all-digit listing codes when the universe file is a
    /// raw exchange listing.
    pub listing_suffix: Option<String>,
    pub bars_dir: Option<PathBuf>,
    /// Ticker whose full indicator series is dumped alongside the report.
    pub detail_ticker: Option<String>,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            profile: ProfileSource::Preset(DEFAULT_RULE.to_string()),
            concurrency: 1,
            max_outstanding_fetches: 1,
            fetch_spacing: Duration::from_millis(DEFAULT_FETCH_SPACING_MS),
            universe_file: None,
            listing_suffix: None,
            bars_dir: None,
            detail_ticker: None,
        }
    }
}

impl ScreenerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(path) = get("SCREENER_PROFILE_FILE") {
            config.profile = ProfileSource::File(PathBuf::from(path));
        } else if let Some(name) = get("SCREENER_RULE") {
            config.profile = ProfileSource::Preset(name);
        }

        if let Some(v) = get("SCREENER_CONCURRENCY") {
            config.concurrency = parse_positive("SCREENER_CONCURRENCY", &v)?;
        }
        config.max_outstanding_fetches = match get("SCREENER_MAX_OUTSTANDING_FETCHES") {
            Some(v) => parse_positive("SCREENER_MAX_OUTSTANDING_FETCHES", &v)?,
            None => config.concurrency,
        };
        if let Some(v) = get("SCREENER_FETCH_SPACING_MS") {
            let ms: u64 = v.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SCREENER_FETCH_SPACING_MS",
                value: v.clone(),
                expected: "milliseconds as a non-negative integer",
            })?;
            config.fetch_spacing = Duration::from_millis(ms);
        }

        config.universe_file = get("UNIVERSE_FILE").map(PathBuf::from);
        config.listing_suffix = get("LISTING_SUFFIX");
        config.bars_dir = get("BARS_DIR").map(PathBuf::from);
        config.detail_ticker = get("SCREENER_DETAIL_TICKER");
        Ok(config)
    }

    /// Resolve the configured preset or load the profile file.
    pub fn load_profile(&self) -> Result<ScreeningProfile, ConfigError> {
        match &self.profile {
            ProfileSource::Preset(name) => {
                presets::by_name(name).ok_or_else(|| ConfigError::UnknownRule {
                    name: name.clone(),
                    available: presets::names().join(", "),
                })
            }
            ProfileSource::File(path) => Ok(ScreeningProfile::load(path)?),
        }
    }

    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            concurrency: self.concurrency,
            max_outstanding_fetches: self.max_outstanding_fetches,
            fetch_spacing: self.fetch_spacing,
        }
    }
}

fn parse_positive(key: &'static str, value: &str) -> Result<usize, ConfigError> {
    value
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            expected: "a positive integer",
        })
}
