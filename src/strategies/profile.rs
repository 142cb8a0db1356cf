//! A rule bundled with the indicator parameters it was tuned for.

use crate::indicators::IndicatorParams;
use crate::models::{IndicatorKey, ScreeningRule};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("rule '{0}' has no conditions")]
    EmptyRule(String),
    #[error("rule '{rule}' reads {key}, which the indicator params do not produce")]
    UnproducedKey { rule: String, key: IndicatorKey },
    #[error("failed to read profile file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse profile file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningProfile {
    pub rule: ScreeningRule,
    #[serde(default)]
    pub indicators: IndicatorParams,
}

impl ScreeningProfile {
    pub fn new(rule: ScreeningRule, indicators: IndicatorParams) -> Self {
        Self { rule, indicators }
    }

    pub fn name(&self) -> &str {
        &self.rule.name
    }

    /// Reject rules that could never pass under these params.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.rule.conditions.is_empty() {
            return Err(ProfileError::EmptyRule(self.rule.name.clone()));
        }
        if let Some(key) = self
            .rule
            .referenced_keys()
            .into_iter()
            .find(|k| !self.indicators.produces(*k))
        {
            return Err(ProfileError::UnproducedKey {
                rule: self.rule.name.clone(),
                key,
            });
        }
        Ok(())
    }

    pub fn from_json(json: &str, origin: &str) -> Result<Self, ProfileError> {
        let profile: ScreeningProfile =
            serde_json::from_str(json).map_err(|source| ProfileError::Parse {
                path: origin.to_string(),
                source,
            })?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load and validate a profile from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json, &path.display().to_string())
    }
}
