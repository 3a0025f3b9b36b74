// Sun Oct 18 2026 - Alex

use crate::pattern::PatternError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do with characters above U+00FF when building a pattern from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Narrowing {
    /// Keep the low byte of the code point.
    #[default]
    Truncate,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatternConfig {
    pub narrowing: Narrowing,
    /// Skip candidate offsets with memchr on the first concrete byte.
    pub prefilter: bool,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            narrowing: Narrowing::Truncate,
            prefilter: true,
        }
    }
}

impl PatternConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_narrowing(mut self, narrowing: Narrowing) -> Self {
        self.narrowing = narrowing;
        self
    }

    pub fn with_prefilter(mut self, prefilter: bool) -> Self {
        self.prefilter = prefilter;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, PatternError> {
        let config: Self = serde_json::from_str(json)?;
        log::debug!("Loaded pattern config: {:?}", config);
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PatternError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json).map_err(|e| match e {
            PatternError::Json(inner) => PatternError::Config(format!("{}: {}", path.display(), inner)),
            other => other,
        })
    }

    pub fn to_json_string(&self) -> Result<String, PatternError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
