use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::types::DEFAULT_INTERVAL_SECONDS;

/// Settings record of the enclosing tool, passed explicitly into the
/// formatting call rather than read from ambient state.
///
/// The interval is measured in seconds of accumulated spoken content.
/// Settings files written by earlier versions spell the field
/// `timestampInterval`; both spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(
        default = "default_interval_seconds",
        alias = "interval",
        alias = "timestampInterval"
    )]
    pub interval_seconds: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval_seconds: DEFAULT_INTERVAL_SECONDS,
        }
    }
}

impl Settings {
    /// Load settings from an optional JSON file override; defaults
    /// apply when no path is given.
    pub fn from_override(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let data = fs::read_to_string(p)
                    .with_context(|| format!("Failed to read settings file {:?}", p))?;
                serde_json::from_str(&data)
                    .with_context(|| format!("Failed to parse settings file {:?}", p))
            }
            None => Ok(Self::default()),
        }
    }
}

fn default_interval_seconds() -> f64 {
    DEFAULT_INTERVAL_SECONDS
}
