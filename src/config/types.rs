//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::answer::DurationMode;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub normalize: NormalizeConfig,
}

/// Extraction defaults used when the CLI does not override them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Answer kind selector: 0 = full video answer, 1 = short video answer
    #[serde(default)]
    pub video_type: i64,
    /// Number of result positions to walk per query
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

pub fn default_top_n() -> usize {
    10
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            video_type: 0,
            top_n: default_top_n(),
        }
    }
}

impl ExtractConfig {
    /// Validate ranges. Returns a human-readable message on failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.top_n == 0 {
            return Err("extract.top_n must be > 0".to_string());
        }
        Ok(())
    }
}

/// Field normalization options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// How short-answer `TimeLength` values are written
    #[serde(default)]
    pub short_durations: DurationMode,
}
