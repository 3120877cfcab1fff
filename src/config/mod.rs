//! Configuration management for vidrows

mod io;
mod types;

pub use types::*;

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use crate::answer::DurationMode;
use crate::extract::ExtractOptions;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOverrides {
    pub video_type: Option<i64>,
    pub top_n: Option<usize>,
    pub short_durations: Option<DurationMode>,
}

impl Config {
    /// Get the config file path (~/.config/vidrows/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit path, or the default location
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => io::load_from(path),
            None => io::load(),
        }
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        io::parse(contents)
    }

    /// Combine file settings with command-line overrides
    pub fn extract_options(&self, overrides: ExtractOverrides) -> Result<ExtractOptions> {
        let top_n = overrides.top_n.unwrap_or(self.extract.top_n);
        if top_n == 0 {
            bail!("top-n must be > 0");
        }

        Ok(ExtractOptions {
            video_type: overrides.video_type.unwrap_or(self.extract.video_type),
            top_n,
            short_durations: overrides
                .short_durations
                .unwrap_or(self.normalize.short_durations),
        })
    }
}
