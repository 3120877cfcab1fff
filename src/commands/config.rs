//! Config subcommands handler

use anyhow::Result;
use std::path::Path;

use vidrows::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{}", toml_str.trim_end());
    Ok(())
}

/// Print the default config file location.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
