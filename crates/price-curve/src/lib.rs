// File: crates/price-curve/src/lib.rs
// Summary: CLI library; argument definitions and command implementations over generic I/O.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Command};

use anyhow::{Context, Result};
use pricing_core::{PresentationAdapter, PricingConfig};

/// Load the config named on the command line, or defaults when none is given.
pub fn load_config(cli: &Cli) -> Result<PricingConfig> {
    match &cli.config {
        Some(path) => PricingConfig::load(path).with_context(|| format!("loading config {}", path.display())),
        None => Ok(PricingConfig::default()),
    }
}

/// Validate the config and build the adapter. Invalid ranges or coefficients stop start-up.
pub fn build_adapter(config: &PricingConfig) -> Result<PresentationAdapter> {
    let (params, domain) = config.validate().context("invalid pricing configuration")?;
    let adapter = PresentationAdapter::new(params, domain, config.domain.default)?;
    Ok(adapter)
}
