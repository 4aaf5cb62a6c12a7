// File: crates/pricing-core/src/config.rs
// Summary: TOML configuration for cost coefficients, selection domain, chart size and venues.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cost::CostParameters;
use crate::domain::GroupDomain;
use crate::error::{PricingError, Result};
use crate::venue::{StayPlan, VenueConfig};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub cost: CostSection,
    pub domain: DomainSection,
    pub chart: ChartSection,
    pub stay: StayPlan,
    /// Extra venues for comparisons; built-in presets are always available.
    pub venues: Vec<VenueConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostSection {
    pub fixed_cost: f64,
    pub variable_cost_per_unit: f64,
}

impl Default for CostSection {
    fn default() -> Self {
        let p = CostParameters::default();
        Self { fixed_cost: p.fixed_cost(), variable_cost_per_unit: p.variable_cost_per_unit() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainSection {
    pub min: u32,
    pub max: u32,
    /// Initial selection; clamped into `[min, max]`.
    pub default: i64,
}

impl Default for DomainSection {
    fn default() -> Self {
        Self { min: 20, max: 100, default: 40 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSection {
    pub width: i32,
    pub height: i32,
    /// Theme name understood by the renderer (`dark`, `light`, ...).
    pub theme: String,
}

impl Default for ChartSection {
    fn default() -> Self {
        Self { width: 1024, height: 640, theme: "dark".into() }
    }
}

impl PricingConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read `path`; a missing file is an error since the caller asked for it explicitly.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| PricingError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&text)
    }

    /// Validated model inputs.
    pub fn validate(&self) -> Result<(CostParameters, GroupDomain)> {
        let params = CostParameters::new(self.cost.fixed_cost, self.cost.variable_cost_per_unit)?;
        let domain = GroupDomain::new(self.domain.min, self.domain.max)?;
        Ok((params, domain))
    }

    /// Built-in presets followed by configured venues.
    pub fn all_venues(&self) -> Vec<VenueConfig> {
        let mut all = VenueConfig::presets();
        all.extend(self.venues.iter().cloned());
        all
    }
}
