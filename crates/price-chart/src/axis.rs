// File: crates/price-chart/src/axis.rs
// Summary: Axis model with labels, ranges and tick label formatting.

use pricing_core::format_usd;

use crate::grid::nice_ticks;

/// How tick values are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    Integer,
    Usd,
}

impl TickFormat {
    pub fn format(&self, v: f64) -> String {
        match self {
            TickFormat::Integer => format!("{}", v.round() as i64),
            TickFormat::Usd => format_usd(v),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: TickFormat,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: TickFormat::Integer }
    }

    pub fn with_ticks(mut self, ticks: TickFormat) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn default_x() -> Self {
        Self::new("Group size", 20.0, 100.0)
    }

    pub fn default_y() -> Self {
        Self::new("Price per person (USD)", 0.0, 1000.0).with_ticks(TickFormat::Usd)
    }

    /// (value, label) pairs for roughly `target` ticks.
    pub fn tick_labels(&self, target: usize) -> Vec<(f64, String)> {
        nice_ticks(self.min, self.max, target)
            .into_iter()
            .map(|v| (v, self.ticks.format(v)))
            .collect()
    }
}
