// File: crates/pricing-core/src/series.rs
// Summary: Precomputed price curve, one point per integer group size in the domain.

use serde::Serialize;

use crate::cost::{price_for, CostParameters, PricePoint};
use crate::domain::GroupDomain;
use crate::error::Result;

/// Ordered price points, ascending by group size. Immutable once generated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn points(&self) -> &[PricePoint] { &self.points }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// (group size, price per person) pairs for the chart's line series.
    pub fn xy(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(PricePoint::xy).collect()
    }

    /// Look up the point for `group_size`, if it lies in the series.
    pub fn get(&self, group_size: u32) -> Option<&PricePoint> {
        let first = self.points.first()?.group_size;
        let idx = group_size.checked_sub(first)? as usize;
        self.points.get(idx)
    }

    /// (min, max) price per person across the series.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() { return None; }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for p in &self.points {
            lo = lo.min(p.price_per_person);
            hi = hi.max(p.price_per_person);
        }
        Some((lo, hi))
    }
}

pub struct SeriesGenerator;

impl SeriesGenerator {
    /// Evaluate the model for every integer in `[min_size, max_size]`.
    /// Fails with `InvalidRange` for zero or inverted bounds.
    pub fn generate(min_size: u32, max_size: u32, params: &CostParameters) -> Result<PriceSeries> {
        let domain = GroupDomain::new(min_size, max_size)?;
        Ok(Self::generate_for(&domain, params))
    }

    pub fn generate_for(domain: &GroupDomain, params: &CostParameters) -> PriceSeries {
        let mut points = Vec::with_capacity(domain.len());
        points.extend(domain.iter().map(|n| price_for(n, params)));
        PriceSeries { points }
    }
}
