// File: crates/pricing-core/src/cost.rs
// Summary: Linear cost model mapping a group size to total cost and price per person.

use serde::Serialize;

use crate::error::{PricingError, Result};

/// Coefficients of the linear cost model.
/// Contract: both values are finite and non-negative (checked in `new`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CostParameters {
    fixed_cost: f64,
    variable_cost_per_unit: f64,
}

impl CostParameters {
    pub fn new(fixed_cost: f64, variable_cost_per_unit: f64) -> Result<Self> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if !ok(fixed_cost) || !ok(variable_cost_per_unit) {
            return Err(PricingError::InvalidParameters { fixed_cost, variable_cost_per_unit });
        }
        Ok(Self { fixed_cost, variable_cost_per_unit })
    }

    pub fn fixed_cost(&self) -> f64 { self.fixed_cost }
    pub fn variable_cost_per_unit(&self) -> f64 { self.variable_cost_per_unit }
}

impl Default for CostParameters {
    /// Venue buyout plus per-person catering used by the default chart.
    fn default() -> Self {
        Self { fixed_cost: 10_100.0, variable_cost_per_unit: 495.0 }
    }
}

/// Derived value for one group size. Never stored beyond a series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PricePoint {
    pub group_size: u32,
    pub price_per_person: f64,
    pub total_cost: f64,
}

impl PricePoint {
    /// Chart coordinates: (group size, price per person).
    pub fn xy(&self) -> (f64, f64) { (self.group_size as f64, self.price_per_person) }
}

/// Evaluate the model for `group_size`.
///
/// A group size of zero is degenerate: the total is just the fixed cost and the
/// price per person is reported as zero instead of dividing by zero.
pub fn price_for(group_size: u32, params: &CostParameters) -> PricePoint {
    if group_size == 0 {
        return PricePoint { group_size, price_per_person: 0.0, total_cost: params.fixed_cost };
    }
    let n = group_size as f64;
    let total_cost = params.fixed_cost + n * params.variable_cost_per_unit;
    PricePoint { group_size, price_per_person: total_cost / n, total_cost }
}

/// Owned handle around a fixed set of parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CostModel {
    params: CostParameters,
}

impl CostModel {
    pub fn new(params: CostParameters) -> Self { Self { params } }

    pub fn params(&self) -> &CostParameters { &self.params }

    #[inline]
    pub fn price_for(&self, group_size: u32) -> PricePoint {
        price_for(group_size, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_non_finite() {
        assert!(CostParameters::new(-1.0, 5.0).is_err());
        assert!(CostParameters::new(1.0, f64::NAN).is_err());
        assert!(CostParameters::new(f64::INFINITY, 0.0).is_err());
        assert!(CostParameters::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn zero_variable_cost_splits_fixed_cost_evenly() {
        let p = CostParameters::new(100.0, 0.0).unwrap();
        let pt = price_for(4, &p);
        assert_eq!(pt.total_cost, 100.0);
        assert_eq!(pt.price_per_person, 25.0);
    }
}
