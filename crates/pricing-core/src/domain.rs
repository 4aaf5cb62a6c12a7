// File: crates/pricing-core/src/domain.rs
// Summary: Supported group-size domain, input parsing/clamping and the selection state.

use serde::Serialize;
use tracing::debug;

use crate::error::{PricingError, Result};

/// Inclusive range of selectable group sizes.
/// Contract: 1 <= min <= max.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GroupDomain {
    min: u32,
    max: u32,
}

impl GroupDomain {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min == 0 || max == 0 || min > max {
            return Err(PricingError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 { self.min }
    pub fn max(&self) -> u32 { self.max }

    /// Number of integer sizes in the domain.
    pub fn len(&self) -> usize { (self.max - self.min) as usize + 1 }

    pub fn is_empty(&self) -> bool { false }

    pub fn contains(&self, n: u32) -> bool { n >= self.min && n <= self.max }

    pub fn iter(&self) -> impl Iterator<Item = u32> { self.min..=self.max }

    /// Clamp any integer to the nearest bound.
    pub fn clamp(&self, n: i64) -> u32 {
        n.clamp(self.min as i64, self.max as i64) as u32
    }

    /// Parse raw control text into a size inside the domain.
    ///
    /// Only integer text is accepted (optional sign, decimal digits). Values
    /// outside `[min, max]`, including ones too large for `i64`, are clamped.
    pub fn parse_clamped(&self, raw: &str) -> Result<u32> {
        let s = raw.trim();
        let n = match s.parse::<i64>() {
            Ok(n) => n,
            Err(_) => {
                let (negative, digits) = match s.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, s.strip_prefix('+').unwrap_or(s)),
                };
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(PricingError::NonNumericInput(raw.to_string()));
                }
                // overflowing integer text lands on the nearest bound
                if negative { i64::MIN } else { i64::MAX }
            }
        };
        let clamped = self.clamp(n);
        if clamped as i64 != n {
            debug!(input = n, clamped, min = self.min, max = self.max, "selection clamped into domain");
        }
        Ok(clamped)
    }
}

impl Default for GroupDomain {
    fn default() -> Self { Self { min: 20, max: 100 } }
}

/// The currently selected group size. The only mutable state of the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    group_size: u32,
}

impl SelectionState {
    /// Start at `initial`, clamped into the domain.
    pub fn new(initial: i64, domain: &GroupDomain) -> Self {
        Self { group_size: domain.clamp(initial) }
    }

    pub fn group_size(&self) -> u32 { self.group_size }

    /// Transition for one input event. Non-numeric input keeps the current state.
    pub fn next(self, raw: &str, domain: &GroupDomain) -> Self {
        match domain.parse_clamped(raw) {
            Ok(group_size) => Self { group_size },
            Err(_) => self,
        }
    }
}
